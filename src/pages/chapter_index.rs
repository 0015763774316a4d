// src/pages/chapter_index.rs

use super::selector;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static CHAPTER_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector("div#chapters div.chapter"));
static CHAPTER_ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a.title"));

/// 课程详情页，列出该课程的全部章节
pub struct ChapterIndexPage {
    document: Html,
}

impl ChapterIndexPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    pub fn chapter_block_count(&self) -> usize {
        self.document.select(&CHAPTER_BLOCK).count()
    }

    /// 整个页面上所有 `a.title` 的链接，跳过作为分隔符的 `#`
    pub fn chapter_hrefs(&self) -> Vec<String> {
        self.document
            .select(&CHAPTER_ANCHOR)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| *href != "#")
            .map(str::to_string)
            .collect()
    }
}
