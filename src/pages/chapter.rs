// src/pages/chapter.rs

use super::selector;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static VIDEO_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| selector("div.text-blue-darkest div.text-blue-darkest > a"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("div.flex-no-grow h1.font-normal"));
static BODY: LazyLock<Selector> = LazyLock::new(|| selector("div.flex-no-grow div.text"));

/// 章节详情页
pub struct ChapterPage {
    document: Html,
}

impl ChapterPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// 内容区中的下载链接，按页面顺序
    pub fn video_links(&self) -> Vec<String> {
        self.document
            .select(&VIDEO_ANCHOR)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| !href.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn title_html(&self) -> Option<String> {
        self.document.select(&TITLE).next().map(|e| e.inner_html())
    }

    pub fn body_html(&self) -> Option<String> {
        self.document.select(&BODY).next().map(|e| e.inner_html())
    }
}
