// src/pages/course_index.rs

use super::{normalized_text, selector};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static COURSE_ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("div.w-full.px-4.mb-8 > a"));
static COURSE_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h3"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLink {
    pub title: String,
    pub href: String,
}

/// 课程列表页 (`/courses`)
pub struct CourseIndexPage {
    document: Html,
}

impl CourseIndexPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// 按页面顺序返回课程；没有标题或链接的卡片被忽略
    pub fn course_links(&self) -> Vec<CourseLink> {
        self.document
            .select(&COURSE_ANCHOR)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                let title = anchor.select(&COURSE_TITLE).next().map(normalized_text)?;
                if title.is_empty() || href.is_empty() {
                    return None;
                }
                Some(CourseLink {
                    title,
                    href: href.to_string(),
                })
            })
            .collect()
    }
}
