// src/extractor/chapter.rs

use crate::{client::Session, error::*, pages::ChapterPage};
use log::{debug, info};
use url::Url;

/// 章节的文字内容与视频地址，只在写入磁盘前短暂存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterContent {
    pub text: String,
    pub video_url: Url,
}

pub struct ChapterExtractor<'a> {
    session: &'a Session,
}

impl<'a> ChapterExtractor<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// `Ok(None)` 表示页面中没有找到下载链接
    pub async fn extract(&self, chapter_url: &str) -> AppResult<Option<ChapterContent>> {
        let url = self.session.resolve(chapter_url)?;
        let page = self.session.get_page(&url).await?;
        parse_chapter(&page.url, &page.body)
    }
}

/// 从章节页面中提取内容；视频链接相对于页面地址解析
pub fn parse_chapter(page_url: &Url, body: &str) -> AppResult<Option<ChapterContent>> {
    let page = ChapterPage::parse(body);
    let links = page.video_links();
    let Some(first) = links.first() else {
        return Ok(None);
    };
    if links.len() > 1 {
        info!("页面 {} 有 {} 个下载链接，使用第一个", page_url, links.len());
    }

    let title = page.title_html().unwrap_or_else(|| {
        debug!("页面 {} 缺少章节标题", page_url);
        String::new()
    });
    let body = page.body_html().unwrap_or_else(|| {
        debug!("页面 {} 缺少正文", page_url);
        String::new()
    });

    Ok(Some(ChapterContent {
        text: compose_text(&title, &body),
        video_url: page_url.join(first)?,
    }))
}

pub fn compose_text(title: &str, body: &str) -> String {
    format!("# {}<br>{}", title, body)
}
