// src/catalog/discover.rs

use super::{Catalog, Course, cache};
use crate::{
    client::Session,
    config::CachePolicy,
    constants,
    error::*,
    pages::{ChapterIndexPage, CourseIndexPage},
    ui, utils,
};
use log::{debug, info, warn};
use std::path::Path;
use url::Url;

/// 一次在线抓取的结果。`skipped` 记录页面加载失败而被略过的课程。
#[derive(Debug, Default)]
pub struct LiveDiscovery {
    pub catalog: Catalog,
    pub skipped: Vec<String>,
}

impl LiveDiscovery {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub struct CatalogDiscoverer<'a> {
    session: &'a Session,
}

impl<'a> CatalogDiscoverer<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// 先查缓存，未命中时在线抓取并写回缓存。写缓存失败只给出警告。
    pub async fn discover(&self, policy: CachePolicy, cache_path: &Path) -> AppResult<Catalog> {
        if policy == CachePolicy::PreferCache
            && let Some(catalog) = cache::load(cache_path)
        {
            ui::info(&format!("使用本地课程目录缓存: {}", cache_path.display()));
            return Ok(catalog);
        }

        let discovery = self.discover_live().await?;
        if !discovery.is_complete() {
            warn!(
                "{} 门课程未能加载，本次不写入缓存: {:?}",
                discovery.skipped.len(),
                discovery.skipped
            );
            ui::warn(&format!(
                "{} 门课程的章节列表加载失败，课程目录未写入缓存。",
                discovery.skipped.len()
            ));
        } else if let Err(e) = cache::store(cache_path, &discovery.catalog) {
            warn!("写入课程目录缓存 {:?} 失败: {}", cache_path, e);
            ui::warn(&format!("无法保存课程目录缓存: {}", e));
        }
        Ok(discovery.catalog)
    }

    /// 课程列表页 -> 每门课程的章节列表页
    pub async fn discover_live(&self) -> AppResult<LiveDiscovery> {
        let index_url = self.session.resolve(constants::site::COURSES_PATH)?;
        let page = self
            .session
            .get_page(&index_url)
            .await
            .map_err(|e| AppError::Discovery(format!("无法加载课程列表 {}: {}", index_url, e)))?;
        let links = CourseIndexPage::parse(&page.body).course_links();
        info!("课程列表页共发现 {} 门课程", links.len());

        let mut discovery = LiveDiscovery::default();
        let pbar = ui::new_catalog_progress_bar(links.len() as u64);
        for link in links {
            pbar.set_message(utils::truncate_text(&link.title, 48));
            match self.fetch_course(&link.title, &link.href).await {
                Ok(course) => {
                    debug!("课程 '{}' 共 {} 个章节", course.title, course.chapters.len());
                    discovery.catalog.insert(course);
                }
                Err(e) => {
                    warn!("课程 '{}' 的章节列表加载失败: {}", link.title, e);
                    pbar.println(format!("课程 '{}' 加载失败: {}", link.title, e));
                    discovery.skipped.push(link.title);
                }
            }
            pbar.inc(1);
        }
        pbar.finish_and_clear();
        Ok(discovery)
    }

    async fn fetch_course(&self, title: &str, href: &str) -> AppResult<Course> {
        let course_url: Url = self.session.resolve(href)?;
        let page = self.session.get_page(&course_url).await?;
        Ok(harvest_chapters(title, &ChapterIndexPage::parse(&page.body)))
    }
}

/// 对页面上的每个章节块，都遍历整页的 `a.title` 链接 (而不是块内链接)。
/// 因为按 slug 去重，多个块只会产生重复写入；没有章节块的页面得到空课程。
pub(crate) fn harvest_chapters(title: &str, page: &ChapterIndexPage) -> Course {
    let mut course = Course::new(title);
    for _ in 0..page.chapter_block_count() {
        for href in page.chapter_hrefs() {
            let (url, slug) = utils::split_chapter_href(&href);
            course.insert_chapter(slug, url);
        }
    }
    course
}
