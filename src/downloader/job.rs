// src/downloader/job.rs

use super::{
    ArchiveReport,
    engine::{self, DownloadEngine},
    progress::{ConsoleProgress, ProgressSink},
};
use crate::{
    auth::Authenticator,
    catalog::{Catalog, CatalogDiscoverer, Chapter, Course},
    client::Session,
    config::AppConfig,
    error::*,
    extractor::{self, ChapterExtractor, ChapterFiles},
    models::{ChapterReport, CourseReport, CourseStatus, ItemOutcome, ItemStatus},
    symbols, ui, utils,
};
use colored::*;
use log::{debug, error, info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// 整个归档流程：登录 -> 获取课程目录 -> 逐课程、逐章节保存内容。
/// 课程、章节和下载严格按顺序处理。
pub struct Archiver {
    config: Arc<AppConfig>,
    session: Session,
}

impl Archiver {
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let session = Session::new(&config)?;
        Ok(Self { config, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 只有登录失败、课程目录获取失败和根目录创建失败会返回错误，
    /// 其余失败都记录在报告中。
    pub async fn run(&self) -> AppResult<ArchiveReport> {
        ui::print_header("登录");
        Authenticator::new(&self.session)
            .authenticate(&self.config.credentials, &self.config.canonical_root())
            .await?;
        ui::ok(&format!("已登录: {}", self.config.credentials.email));

        let root = self.config.archive_root();
        create_dir(&root)?;
        let display_root = dunce::canonicalize(&root).unwrap_or_else(|_| root.clone());
        info!("文件将保存到目录: \"{}\"", display_root.display());
        ui::info(&format!("文件将保存到目录: \"{}\"", display_root.display()));

        let catalog = self.load_catalog().await?;

        let mut report = ArchiveReport::new();
        let course_count = catalog.len();
        for (index, course) in catalog.courses().iter().enumerate() {
            ui::print_header(&format!(
                "处理课程: '{}' ({}/{})",
                course.title,
                index + 1,
                course_count
            ));
            let course_report = self.archive_course(course, &root).await;
            report.record_course(course_report);
        }

        report.print_report();
        Ok(report)
    }

    async fn load_catalog(&self) -> AppResult<Catalog> {
        ui::print_header("获取课程目录");
        let mut catalog = CatalogDiscoverer::new(&self.session)
            .discover(self.config.cache_policy, &self.config.catalog_file)
            .await?;

        for title in &self.config.courses {
            if catalog.get(title).is_none() {
                warn!("指定的课程 '{}' 不在课程目录中", title);
                ui::warn(&format!("未找到指定的课程: '{}'", title));
            }
        }
        catalog.retain_titles(&self.config.courses);

        ui::print_sub_header("待下载课程");
        if catalog.is_empty() {
            ui::warn("没有需要下载的课程。");
        } else {
            ui::listing(&catalog.titles());
        }
        Ok(catalog)
    }

    async fn archive_course(&self, course: &Course, root: &Path) -> CourseReport {
        let dir_name = utils::sanitize_course_title(&course.title);
        let chapters = extractor::content_chapters(&course.chapters);
        if chapters.is_empty() {
            ui::warn("没有可下载的章节。");
            return CourseReport::new(&course.title, &dir_name, CourseStatus::NoChapters);
        }

        let course_dir = root.join(&dir_name);
        if let Err(e) = create_dir(&course_dir) {
            error!("课程 '{}' 的目录创建失败: {}", course.title, e);
            ui::error(&format!("无法创建课程目录: {}", e));
            return CourseReport::new(
                &course.title,
                &dir_name,
                CourseStatus::DirectoryFailed(e.to_string()),
            );
        }

        let mut report = CourseReport::new(&course.title, &dir_name, CourseStatus::Processed);
        let chapter_count = chapters.len();
        for (index, chapter) in chapters.into_iter().enumerate() {
            let ordinal = index + 1;
            ui::print_sub_header(&format!(
                "章节 '{}' ({}/{})",
                utils::dashes_to_title(&chapter.slug),
                ordinal,
                chapter_count
            ));
            let files = ChapterFiles::new(&course_dir, ordinal, &chapter.slug);
            report.chapters.push(self.archive_chapter(chapter, &files).await);
        }
        report
    }

    async fn archive_chapter(&self, chapter: &Chapter, files: &ChapterFiles) -> ChapterReport {
        let text_name = file_name(&files.text);
        let video_name = file_name(&files.video);
        let report = |text: ItemOutcome, video: ItemOutcome| ChapterReport {
            ordinal: files.ordinal,
            slug: chapter.slug.clone(),
            text,
            video,
        };

        let content = match ChapterExtractor::new(&self.session).extract(&chapter.url).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                warn!("章节 '{}' 页面中没有下载链接: {}", chapter.slug, chapter.url);
                ui::warn("无法获取下载链接。");
                return report(
                    ItemOutcome::new(text_name, ItemStatus::NoContent),
                    ItemOutcome::new(video_name, ItemStatus::NoContent),
                );
            }
            Err(e) => {
                warn!("章节 '{}' 页面加载失败: {}", chapter.slug, e);
                ui::warn(&format!("章节页面加载失败: {}", e));
                let reason = e.to_string();
                return report(
                    ItemOutcome::failed(text_name, reason.clone()),
                    ItemOutcome::failed(video_name, reason),
                );
            }
        };

        let text = if files.text.exists() {
            ui::skip(&format!("文件 '{}' 已下载过", text_name));
            ItemOutcome::new(text_name, ItemStatus::AlreadyDownloaded)
        } else {
            match engine::write_file(&files.text, content.text.as_bytes()) {
                Ok(()) => {
                    debug!("已写入 {:?}", files.text);
                    ItemOutcome::new(text_name, ItemStatus::Written)
                }
                Err(e) => {
                    warn!("写入 {:?} 失败: {}", files.text, e);
                    ui::warn(&format!("无法写入 '{}': {}", text_name, e));
                    ItemOutcome::failed(text_name, e.to_string())
                }
            }
        };

        let video = if files.video.exists() {
            ui::skip(&format!("文件 '{}' 已下载过", video_name));
            ItemOutcome::new(video_name, ItemStatus::AlreadyDownloaded)
        } else {
            let mut progress = ConsoleProgress::new(video_name.clone());
            self.download_video(&content.video_url, &files.video, &video_name, &mut progress)
                .await
        };

        report(text, video)
    }

    async fn download_video(
        &self,
        url: &url::Url,
        destination: &Path,
        filename: &str,
        progress: &mut dyn ProgressSink,
    ) -> ItemOutcome {
        match DownloadEngine::new(&self.session)
            .download(url, destination, progress)
            .await
        {
            Ok(bytes) => {
                info!("已下载 {:?} ({} 字节)", destination, bytes);
                println!("{} {}", *symbols::OK, filename);
                ItemOutcome::new(filename, ItemStatus::Downloaded)
            }
            Err(e) => {
                ui::warn(&format!("{} {}", filename, format!("下载失败: {}", e).red()));
                ItemOutcome::failed(filename, e.to_string())
            }
        }
    }
}

fn create_dir(path: &Path) -> AppResult<()> {
    fs::create_dir_all(path).map_err(|source| AppError::CreateDir {
        path: PathBuf::from(path),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
