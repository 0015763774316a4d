// src/extractor/mod.rs

pub mod chapter;

pub use chapter::{ChapterContent, ChapterExtractor};

use crate::{catalog::Chapter, constants, utils};
use log::debug;
use std::path::{Path, PathBuf};

/// 一个章节在课程目录中对应的两个文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFiles {
    pub ordinal: usize,
    pub text: PathBuf,
    pub video: PathBuf,
}

impl ChapterFiles {
    /// `ordinal` 为课程内 (排除练习页后) 从 1 开始的序号
    pub fn new(course_dir: &Path, ordinal: usize, slug: &str) -> Self {
        Self {
            ordinal,
            text: course_dir.join(utils::chapter_file_name(ordinal, slug, constants::files::TEXT_EXT)),
            video: course_dir.join(utils::chapter_file_name(ordinal, slug, constants::files::VIDEO_EXT)),
        }
    }
}

/// 去掉练习/测验页面 (`.../activity/NNN`)，其余章节保持原顺序
pub fn content_chapters(chapters: &[Chapter]) -> Vec<&Chapter> {
    chapters
        .iter()
        .filter(|chapter| {
            let is_activity = utils::is_activity_url(&chapter.url);
            if is_activity {
                debug!("排除练习章节 '{}': {}", chapter.slug, chapter.url);
            }
            !is_activity
        })
        .collect()
}
