// src/downloader/mod.rs

mod engine;
mod job;
pub mod progress;

pub use engine::DownloadEngine;
pub use job::Archiver;

use crate::{
    models::{CourseReport, CourseStatus, ItemOutcome, ItemStatus},
    symbols, ui,
};
use colored::*;
use itertools::Itertools;
use log::info;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadStats {
    pub total: usize,
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    pub courses_failed: usize,
}

/// 一次运行的汇总报告：按课程、按章节记录每个文件的结果
#[derive(Clone, Debug, Default)]
pub struct ArchiveReport {
    courses: Vec<CourseReport>,
}

impl ArchiveReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_course(&mut self, course: CourseReport) {
        info!(
            "课程 '{}' 处理完毕，状态: {:?}，章节数: {}",
            course.title,
            course.status,
            course.chapters.len()
        );
        self.courses.push(course);
    }

    pub fn courses(&self) -> &[CourseReport] {
        &self.courses
    }

    fn items(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.courses
            .iter()
            .flat_map(|c| c.chapters.iter())
            .flat_map(|ch| ch.items())
    }

    pub fn get_stats(&self) -> DownloadStats {
        let mut stats = DownloadStats::default();
        for item in self.items() {
            stats.total += 1;
            match item.status {
                ItemStatus::Written | ItemStatus::Downloaded => stats.success += 1,
                ItemStatus::AlreadyDownloaded => stats.skipped += 1,
                ItemStatus::NoContent | ItemStatus::Failed => stats.failed += 1,
            }
        }
        stats.courses_failed = self
            .courses
            .iter()
            .filter(|c| matches!(c.status, CourseStatus::DirectoryFailed(_)))
            .count();
        stats
    }

    pub fn did_all_succeed(&self) -> bool {
        let stats = self.get_stats();
        stats.failed == 0 && stats.courses_failed == 0
    }

    pub fn print_report(&self) {
        let stats = self.get_stats();
        info!(
            "下载报告: Total={}, Success={}, Skipped={}, Failed={}, CoursesFailed={}",
            stats.total, stats.success, stats.skipped, stats.failed, stats.courses_failed
        );

        let collect = |pred: fn(&ItemStatus) -> bool| -> Vec<(String, String)> {
            self.courses
                .iter()
                .flat_map(|c| {
                    c.chapters
                        .iter()
                        .flat_map(|ch| ch.items())
                        .filter(move |item| pred(&item.status))
                        .map(move |item| (format!("{}/{}", c.dir_name, item.filename), item.reason()))
                })
                .collect()
        };
        let skipped = collect(|s| *s == ItemStatus::AlreadyDownloaded);
        let failed = collect(|s| matches!(s, ItemStatus::NoContent | ItemStatus::Failed));
        let failed_courses: Vec<(String, String)> = self
            .courses
            .iter()
            .filter_map(|c| match &c.status {
                CourseStatus::DirectoryFailed(reason) => Some((c.title.clone(), reason.clone())),
                _ => None,
            })
            .collect();

        if !skipped.is_empty() || !failed.is_empty() || !failed_courses.is_empty() {
            ui::print_sub_header("下载详情报告");
            if !skipped.is_empty() {
                println!("\n{} 跳过的文件 ({}个):", *symbols::INFO, stats.skipped);
                print_grouped_report(&skipped, |s| s.cyan());
            }
            if !failed.is_empty() {
                println!("\n{} 失败的文件 ({}个):", *symbols::ERROR, stats.failed);
                print_grouped_report(&failed, |s| s.red());
            }
            if !failed_courses.is_empty() {
                println!("\n{} 跳过的课程 ({}门):", *symbols::ERROR, stats.courses_failed);
                print_grouped_report(&failed_courses, |s| s.red());
            }
        }
        ui::print_sub_header("任务总结");
        if self.did_all_succeed() {
            println!(
                "{} 所有 {} 个文件均已完成 ({} 个已跳过)。",
                *symbols::OK,
                stats.total,
                stats.skipped
            );
        } else {
            let summary = format!(
                "{} | {} | {}",
                format!("成功: {}", stats.success).green(),
                format!("失败: {}", stats.failed).red(),
                format!("跳过: {}", stats.skipped).yellow()
            );
            println!("{}", summary);
        }
    }
}

// 模块内的私有辅助函数
fn print_grouped_report(
    items: &[(String, String)],
    color_fn: fn(ColoredString) -> ColoredString,
) {
    let mut grouped: HashMap<&String, Vec<&String>> = HashMap::new();
    for (filename, reason) in items {
        grouped.entry(reason).or_default().push(filename);
    }
    for (reason, filenames) in grouped.into_iter().sorted() {
        println!("  - {}", color_fn(format!("原因: {}", reason).into()));
        for filename in filenames.into_iter().sorted() {
            println!("    - {}", filename);
        }
    }
}
