// src/lib.rs

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod pages;
pub mod symbols;
pub mod ui;
pub mod utils;

use crate::{
    cli::Cli,
    config::AppConfig,
    downloader::{ArchiveReport, Archiver},
    error::AppResult,
};
use log::{debug, info};
use std::sync::Arc;

/// 库的公共入口点，由 `main.rs` 调用
pub async fn run_from_cli(args: Arc<Cli>) -> AppResult<ArchiveReport> {
    // Cli 中可能含有明文密码，只记录非敏感部分
    debug!(
        "CLI 参数: url={:?}, courses={:?}, output={:?}, refresh_catalog={}",
        args.url, args.courses, args.output, args.refresh_catalog
    );

    let config = AppConfig::new(&args)?;
    config.validate()?;
    debug!("加载的应用配置: {:?}", config);
    info!(
        "站点 {}，保存目录 {:?}，课程目录缓存 {:?}",
        config.base_url,
        config.archive_root(),
        config.catalog_file
    );

    Archiver::new(Arc::new(config))?.run().await
}
