// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CATALOG_FILE_NAME: &str = "blueprint.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const DEFAULT_SAVE_DIR: &str = "downloads";
pub const DEFAULT_BASE_URL: &str = "https://vueschool.io";
pub const DEFAULT_SITE_DIR: &str = "vueschool";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 视频下载最多跟随的重定向次数
pub const MAX_ASSET_REDIRECTS: usize = 2;

pub mod env {
    pub const EMAIL: &str = "VUESCHOOL_EMAIL";
    pub const PASSWORD: &str = "VUESCHOOL_PASSWORD";
}

pub mod site {
    pub const LOGIN_PATH: &str = "login";
    pub const COURSES_PATH: &str = "courses";
    pub const CSRF_META_NAME: &str = "csrf-token";
    pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";
}

pub mod files {
    pub const TEXT_EXT: &str = "md";
    pub const VIDEO_EXT: &str = "mp4";
}
