// src/cli.rs

use crate::constants;
use clap::{Parser, ValueEnum, command, crate_version};
use std::path::PathBuf;

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
)]
pub struct Cli {
    // --- 账号 (Account) ---
    /// 登录邮箱 (也可通过环境变量 VUESCHOOL_EMAIL 或配置文件提供)
    #[arg(short, long, help_heading = "Account")]
    pub email: Option<String>,
    /// 登录密码 (未提供时将提示输入)
    #[arg(short, long, help_heading = "Account")]
    pub password: Option<String>,

    // --- 下载选项 (Options) ---
    /// 网站根地址
    #[arg(long, value_name = "URL", help_heading = "Options")]
    pub url: Option<String>,
    /// 只下载指定标题的课程，可重复使用
    #[arg(short, long = "course", value_name = "TITLE", help_heading = "Options")]
    pub courses: Vec<String>,
    /// 设置文件保存目录
    #[arg(short, long, value_name = "DIR", default_value_os_t = PathBuf::from(constants::DEFAULT_SAVE_DIR), help_heading = "Options")]
    pub output: PathBuf,
    /// 保存目录下的站点子目录名
    #[arg(long, value_name = "NAME", help_heading = "Options")]
    pub site_dir: Option<String>,
    /// 课程目录缓存文件路径
    #[arg(long, value_name = "FILE", help_heading = "Options")]
    pub catalog_file: Option<PathBuf>,
    /// 忽略课程目录缓存，重新抓取
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub refresh_catalog: bool,

    // --- 通用选项 (General) ---
    /// 显示此帮助信息并退出
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// 显示版本信息并退出
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}
