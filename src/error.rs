// src/error.rs

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// 登录流程中可能出现的失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("登录页面中未找到 CSRF Token")]
    MissingToken,
    #[error("登录被拒绝 (邮箱或密码错误)，最终跳转地址: {0}")]
    RejectedCredentials(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("认证失败: {0}")]
    Auth(#[from] AuthError),
    #[error("课程目录获取失败: {0}")]
    Discovery(String),
    #[error("配置错误: {0}")]
    Config(String),
    #[error("无法创建目录 '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),
    #[error("服务器返回错误状态 {status}: {url}")]
    Http { url: String, status: StatusCode },
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL 解析错误: {0}")]
    Url(#[from] url::ParseError),
    #[error("未知错误: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
