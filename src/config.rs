// src/config.rs

pub mod credentials;

use self::credentials::{Credentials, load_or_create_external_config, resolve_credentials};
use crate::{
    cli::Cli,
    constants,
    error::{AppError, AppResult},
};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// 用户主目录下的 JSON 配置文件内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
    #[serde(default)]
    pub network: NetworkConfig,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_site_dir() -> String {
    constants::DEFAULT_SITE_DIR.to_string()
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            email: None,
            password: None,
            courses: Vec::new(),
            site_dir: default_site_dir(),
            network: NetworkConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// 缓存存在且非空时直接使用
    PreferCache,
    /// 忽略缓存，重新抓取并覆盖缓存
    Refresh,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub credentials: Credentials,
    pub output_dir: PathBuf,
    pub site_dir: String,
    pub courses: Vec<String>,
    pub catalog_file: PathBuf,
    pub cache_policy: CachePolicy,
    pub user_agent: String,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl AppConfig {
    pub fn new(args: &Cli) -> AppResult<Self> {
        let external_config = load_or_create_external_config()?;
        let credentials = resolve_credentials(args, &external_config)?;

        let base_url = args
            .url
            .clone()
            .unwrap_or_else(|| external_config.base_url.clone());
        let base_url = Url::parse(&base_url)?;

        let catalog_file = match &args.catalog_file {
            Some(path) => path.clone(),
            None => credentials::config_dir()?.join(constants::CATALOG_FILE_NAME),
        };

        let courses = if args.courses.is_empty() {
            external_config.courses
        } else {
            args.courses.clone()
        };

        Ok(Self {
            base_url,
            credentials,
            output_dir: args.output.clone(),
            site_dir: args.site_dir.clone().unwrap_or(external_config.site_dir),
            courses,
            catalog_file,
            cache_policy: if args.refresh_catalog {
                CachePolicy::Refresh
            } else {
                CachePolicy::PreferCache
            },
            user_agent: constants::USER_AGENT.into(),
            connect_timeout: external_config
                .network
                .connect_timeout_secs
                .map(Duration::from_secs),
            timeout: external_config.network.timeout_secs.map(Duration::from_secs),
        })
    }

    /// 登录成功后应跳转到的地址：站点根路径
    pub fn canonical_root(&self) -> Url {
        let mut root = self.base_url.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);
        root
    }

    /// `{target}/{site-dir}`，所有课程目录都建在这里
    pub fn archive_root(&self) -> PathBuf {
        self.output_dir.join(&self.site_dir)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.credentials.email.trim().is_empty() {
            return Err(AppError::Config("未提供登录邮箱".to_string()));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::Other(anyhow!(
                "不支持的网站地址协议: {}",
                self.base_url.scheme()
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1/").unwrap(),
            credentials: Credentials {
                email: "student@example.com".to_string(),
                password: "secret".to_string(),
            },
            output_dir: PathBuf::from(constants::DEFAULT_SAVE_DIR),
            site_dir: constants::DEFAULT_SITE_DIR.to_string(),
            courses: Vec::new(),
            catalog_file: PathBuf::from(constants::CATALOG_FILE_NAME),
            cache_policy: CachePolicy::PreferCache,
            user_agent: "test-agent/1.0".to_string(),
            connect_timeout: None,
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "testing")]
    #[test]
    fn test_canonical_root_is_site_root() {
        let config = AppConfig {
            base_url: Url::parse("https://vueschool.io/courses?page=2#top").unwrap(),
            ..AppConfig::default()
        };
        assert_eq!(config.canonical_root().as_str(), "https://vueschool.io/");

        let config = AppConfig {
            base_url: Url::parse("https://vueschool.io").unwrap(),
            ..AppConfig::default()
        };
        assert_eq!(config.canonical_root(), Url::parse("https://vueschool.io/").unwrap());
    }

    #[test]
    fn test_external_config_defaults_fill_missing_fields() {
        let config: ExternalConfig = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(config.site_dir, constants::DEFAULT_SITE_DIR);
        assert_eq!(config.email.as_deref(), Some("a@b.c"));
        assert!(config.courses.is_empty());
        assert!(config.network.timeout_secs.is_none());
    }

    #[test]
    fn test_password_not_written_when_absent() {
        let json = serde_json::to_string(&ExternalConfig::default()).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"site_dir\":\"vueschool\""));
    }
}
