// src/config/credentials.rs

use crate::{
    cli::Cli,
    config::ExternalConfig,
    constants,
    error::{AppError, AppResult},
    ui,
};
use anyhow::{Context, anyhow};
use log::{debug, info};
use std::{fmt, fs, path::PathBuf};

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// 避免密码出现在调试日志里
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

pub(crate) fn config_dir() -> AppResult<PathBuf> {
    let dir = dirs::home_dir()
        .ok_or_else(|| AppError::Other(anyhow!("无法获取用户主目录")))?
        .join(constants::CONFIG_DIR_NAME);
    Ok(dir)
}

fn get_config_path() -> AppResult<PathBuf> {
    Ok(config_dir()?.join(constants::CONFIG_FILE_NAME))
}

pub(crate) fn load_or_create_external_config() -> AppResult<ExternalConfig> {
    let config_path = get_config_path()?;
    if config_path.is_file() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("读取配置文件 '{}' 失败", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件 '{}' 失败", config_path.display()))
            .map_err(AppError::from)
    } else {
        info!("配置文件 {:?} 不存在，将创建默认配置。", config_path);
        let config = ExternalConfig::default();

        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json_content = serde_json::to_string_pretty(&config)?;
        fs::write(&config_path, json_content)?;

        Ok(config)
    }
}

/// 按 命令行 > 环境变量 > 配置文件 的顺序查找一个值，同时返回来源描述
pub fn resolve_value(
    cli_value: Option<&str>,
    env_key: &str,
    file_value: Option<&str>,
) -> (Option<String>, String) {
    if let Some(value) = cli_value && !value.is_empty() {
        debug!("使用来自命令行参数的 {}", env_key);
        return (Some(value.to_string()), "命令行参数".to_string());
    }
    if let Ok(value) = std::env::var(env_key) && !value.is_empty() {
        debug!("使用来自环境变量 {} 的值", env_key);
        return (Some(value), format!("环境变量 ({})", env_key));
    }
    if let Some(value) = file_value && !value.is_empty() {
        debug!("使用来自本地配置文件的 {}", env_key);
        return (Some(value.to_string()), "本地配置文件".to_string());
    }
    debug!("未在任何位置找到 {}", env_key);
    (None, "未找到".to_string())
}

pub fn resolve_credentials(args: &Cli, file: &ExternalConfig) -> AppResult<Credentials> {
    let (email, source) = resolve_value(
        args.email.as_deref(),
        constants::env::EMAIL,
        file.email.as_deref(),
    );
    let email = email.ok_or_else(|| {
        AppError::Config(format!(
            "未提供登录邮箱，请使用 --email、环境变量 {} 或配置文件",
            constants::env::EMAIL
        ))
    })?;
    info!("从 {} 加载登录邮箱", source);

    let (password, source) = resolve_value(
        args.password.as_deref(),
        constants::env::PASSWORD,
        file.password.as_deref(),
    );
    let password = match password {
        Some(password) => {
            info!("从 {} 加载登录密码", source);
            password
        }
        None => {
            let password = ui::prompt_hidden(&format!("请输入 {} 的密码 (输入不可见)", email))?;
            if password.is_empty() {
                return Err(AppError::Config("密码不能为空".to_string()));
            }
            password
        }
    };

    Ok(Credentials { email, password })
}
