// src/main.rs

use clap::{CommandFactory, FromArgMatches};
use colored::*;
use std::{env, sync::Arc};
use vueschool_dl::{
    cli::Cli,
    error::{AppError, AuthError},
    logging, run_from_cli, ui,
};

#[tokio::main]
async fn main() {
    // 为 Windows 终端启用 ANSI 颜色支持。
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }

    let bin_name = env::var("CARGO_BIN_NAME").unwrap_or_else(|_| "vueschool-dl".to_string());

    let after_help = format!(
        "示例:\n  # 下载账号可访问的全部课程\n  {bin} -e me@example.com -o ./archive\n\n  # 只下载指定课程\n  {bin} -c \"Vue.js Fundamentals\" -c \"Vue Router for Everyone\"\n\n  # 忽略本地课程目录缓存，重新抓取\n  {bin} --refresh-catalog",
        bin = bin_name
    );

    let cmd = Cli::command().after_help(after_help);
    let args = match Cli::from_arg_matches(&cmd.get_matches()) {
        Ok(args) => Arc::new(args),
        Err(e) => e.exit(),
    };

    logging::init(args.log_level);

    match run_from_cli(args).await {
        // 单个文件失败已体现在报告中，不影响退出码
        Ok(_) => {}
        Err(AppError::Auth(e)) => {
            log::error!("登录失败: {}", e);
            let hint = match &e {
                AuthError::MissingToken => "登录页中没有找到 CSRF Token，站点结构可能已变化。",
                AuthError::RejectedCredentials(_) => "请检查邮箱和密码是否正确。",
            };
            let message = e.to_string();
            ui::box_message("登录失败", &[message.as_str(), hint], |s| s.red());
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("程序执行出错: {}", e);
            eprintln!("\n{} {}", "[X]".red(), format!("程序执行出错: {}", e).red());
            std::process::exit(1);
        }
    }
}
