// tests/common/mod.rs

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use std::{fs, path::Path};
use url::Url;
use vueschool_dl::config::AppConfig;

pub const EMAIL: &str = "student@example.com";
pub const PASSWORD: &str = "secret";
pub const CSRF_TOKEN: &str = "fixture-csrf-token";

pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}", name)).expect("无法读取测试页面文件")
}

/// 指向模拟服务器、文件写入临时目录的配置
pub fn config_for(server: &ServerGuard, dir: &Path) -> AppConfig {
    AppConfig {
        base_url: Url::parse(&server.url()).unwrap(),
        output_dir: dir.join("downloads"),
        catalog_file: dir.join("blueprint.json"),
        ..AppConfig::default()
    }
}

pub async fn mock_page(server: &mut ServerGuard, path: &str, fixture_name: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(fixture(fixture_name))
        .create_async()
        .await
}

/// 登录页、登录表单和登录后的首页。`accept` 为 false 时表单提交后回到登录页。
pub async fn mock_login(server: &mut ServerGuard, accept: bool) -> Vec<Mock> {
    let login_page = mock_page(server, "/login", "login.html").await;
    let submit = server
        .mock("POST", "/login")
        .match_header("x-csrf-token", CSRF_TOKEN)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), EMAIL.into()),
            Matcher::UrlEncoded("password".into(), PASSWORD.into()),
        ]))
        .with_status(302)
        .with_header("location", if accept { "/" } else { "/login" })
        .create_async()
        .await;
    let home = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html><body>Dashboard</body></html>")
        .create_async()
        .await;
    vec![login_page, submit, home]
}
