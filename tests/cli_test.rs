// tests/cli_test.rs

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn main_command() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn test_help_flag() {
    let mut cmd = main_command();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("显示此帮助信息并退出"))
        .stdout(predicate::str::contains("--course"))
        .stdout(predicate::str::contains("--refresh-catalog"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let mut cmd = main_command();
    cmd.arg("--no-such-flag");
    cmd.assert().failure();
}

#[test]
fn test_unreachable_site_exits_with_error() {
    let home = tempdir().unwrap();
    let out = tempdir().unwrap();
    let mut cmd = main_command();
    cmd.env("HOME", home.path())
        .env_remove("VUESCHOOL_EMAIL")
        .env_remove("VUESCHOOL_PASSWORD")
        .arg("--url")
        .arg("http://127.0.0.1:9/")
        .arg("-e")
        .arg("student@example.com")
        .arg("-p")
        .arg("secret")
        .arg("-o")
        .arg(out.path())
        .arg("--catalog-file")
        .arg(out.path().join("blueprint.json"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("程序执行出错"));
}

#[cfg(unix)]
#[test]
fn test_log_falls_back_to_temp_dir() {
    let scratch = tempdir().unwrap();
    // HOME 指向普通文件，日志目录无法创建
    let home = scratch.path().join("home-is-a-file");
    std::fs::write(&home, "").unwrap();
    let tmp = tempdir().unwrap();
    let mut cmd = main_command();
    cmd.env("HOME", &home)
        .env("TMPDIR", tmp.path())
        .env_remove("VUESCHOOL_EMAIL")
        .env_remove("VUESCHOOL_PASSWORD")
        .arg("--log-level")
        .arg("warn")
        .arg("--url")
        .arg("http://127.0.0.1:9/")
        .arg("-e")
        .arg("student@example.com")
        .arg("-p")
        .arg("secret")
        .arg("-o")
        .arg(scratch.path().join("out"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("将尝试使用备用日志文件"));

    let fallback = tmp.path().join(concat!(env!("CARGO_PKG_NAME"), "-fallback.log"));
    let log = std::fs::read_to_string(fallback).unwrap();
    assert!(log.contains("日志写入备用文件"));
}
