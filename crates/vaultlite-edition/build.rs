//! 编译期生成 GIT_SHA、BUILD_TIMESTAMP 等元信息（供 version.rs 使用），
//! 以及 VAULTLITE_BUILD_NUMBER（发布流水线注入）与 VAULTLITE_SOURCE_ID
//! （"{构建时间} {git 短 sha}"，标识本次构建对应的源码快照）。
//!
//! 同时做发布一致性校验：CARGO_PKG_VERSION 必须是纯三段数字版本号，
//! minor/patch 必须小于 1000（否则编码后的 VERSION_NUMBER 不再保序），
//! 不满足时直接终止构建。

use std::env;
use std::process::Command;

use chrono::Utc;
use vergen::EmitBuilder;

fn main() {
    let _ = EmitBuilder::builder()
        .build_timestamp()
        .git_sha(false)
        .emit();

    check_pkg_version();

    // build number: 由发布流水线通过环境变量注入，本地构建默认 0
    let build_number =
        env::var("VAULTLITE_BUILD_NUMBER").unwrap_or_else(|_| "0".to_string());
    if build_number.parse::<u32>().is_err() {
        panic!(
            "VAULTLITE_BUILD_NUMBER must be a non-negative integer, got '{}'",
            build_number
        );
    }
    println!("cargo:rustc-env=VAULTLITE_BUILD_NUMBER={}", build_number);
    println!("cargo:rerun-if-env-changed=VAULTLITE_BUILD_NUMBER");

    // source id: "{UTC 时间} {git 短 sha}"，仅用于诊断，格式对外不承诺
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    println!(
        "cargo:rustc-env=VAULTLITE_SOURCE_ID={} {}",
        timestamp,
        git_short_sha()
    );
}

/// CARGO_PKG_VERSION 校验：必须形如 MAJOR.MINOR.PATCH（不带 pre-release/metadata 后缀）。
/// 版本号不合规属于发布流程缺陷，在编译期暴露而不是留到运行时。
fn check_pkg_version() {
    let pkg_version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION");
    let parts: Vec<&str> = pkg_version.split('.').collect();
    if parts.len() != 3 {
        panic!(
            "package version '{}' must be MAJOR.MINOR.PATCH",
            pkg_version
        );
    }
    let mut numbers = [0u32; 3];
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            panic!(
                "package version '{}' must be MAJOR.MINOR.PATCH",
                pkg_version
            );
        }
        numbers[i] = part.parse().unwrap_or_else(|e| {
            panic!("package version segment '{}' out of range: {}", part, e)
        });
    }
    // minor/patch 超过三位数会破坏 VERSION_NUMBER 的十进制定宽编码
    if numbers[1] >= 1000 || numbers[2] >= 1000 {
        panic!(
            "package version '{}': minor and patch must be below 1000",
            pkg_version
        );
    }
}

/// git 短 sha；非 git 环境（源码包构建）返回 "unofficial"。
fn git_short_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=9", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|sha| sha.trim().to_string())
        .filter(|sha| !sha.is_empty())
        .unwrap_or_else(|| "unofficial".to_string())
}
