//! SDK 版本与构建元信息
//!
//! 设计原则（架构文档）：
//! - **Version** → Cargo.toml（唯一权威源）
//! - **Build Number / Source ID** → 发布流水线（由 build.rs 在编译期注入）
//! - **VERSION_NUMBER** → 由 VERSION 编译期推导，禁止手写
//!
//! 版本号编码：`major * 1_000_000 + minor * 1_000 + patch`，
//! 即 "3.0.1" → 3_000_001。消费方做版本比较时一律比较 VERSION_NUMBER
//! （整数比较，O(1)，无需解析），字符串比较对多位数段不保序（"3.10.0" < "3.9.0"）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultLiteError};

/// SDK semver，来自 Cargo.toml
///
/// 禁止手写版本号，必须用 `env!("CARGO_PKG_VERSION")` 与 Cargo.toml 保持同步。
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VERSION 的定宽十进制编码，编译期由 VERSION 推导，与其恒等一致。
pub const VERSION_NUMBER: u32 = encode_version(VERSION);

/// 同一版本内单调递增的构建号（发布流水线注入，本地构建为 0，
/// 参见 build.rs 的 VAULTLITE_BUILD_NUMBER）
pub const BUILD_NUMBER: u32 = parse_u32(env!("VAULTLITE_BUILD_NUMBER"));

/// 源码快照标识："{构建时间} {git 短 sha}"（由 build.rs 生成）。
///
/// 仅用于诊断输出，格式在版本间可能变化，消费方不得解析其内部结构。
pub const SOURCE_ID: &str = env!("VAULTLITE_SOURCE_ID");

/// git commit（由 vergen 在 build.rs 中生成；无 git 环境时为 "unknown"）
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// build time（由 vergen 在 build.rs 中生成；无法获取时为 "unknown"）
pub const BUILD_TIME: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(time) => time,
    None => "unknown",
};

/// 编译期把 "MAJOR.MINOR.PATCH" 编码为定宽十进制整数。
/// 格式不合法时在常量求值阶段直接失败（build.rs 已先行校验，这里兜底）。
const fn encode_version(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut parts = [0u32; 3];
    let mut index = 0;
    let mut has_digit = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' {
            if !has_digit || index == 2 {
                panic!("version must be MAJOR.MINOR.PATCH");
            }
            index += 1;
            has_digit = false;
        } else if b >= b'0' && b <= b'9' {
            parts[index] = parts[index] * 10 + (b - b'0') as u32;
            has_digit = true;
        } else {
            panic!("version must be MAJOR.MINOR.PATCH");
        }
        i += 1;
    }
    if index != 2 || !has_digit {
        panic!("version must be MAJOR.MINOR.PATCH");
    }
    parts[0] * 1_000_000 + parts[1] * 1_000 + parts[2]
}

/// 编译期解析非负整数字符串（build.rs 只会输出纯数字）
const fn parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] >= b'0' && bytes[i] <= b'9' {
            value = value * 10 + (bytes[i] - b'0') as u32;
        }
        i += 1;
    }
    value
}

/// 结构化版本号，用于运行期比较（兼容性检查的输入是调用方给的字符串）。
///
/// 排序语义与 VERSION_NUMBER 编码一致：按 (major, minor, patch) 逐段数值比较。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// 当前编译进来的 SDK 版本。
    pub const fn current() -> Self {
        Self::decode(VERSION_NUMBER)
    }

    /// 严格解析 "MAJOR.MINOR.PATCH"：三段、纯数字、minor/patch < 1000。
    /// 任何偏离（空段、正负号、pre-release 后缀、段数不对）都报 InvalidVersion。
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || VaultLiteError::InvalidVersion(s.to_string());

        let mut segments = s.split('.');
        let (Some(major), Some(minor), Some(patch), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(invalid());
        };

        let parse_segment = |segment: &str| -> Result<u32> {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            segment.parse().map_err(|_| invalid())
        };

        let version = Self {
            major: parse_segment(major)?,
            minor: parse_segment(minor)?,
            patch: parse_segment(patch)?,
        };
        // 超过三位数的 minor/patch 无法定宽编码，视为非法输入
        if version.minor >= 1000 || version.patch >= 1000 {
            return Err(invalid());
        }
        Ok(version)
    }

    /// 定宽十进制编码，与 VERSION_NUMBER 同一公式。
    pub const fn encode(self) -> u32 {
        self.major * 1_000_000 + self.minor * 1_000 + self.patch
    }

    /// encode 的逆运算。
    pub const fn decode(number: u32) -> Self {
        Self {
            major: number / 1_000_000,
            minor: number / 1_000 % 1_000,
            patch: number % 1_000,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VaultLiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
