//! 进程级不可变的构建元信息记录
//!
//! 所有字段在编译期就已固定，这里只是把它们聚合成一条记录，
//! 方便上层一次性拿到、打进日志或序列化进诊断数据。
//! 不需要懒初始化，也没有可变单例——static + const 初始化即可。

use std::fmt;

use serde::Serialize;

use crate::edition::{Edition, EDITION};
use crate::version::{BUILD_NUMBER, BUILD_TIME, GIT_SHA, SOURCE_ID, VERSION, VERSION_NUMBER};

/// 构建元信息快照。`source_id` 是不透明字符串，消费方不得解析其内部结构。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildMetadata {
    pub edition: Edition,
    pub version: &'static str,
    pub version_number: u32,
    pub build_number: u32,
    pub source_id: &'static str,
    pub git_sha: &'static str,
    pub build_time: &'static str,
}

/// 进程唯一的构建元信息（编译期固定，只读共享，无并发问题）。
pub static BUILD_METADATA: BuildMetadata = BuildMetadata {
    edition: EDITION,
    version: VERSION,
    version_number: VERSION_NUMBER,
    build_number: BUILD_NUMBER,
    source_id: SOURCE_ID,
    git_sha: GIT_SHA,
    build_time: BUILD_TIME,
};

/// 取当前构建元信息。
pub fn current() -> &'static BuildMetadata {
    &BUILD_METADATA
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vaultlite {} ({}) build {} [{}]",
            self.version, self.edition, self.build_number, self.source_id
        )
    }
}

/// SDK 初始化时调用一次，把构建信息打进结构化日志。
pub fn log_startup() {
    let meta = current();
    tracing::info!(
        version = meta.version,
        version_number = meta.version_number,
        build_number = meta.build_number,
        edition = %meta.edition,
        source_id = meta.source_id,
        "VaultLite SDK 构建信息"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_matches_constants() {
        let meta = current();
        assert_eq!(meta.edition, EDITION);
        assert_eq!(meta.version, VERSION);
        assert_eq!(meta.version_number, VERSION_NUMBER);
        assert_eq!(meta.build_number, BUILD_NUMBER);
        assert_eq!(meta.source_id, SOURCE_ID);
    }

    #[test]
    fn test_repeated_reads_identical() {
        // 进程内重复读取必须拿到同一条记录
        let first = current();
        let second = current();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_id_passed_through_verbatim() {
        // source_id 是不透明 token：记录与展示都原样透传，不做任何解析
        let meta = current();
        assert_eq!(meta.source_id, SOURCE_ID);
        assert!(meta.to_string().contains(SOURCE_ID));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(current()).unwrap();
        assert_eq!(json["version"], VERSION);
        assert_eq!(json["version_number"], VERSION_NUMBER);
        assert_eq!(json["build_number"], BUILD_NUMBER);
        assert_eq!(json["source_id"], SOURCE_ID);
        assert_eq!(json["edition"], EDITION.as_str());
    }

    #[test]
    fn test_display_summary() {
        let line = current().to_string();
        assert!(line.starts_with("vaultlite "));
        assert!(line.contains(VERSION));
        assert!(line.contains(EDITION.as_str()));
    }

    #[test]
    fn test_log_startup_smoke() {
        // 只验证不 panic；订阅器吞掉输出
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt().with_test_writer().finish(),
        );
        log_startup();
    }
}
