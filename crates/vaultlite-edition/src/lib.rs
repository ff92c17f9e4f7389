//! VaultLite Edition - 嵌入式文档数据库 SDK 的版本与 Edition 元信息
//!
//! 整个 SDK 的版本/构建信息唯一权威源，包括：
//! - 🏷️ 版本标识：VERSION（人读）与 VERSION_NUMBER（机器比较，定宽十进制编码）
//! - 🔢 构建号：BUILD_NUMBER（发布流水线注入，同版本内单调递增）
//! - 📌 源码快照：SOURCE_ID（构建时间 + git 短 sha，不透明，仅供诊断）
//! - 🏢 Edition：Enterprise / Community，由 `enterprise` feature 在编译期选定
//! - ✅ 兼容性检查：整数比较，不做字符串版本比较
//!
//! 所有值在编译期固定，进程内只读共享，无任何并发问题。
//!
//! # 快速开始
//!
//! ```rust
//! use vaultlite_edition::{compat, metadata, VERSION, VERSION_NUMBER};
//!
//! fn main() -> Result<(), vaultlite_edition::VaultLiteError> {
//!     // 声明本模块需要的最低 SDK 版本
//!     compat::ensure_at_least("3.0.0")?;
//!
//!     // 读取构建元信息（进程唯一、不可变）
//!     let meta = metadata::current();
//!     assert_eq!(meta.version, VERSION);
//!     assert_eq!(meta.version_number, VERSION_NUMBER);
//!
//!     // SDK 初始化时打一条结构化日志
//!     metadata::log_startup();
//!     Ok(())
//! }
//! ```

// 导出核心模块
pub mod compat;
pub mod edition;
pub mod error;
pub mod metadata;
pub mod version;

// 重新导出核心类型，方便使用
pub use compat::{ensure_at_least, is_at_least};
pub use edition::{is_enterprise, require_enterprise, Edition, EDITION};
pub use error::{Result, VaultLiteError};
pub use metadata::{log_startup, BuildMetadata, BUILD_METADATA};
pub use version::{
    Version, BUILD_NUMBER, BUILD_TIME, GIT_SHA, SOURCE_ID, VERSION, VERSION_NUMBER,
};
