//! Edition（功能层级）标识
//!
//! 发布流程默认构建 Enterprise 版（`enterprise` feature 在 default 中）；
//! 社区版由外部构建系统用 `--no-default-features` 选择。
//! 本模块只负责报告编译进来的层级，具体哪些能力属于 Enterprise
//! 由上层各模块自行用 [`require_enterprise`] 把关。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultLiteError};

/// 编译期选定的功能层级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Community,
    Enterprise,
}

/// 当前编译产物的 Edition（随 `enterprise` feature 固定，进程内不可变）。
pub const EDITION: Edition = if cfg!(feature = "enterprise") {
    Edition::Enterprise
} else {
    Edition::Community
};

impl Edition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Edition::Community => "community",
            Edition::Enterprise => "enterprise",
        }
    }

    pub const fn is_enterprise(self) -> bool {
        matches!(self, Edition::Enterprise)
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 当前编译产物是否为 Enterprise 版。
pub const fn is_enterprise() -> bool {
    EDITION.is_enterprise()
}

/// Enterprise 能力统一入口：社区版构建调用时报 EnterpriseOnly。
///
/// `feature` 是面向用户的能力名（如 "database encryption"），会原样出现在错误信息里。
pub fn require_enterprise(feature: &str) -> Result<()> {
    if EDITION.is_enterprise() {
        Ok(())
    } else {
        Err(VaultLiteError::EnterpriseOnly(feature.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edition_matches_feature() {
        if cfg!(feature = "enterprise") {
            assert_eq!(EDITION, Edition::Enterprise);
            assert!(is_enterprise());
        } else {
            assert_eq!(EDITION, Edition::Community);
            assert!(!is_enterprise());
        }
    }

    #[test]
    fn test_edition_as_str() {
        assert_eq!(Edition::Community.as_str(), "community");
        assert_eq!(Edition::Enterprise.as_str(), "enterprise");
        assert_eq!(Edition::Enterprise.to_string(), "enterprise");
    }

    #[cfg(feature = "enterprise")]
    #[test]
    fn test_require_enterprise_passes() {
        assert!(require_enterprise("database encryption").is_ok());
    }

    #[cfg(not(feature = "enterprise"))]
    #[test]
    fn test_require_enterprise_refuses() {
        let err = require_enterprise("database encryption").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("database encryption"), "{}", message);
    }

    #[test]
    fn test_edition_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Edition::Enterprise).unwrap(),
            "\"enterprise\""
        );
        assert_eq!(
            serde_json::from_str::<Edition>("\"community\"").unwrap(),
            Edition::Community
        );
    }
}
