//! 运行期版本兼容性检查
//!
//! 上层模块（以及链接本 SDK 的应用）声明自己需要的最低 SDK 版本，
//! 这里用 VERSION_NUMBER 做整数比较给出结论。低于要求直接拒绝，
//! 错误信息里带上双方版本，方便定位是谁没升级。

use crate::error::{Result, VaultLiteError};
use crate::version::{Version, VERSION, VERSION_NUMBER};

/// 强制版本校验：当前 SDK 低于 `required` 时报 IncompatibleVersion。
///
/// `required` 必须是 "MAJOR.MINOR.PATCH" 形式；恰好相等视为满足。
pub fn ensure_at_least(required: &str) -> Result<()> {
    let required = Version::parse(required)?;
    if VERSION_NUMBER < required.encode() {
        return Err(VaultLiteError::IncompatibleVersion {
            required: required.to_string(),
            current: VERSION.to_string(),
        });
    }
    Ok(())
}

/// 编译期/运行期皆可用的版本门槛判断。
pub const fn is_at_least(major: u32, minor: u32, patch: u32) -> bool {
    VERSION_NUMBER >= Version::new(major, minor, patch).encode()
}
