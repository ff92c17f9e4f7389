use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultLiteError {
    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Incompatible version: requires at least {required}, linked library is {current}")]
    IncompatibleVersion { required: String, current: String },

    #[error("Enterprise-only feature not available in this edition: {0}")]
    EnterpriseOnly(String),
}

pub type Result<T> = std::result::Result<T, VaultLiteError>;
