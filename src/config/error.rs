//! 配置错误

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("condensed_length must be greater than zero")]
    InvalidTargetLength,

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
