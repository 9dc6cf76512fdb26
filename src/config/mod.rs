//! 配置模块
//!
//! 加载顺序（后者覆盖前者）：
//! 1. 内置默认值
//! 2. 配置文件（显式路径，或 `<config_dir>/condense/config.yaml`）
//! 3. 单次调用的覆盖项

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{CondenseConfig, ConfigOverrides};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::utils::{file_exists, read_file};

/// 默认配置文件位置
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("condense").join("config.yaml"))
}

/// 从 YAML / JSON 文件加载配置（按扩展名选择格式）
pub fn load_config(path: &Path) -> Result<CondenseConfig> {
    let content = read_file(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let config: CondenseConfig = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
    };

    Ok(config)
}

/// 解析最终生效的配置并校验
///
/// `explicit` 指定的文件必须存在；未指定时只在默认位置存在文件时才读取。
pub fn resolve_config(
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<CondenseConfig> {
    let base = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if file_exists(&path) => load_config(&path)?,
            _ => CondenseConfig::default(),
        },
    };

    let config = base.merge(overrides);
    config.validate()?;
    Ok(config)
}
