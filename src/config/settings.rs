//! 配置结构
//!
//! 全局默认值 → 配置文件 → 单次调用覆盖，合并后得到不可变的 `CondenseConfig`。

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::condense::options::{
    DEFAULT_DELIMITER, DEFAULT_ELLIPSIS, DEFAULT_MIN_TRAILING_LENGTH, DEFAULT_TARGET_LENGTH,
};
use crate::condense::TruncationOptions;

/// 完整配置（含片段拼装用的控件文字和 class）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondenseConfig {
    /// 截断后的目标长度
    pub condensed_length: usize,
    /// 尾部文本最小长度
    pub min_trail: usize,
    /// 断点分隔符
    pub delim: String,
    pub more_text: String,
    /// 为空时不生成 less 控件
    pub less_text: String,
    pub ellipsis: String,
    pub inline: bool,
    pub condensed_class: String,
    pub expanded_class: String,
    pub debug: bool,
}

impl Default for CondenseConfig {
    fn default() -> Self {
        Self {
            condensed_length: DEFAULT_TARGET_LENGTH,
            min_trail: DEFAULT_MIN_TRAILING_LENGTH,
            delim: DEFAULT_DELIMITER.to_string(),
            more_text: "[more]".to_string(),
            less_text: "[less]".to_string(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            inline: true,
            condensed_class: String::new(),
            expanded_class: String::new(),
            debug: false,
        }
    }
}

/// 单次调用的覆盖项，`None` 表示沿用下层配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub condensed_length: Option<usize>,
    pub min_trail: Option<usize>,
    pub delim: Option<String>,
    pub more_text: Option<String>,
    pub less_text: Option<String>,
    pub ellipsis: Option<String>,
    pub inline: Option<bool>,
    pub condensed_class: Option<String>,
    pub expanded_class: Option<String>,
    pub debug: Option<bool>,
}

impl CondenseConfig {
    /// 合并覆盖项，返回新配置（自身不变）
    pub fn merge(&self, overrides: &ConfigOverrides) -> Self {
        let mut merged = self.clone();

        if let Some(v) = overrides.condensed_length {
            merged.condensed_length = v;
        }
        if let Some(v) = overrides.min_trail {
            merged.min_trail = v;
        }
        if let Some(v) = &overrides.delim {
            merged.delim = v.clone();
        }
        if let Some(v) = &overrides.more_text {
            merged.more_text = v.clone();
        }
        if let Some(v) = &overrides.less_text {
            merged.less_text = v.clone();
        }
        if let Some(v) = &overrides.ellipsis {
            merged.ellipsis = v.clone();
        }
        if let Some(v) = overrides.inline {
            merged.inline = v;
        }
        if let Some(v) = &overrides.condensed_class {
            merged.condensed_class = v.clone();
        }
        if let Some(v) = &overrides.expanded_class {
            merged.expanded_class = v.clone();
        }
        if let Some(v) = overrides.debug {
            merged.debug = v;
        }

        merged
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.condensed_length == 0 {
            return Err(ConfigError::InvalidTargetLength);
        }
        if self.delim.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }

    /// 转换为截断引擎参数
    pub fn to_options(&self) -> TruncationOptions {
        TruncationOptions {
            target_length: self.condensed_length,
            min_trailing_length: self.min_trail,
            delimiter: self.delim.clone(),
            inline: self.inline,
            ellipsis: self.ellipsis.clone(),
        }
    }
}
