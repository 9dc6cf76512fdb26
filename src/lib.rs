// Condense - Library Root
//
// 标签安全的标记文本截断引擎：在分隔符处截断，不切断标签，按需还原。

pub mod cli;
pub mod condense;
pub mod config;
pub mod fragment;
pub mod markup;
pub mod toggle;
pub mod utils;

// 重新导出常用类型
pub use condense::{condense, condense_markup, TruncationOptions, TruncationResult};
pub use config::{resolve_config, CondenseConfig, ConfigError, ConfigOverrides};
pub use fragment::CondensedView;
pub use markup::{locate, plain_text};
pub use toggle::{Toggle, ToggleEvent, ToggleState};
