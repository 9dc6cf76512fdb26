//! 标记文本工具
//!
//! - 断点定位（跳过标签内部的分隔符）
//! - 纯文本提取（测量可见长度）
//! - 标签补全

pub mod balance;
pub mod locator;
pub mod text;

// 重导出
pub use balance::{close_open_tags, open_elements};
pub use locator::{is_inside_tag, locate};
pub use text::{plain_text, text_length};
