//! 工具模块
//!
//! 提供文件系统、输入读取等常用工具函数

pub mod fs;

// 重导出
pub use fs::*;
