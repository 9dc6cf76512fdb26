// Condense Engine
// 截断引擎 - 分隔符对齐、标签安全的前缀计算

pub mod condenser;
pub mod options;

// 重新导出主要接口
pub use condenser::{condense, condense_markup, TruncationResult};
pub use options::TruncationOptions;
