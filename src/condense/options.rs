//! 截断参数

/// 默认目标长度
pub const DEFAULT_TARGET_LENGTH: usize = 200;
/// 默认最小尾部长度
pub const DEFAULT_MIN_TRAILING_LENGTH: usize = 20;
/// 默认分隔符
pub const DEFAULT_DELIMITER: &str = " ";
/// 默认省略标记
pub const DEFAULT_ELLIPSIS: &str = " ( ... )";

/// 一次截断调用使用的不可变参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationOptions {
    /// 保留前缀的最小可见文本长度
    pub target_length: usize,
    /// 被丢弃部分至少要有多少可见文本，截断才有意义
    pub min_trailing_length: usize,
    /// 断点分隔符
    pub delimiter: String,
    /// true: 省略标记直接拼进截断结果；false: 交给调用方
    pub inline: bool,
    pub ellipsis: String,
}

impl Default for TruncationOptions {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            min_trailing_length: DEFAULT_MIN_TRAILING_LENGTH,
            delimiter: DEFAULT_DELIMITER.to_string(),
            inline: true,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl TruncationOptions {
    pub fn new(target_length: usize) -> Self {
        Self {
            target_length,
            ..Self::default()
        }
    }

    pub fn min_trailing_length(mut self, min_trailing_length: usize) -> Self {
        self.min_trailing_length = min_trailing_length;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }
}
