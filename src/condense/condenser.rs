//! 截断引擎
//!
//! 在分隔符处截断标记文本，保证不切断标签，并且截断后的可见文本不短于目标长度。

use serde::Serialize;
use tracing::debug;

use super::options::TruncationOptions;
use crate::markup::locator::locate_chars;
use crate::markup::{plain_text, text_length};

/// 截断结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TruncationResult {
    /// 文本太短，不值得截断
    NotCondensable,
    Condensed {
        prefix_markup: String,
        prefix_text_length: usize,
    },
}

impl TruncationResult {
    /// 是否足够长、已被截断
    pub fn is_condensed(&self) -> bool {
        matches!(self, TruncationResult::Condensed { .. })
    }

    pub fn prefix_markup(&self) -> Option<&str> {
        match self {
            TruncationResult::Condensed { prefix_markup, .. } => Some(prefix_markup),
            TruncationResult::NotCondensable => None,
        }
    }
}

/// 截断 `markup`，`text` 是它对应的纯文本（只用来测量长度）
pub fn condense(markup: &str, text: &str, opts: &TruncationOptions) -> TruncationResult {
    let full_text_length = text.trim().chars().count();
    if full_text_length <= opts.target_length.saturating_add(opts.min_trailing_length) {
        debug!(text_length = full_text_length, "element too short: skipping");
        return TruncationResult::NotCondensable;
    }

    let body: Vec<char> = markup.trim().chars().collect();
    let delim: Vec<char> = opts.delimiter.chars().collect();
    let mut delta = 0;

    // 标签字符不算可见长度：每轮把上一轮吞掉的标签开销 (delta) 加回搜索起点，直到收敛
    let (candidate, candidate_text_length, reached_end) = loop {
        let offset = opts.target_length.saturating_add(delta);
        let break_point = locate_chars(&body, &delim, offset);
        let end = (break_point + 1).min(body.len());

        let mut candidate: String = body[..end].iter().collect();
        if opts.inline {
            candidate.push(' ');
            candidate.push_str(&opts.ellipsis);
        }

        let markup_length = candidate.chars().count();
        let candidate_text_length = text_length(&candidate);
        delta = markup_length.saturating_sub(candidate_text_length);
        debug!(
            markup_length,
            text_length = candidate_text_length,
            delta,
            break_point,
            "condensing..."
        );

        let converged = opts.target_length.saturating_add(delta) == offset;
        if delta == 0 || candidate_text_length >= opts.target_length || converged {
            break (candidate, candidate_text_length, break_point >= body.len());
        }
    };

    if reached_end {
        debug!("no break point outside a tag: skipping");
        return TruncationResult::NotCondensable;
    }

    if full_text_length.saturating_sub(candidate_text_length) < opts.min_trailing_length {
        debug!("not enough trailing text: skipping");
        return TruncationResult::NotCondensable;
    }

    debug!(text_length = candidate_text_length, "clone condensed");
    TruncationResult::Condensed {
        prefix_markup: candidate,
        prefix_text_length: candidate_text_length,
    }
}

/// 同 `condense`，纯文本由 markup 自行推导
pub fn condense_markup(markup: &str, opts: &TruncationOptions) -> TruncationResult {
    condense(markup, &plain_text(markup), opts)
}
