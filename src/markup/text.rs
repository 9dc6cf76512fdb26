//! 纯文本提取 - 去掉标签、解码字符引用，只用于测量长度

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // 末尾未闭合的 "<..." 也一并丢弃
    static ref TAG: Regex = Regex::new(r"<[^>]*(?:>|$)").unwrap();
    static ref CHAR_REF: Regex = Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap();
}

/// 去掉所有标签并解码字符引用后的可见文本
pub fn plain_text(markup: &str) -> String {
    let stripped = TAG.replace_all(markup, "");
    CHAR_REF
        .replace_all(&stripped, |caps: &Captures| decode_reference(caps))
        .into_owned()
}

/// 可见文本长度（字符数）
pub fn text_length(markup: &str) -> usize {
    plain_text(markup).chars().count()
}

fn decode_reference(caps: &Captures) -> String {
    let name = &caps[1];

    let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => None,
        }
    };

    match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    }
}
