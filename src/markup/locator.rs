//! 断点定位 - 在标签之外查找下一个分隔符
//!
//! 偏移量一律按字符计算（不是字节），避免在多字节字符中间截断。

use tracing::debug;

/// 从 `start` 开始查找 `delimiter`，跳过落在 `<...>` 内部的匹配
///
/// 找不到时返回 markup 的字符长度（表示"截到末尾"）。
pub fn locate(markup: &str, delimiter: &str, start: usize) -> usize {
    let chars: Vec<char> = markup.chars().collect();
    let delim: Vec<char> = delimiter.chars().collect();
    locate_chars(&chars, &delim, start)
}

/// `locate` 的字符切片版本，供 condenser 循环复用已拆分的字符
pub(crate) fn locate_chars(markup: &[char], delim: &[char], start: usize) -> usize {
    if delim.is_empty() {
        return markup.len();
    }

    let mut loc = start.min(markup.len());
    loop {
        loc = match find_from(markup, delim, loc) {
            Some(found) => found,
            None => {
                debug!("No delimiter found.");
                return markup.len();
            }
        };

        if !is_inside_tag(markup, loc) {
            debug!(break_point = loc, "Delimiter found in markup");
            return loc;
        }

        // 标签内的分隔符不算数：(loc, '>'] 都在同一个标签里，直接跳到 '>' 之后
        while let Some(end) = enclosing_tag_end(markup, loc) {
            loc = end + 1;
        }
    }
}

/// 判断 `loc` 是否位于某个标签的尖括号之间
///
/// 纯局部扫描：看 `loc` 之后最近的 `<` 和 `>` 谁先出现。
/// 属性值里出现 `<`/`>` 时会误判，这是已知限制。
///
/// 后面有 `<` 却没有 `>`（末尾未闭合的标签）时视为在标签之外。
pub fn is_inside_tag(markup: &[char], loc: usize) -> bool {
    enclosing_tag_end(markup, loc).is_some()
}

/// 位于标签内时返回该标签 `>` 的位置
fn enclosing_tag_end(markup: &[char], loc: usize) -> Option<usize> {
    let loc = loc.min(markup.len());
    let rest = &markup[loc..];
    let end_tag = rest.iter().position(|&c| c == '>')?;

    // 只需看 '>' 之前有没有 '<'
    match rest[..end_tag].iter().position(|&c| c == '<') {
        Some(_) => None,
        None => Some(loc + end_tag),
    }
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}
