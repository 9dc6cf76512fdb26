//! 标签补全 - 截断后补上未闭合元素的结束标签

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?(?:-->|$)").unwrap();
    static ref ELEMENT: Regex = Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9:-]*)[^>]*?(/?)>").unwrap();
}

/// 不需要结束标签的元素
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// 返回仍处于打开状态的元素名（外层在前）
pub fn open_elements(markup: &str) -> Vec<String> {
    let scrubbed = COMMENT.replace_all(markup, "");
    let mut open: Vec<String> = Vec::new();

    for caps in ELEMENT.captures_iter(&scrubbed) {
        let name = caps[2].to_ascii_lowercase();
        if &caps[3] == "/" || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }

        if &caps[1] == "/" {
            // 多余的结束标签：有匹配的才出栈
            if let Some(pos) = open.iter().rposition(|n| *n == name) {
                open.truncate(pos);
            }
        } else {
            open.push(name);
        }
    }

    open
}

/// 为截断留下的未闭合元素补上结束标签（内层先闭合）
pub fn close_open_tags(markup: &str) -> String {
    let mut out = markup.to_string();
    for name in open_elements(markup).iter().rev() {
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_nested() {
        assert_eq!(
            close_open_tags("<div><p>one <b>two "),
            "<div><p>one <b>two </b></p></div>"
        );
    }

    #[test]
    fn test_balanced_is_unchanged() {
        let markup = "<p>one <b>two</b> three</p>";
        assert_eq!(close_open_tags(markup), markup);
        assert!(open_elements(markup).is_empty());
    }

    #[test]
    fn test_ignores_void_and_self_closing() {
        assert_eq!(
            close_open_tags("<p>a<br>b<img src='x.png'><span/>c"),
            "<p>a<br>b<img src='x.png'><span/>c</p>"
        );
    }

    #[test]
    fn test_ignores_comments() {
        assert_eq!(close_open_tags("<!-- <b> --><i>x"), "<!-- <b> --><i>x</i>");
    }

    #[test]
    fn test_stray_close_tag() {
        assert_eq!(close_open_tags("a</b><i>x"), "a</b><i>x</i>");
        assert_eq!(close_open_tags("<div><p>x</div>"), "<div><p>x</div>");
    }

    #[test]
    fn test_attribute_with_slash() {
        assert_eq!(
            close_open_tags(r#"<a href="/docs/">docs"#),
            r#"<a href="/docs/">docs</a>"#
        );
    }
}
