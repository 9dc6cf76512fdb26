//! 片段拼装
//!
//! 把截断结果组装成可直接交给渲染层的两段标记：收起时显示的 `condensed`
//! 和展开时显示的 `expanded`，各自带上 more / less 控件。

use serde::Serialize;

use crate::condense::{condense_markup, TruncationResult};
use crate::config::CondenseConfig;
use crate::markup::close_open_tags;
use crate::toggle::ToggleState;

const CONTROL_STYLE: &str = "cursor:pointer;";

/// 收起 / 展开两种视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CondensedView {
    pub condensed: String,
    pub expanded: String,
    pub condensed_class: String,
    pub expanded_class: String,
    pub prefix_text_length: usize,
}

impl CondensedView {
    /// 文本太短时返回 None，调用方应原样显示且不加控件
    pub fn build(markup: &str, config: &CondenseConfig) -> Option<Self> {
        match condense_markup(markup, &config.to_options()) {
            TruncationResult::NotCondensable => None,
            TruncationResult::Condensed {
                prefix_markup,
                prefix_text_length,
            } => Some(Self::assemble(
                markup,
                &prefix_markup,
                prefix_text_length,
                config,
            )),
        }
    }

    fn assemble(
        markup: &str,
        prefix_markup: &str,
        prefix_text_length: usize,
        config: &CondenseConfig,
    ) -> Self {
        let mut condensed = close_open_tags(prefix_markup);
        if !config.inline {
            condensed.push_str(&config.ellipsis);
        }
        condensed.push_str(&control("more", &config.more_text));

        let mut expanded = markup.to_string();
        if !config.less_text.is_empty() {
            expanded.push_str(&control("less", &config.less_text));
        }

        Self {
            condensed,
            expanded,
            condensed_class: config.condensed_class.clone(),
            expanded_class: config.expanded_class.clone(),
            prefix_text_length,
        }
    }

    /// 指定状态下应显示的片段
    pub fn visible(&self, state: ToggleState) -> &str {
        match state {
            ToggleState::Collapsed => &self.condensed,
            ToggleState::Expanded => &self.expanded,
        }
    }
}

fn control(kind: &str, text: &str) -> String {
    format!(
        " <span class='condense_control condense_control_{}' style='{}'>{}</span>",
        kind, CONTROL_STYLE, text
    )
}
