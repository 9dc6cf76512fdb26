//! 展开 / 收起状态机
//!
//! 只有两个状态：
//! - `Collapsed --expand--> Expanded`
//! - `Expanded --condense--> Collapsed`
//!
//! 在当前状态下重复触发同一事件不产生转换。

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════
// 状态 / 事件定义
// ═══════════════════════════════════════════════════════════════════

/// 显示状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    /// 显示截断后的片段
    #[default]
    Collapsed,
    /// 显示完整内容
    Expanded,
}

/// 触发事件（对应 more / less 控件）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    Expand,
    Condense,
}

/// 一次事件处理的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ToggleState,
    pub to: ToggleState,
}

impl Transition {
    /// 状态是否真的发生了变化
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

impl ToggleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleState::Collapsed => "collapsed",
            ToggleState::Expanded => "expanded",
        }
    }

    /// 从字符串解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "collapsed" | "condensed" => Some(ToggleState::Collapsed),
            "expanded" => Some(ToggleState::Expanded),
            _ => None,
        }
    }

    /// 处理事件，返回转换（同状态重复触发时 from == to）
    pub fn apply(self, event: ToggleEvent) -> Transition {
        let to = match (self, event) {
            (ToggleState::Collapsed, ToggleEvent::Expand) => ToggleState::Expanded,
            (ToggleState::Expanded, ToggleEvent::Condense) => ToggleState::Collapsed,
            (s, _) => s,
        };
        Transition { from: self, to }
    }
}

impl std::fmt::Display for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 持有当前状态的开关
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggle {
    state: ToggleState,
}

impl Toggle {
    pub fn new(state: ToggleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == ToggleState::Expanded
    }

    pub fn handle(&mut self, event: ToggleEvent) -> Transition {
        let transition = self.state.apply(event);
        self.state = transition.to;
        transition
    }

    /// 展开；已展开时返回 false
    pub fn expand(&mut self) -> bool {
        self.handle(ToggleEvent::Expand).changed()
    }

    /// 收起；已收起时返回 false
    pub fn condense(&mut self) -> bool {
        self.handle(ToggleEvent::Condense).changed()
    }
}
