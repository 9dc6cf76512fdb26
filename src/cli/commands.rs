//! CLI 命令实现

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::condense::condense_markup;
use crate::config::CondenseConfig;
use crate::fragment::CondensedView;
use crate::markup::{locate, plain_text};
use crate::toggle::ToggleState;
use crate::utils::read_input;

/// `condense` 子命令的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 截断后的标记（不可截断时输出原文）
    Text,
    /// `TruncationResult` 的 JSON
    Json,
    /// 带控件的收起 / 展开片段
    Html,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" | "fragment" => Ok(OutputFormat::Html),
            _ => bail!("Unknown format: {} (available: text, json, html)", s),
        }
    }
}

/// 截断输入的标记
pub fn run_condense(
    input: Option<&Path>,
    config: &CondenseConfig,
    format: OutputFormat,
    state: ToggleState,
) -> Result<()> {
    let markup = read_input(input)?;

    match format {
        OutputFormat::Text => {
            let result = condense_markup(&markup, &config.to_options());
            match result.prefix_markup() {
                Some(prefix) => println!("{}", prefix),
                None => {
                    eprintln!("{}", "ℹ️  Not condensable, printing original".yellow());
                    println!("{}", markup.trim());
                }
            }
        }
        OutputFormat::Json => {
            let result = condense_markup(&markup, &config.to_options());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Html => match CondensedView::build(&markup, config) {
            Some(view) => println!("{}", view.visible(state)),
            None => {
                eprintln!("{}", "ℹ️  Not condensable, printing original".yellow());
                println!("{}", markup.trim());
            }
        },
    }

    Ok(())
}

/// 输出纯文本
pub fn run_text(input: Option<&Path>) -> Result<()> {
    let markup = read_input(input)?;
    println!("{}", plain_text(markup.trim()));
    Ok(())
}

/// 输出从 `start` 开始的下一个断点（与 condense 一样先去掉首尾空白）
pub fn run_locate(input: Option<&Path>, config: &CondenseConfig, start: usize) -> Result<()> {
    let markup = read_input(input)?;
    println!("{}", locate(markup.trim(), &config.delim, start));
    Ok(())
}

/// 以 YAML 输出生效的配置
pub fn show_config(config: &CondenseConfig) -> Result<()> {
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}
