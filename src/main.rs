use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use condense::cli::{self, OutputFormat};
use condense::{resolve_config, ConfigOverrides, ToggleState};

/// Condense - 标签安全的标记文本截断
///
/// 在分隔符处截断 HTML 片段，不切断标签
#[derive(Parser)]
#[command(name = "condense")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Truncate text heavy markup at a word boundary without ever splitting a tag.\n\
                  Reads markup from a file or stdin; options come from defaults, an optional\n\
                  config file and command line overrides."
)]
struct Cli {
    /// 配置文件（.yaml / .yml / .json）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志（RUST_LOG 优先）
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 截断标记文本
    Condense {
        /// 输入文件（省略或 "-" 时读 stdin）
        input: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,

        /// 输出格式：text, json, html
        #[arg(short, long, default_value = "text")]
        format: String,

        /// html 格式下显示的状态：collapsed, expanded
        #[arg(long, default_value = "collapsed")]
        state: String,
    },

    /// 输出去掉标签后的纯文本
    Text {
        /// 输入文件（省略或 "-" 时读 stdin）
        input: Option<PathBuf>,
    },

    /// 查找标签之外的下一个分隔符位置
    Locate {
        /// 输入文件（省略或 "-" 时读 stdin）
        input: Option<PathBuf>,

        /// 起始偏移（字符）
        #[arg(short, long, default_value_t = 0)]
        start: usize,

        /// 分隔符
        #[arg(short, long)]
        delim: Option<String>,
    },

    /// 显示生效的配置
    Config {
        #[command(flatten)]
        options: OptionArgs,
    },
}

/// 单次调用覆盖项
#[derive(Args, Default)]
struct OptionArgs {
    /// 目标长度
    #[arg(short, long)]
    length: Option<usize>,

    /// 尾部文本最小长度
    #[arg(long)]
    min_trail: Option<usize>,

    /// 断点分隔符
    #[arg(short, long)]
    delim: Option<String>,

    /// 块模式：省略标记放在截断片段之外
    #[arg(long)]
    block: bool,

    /// 省略标记
    #[arg(long)]
    ellipsis: Option<String>,

    /// more 控件文字
    #[arg(long)]
    more_text: Option<String>,

    /// less 控件文字（空字符串表示不生成）
    #[arg(long)]
    less_text: Option<String>,
}

impl OptionArgs {
    fn to_overrides(&self, debug: bool) -> ConfigOverrides {
        ConfigOverrides {
            condensed_length: self.length,
            min_trail: self.min_trail,
            delim: self.delim.clone(),
            more_text: self.more_text.clone(),
            less_text: self.less_text.clone(),
            ellipsis: self.ellipsis.clone(),
            inline: self.block.then_some(false),
            debug: debug.then_some(true),
            ..Default::default()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 日志
// ═══════════════════════════════════════════════════════════════════

fn init_tracing(debug: bool) {
    let default_filter = if debug { "condense=debug" } else { "condense=warn" };

    // stdout 留给输出结果，日志写 stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn run(args: Cli) -> Result<()> {
    let overrides = match &args.command {
        Commands::Condense { options, .. } | Commands::Config { options } => {
            options.to_overrides(args.debug)
        }
        Commands::Locate { delim, .. } => OptionArgs {
            delim: delim.clone(),
            ..Default::default()
        }
        .to_overrides(args.debug),
        Commands::Text { .. } => OptionArgs::default().to_overrides(args.debug),
    };

    let config = resolve_config(args.config.as_deref(), &overrides)?;
    init_tracing(config.debug);
    tracing::debug!(?config, "effective configuration");

    match args.command {
        Commands::Condense {
            input,
            format,
            state,
            ..
        } => {
            let format = OutputFormat::parse(&format)?;
            let state = match ToggleState::parse(&state) {
                Some(s) => s,
                None => bail!("Unknown state: {} (available: collapsed, expanded)", state),
            };
            cli::run_condense(input.as_deref(), &config, format, state)
        }
        Commands::Text { input } => cli::run_text(input.as_deref()),
        Commands::Locate { input, start, .. } => {
            cli::run_locate(input.as_deref(), &config, start)
        }
        Commands::Config { .. } => cli::show_config(&config),
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", format!("❌ {:#}", e).red());
        std::process::exit(1);
    }
}
