//! 命令行子命令

pub mod commands;

pub use commands::*;
