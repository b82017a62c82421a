//! # file 子命令 CLI 定义
//!
//! 单文件分析，包含多个子命令：
//! - `info`: 大小与行数
//! - `stats`: 单词统计
//! - `head` / `tail`: 前/后 N 行
//! - `count`: 包含关键字的行数
//! - `filter`: 按关键字保留或排除行
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/file.rs`

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// file 主命令参数
#[derive(Args, Debug)]
pub struct FileArgs {
    #[command(subcommand)]
    pub command: FileCommands,
}

/// file 子命令
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Show file size and line count
    Info(TargetArgs),

    /// Count words (numbers excluded) and mean word length
    Stats(TargetArgs),

    /// Save the first N lines to <out_dir>/head.txt
    Head(SliceArgs),

    /// Save the last N lines to <out_dir>/tail.txt
    Tail(SliceArgs),

    /// Count lines containing a keyword
    Count(CountArgs),

    /// Save lines with (or without) a keyword to <out_dir>/filtered.txt
    Filter(FilterArgs),
}

/// 仅需目标文件的参数
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Input file (defaults to `default_file` from the configuration)
    pub path: Option<PathBuf>,
}

/// head/tail 参数
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Input file (defaults to `default_file` from the configuration)
    pub path: Option<PathBuf>,

    /// Number of lines
    #[arg(short = 'n', long, default_value_t = 10)]
    pub lines: usize,

    /// Output file (overrides the default in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// count 参数
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Input file (defaults to `default_file` from the configuration)
    pub path: Option<PathBuf>,

    /// Keyword to search for (case-sensitive substring)
    #[arg(short, long)]
    pub keyword: String,
}

/// filter 参数
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input file (defaults to `default_file` from the configuration)
    pub path: Option<PathBuf>,

    /// Keyword to filter on (case-sensitive substring)
    #[arg(short, long)]
    pub keyword: String,

    /// Keep lines that do NOT contain the keyword
    #[arg(long, default_value_t = false)]
    pub exclude: bool,

    /// Output file (overrides the default in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
