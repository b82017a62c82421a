//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `file`: 单文件分析（嵌套子命令）
//!   - `info`, `stats`, `head`, `tail`, `count`, `filter`
//! - `batch`: 目录批量报告、索引与合并
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: file, batch

pub mod batch;
pub mod file;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// fileops - 文本文件分析与批量报告工具
#[derive(Parser)]
#[command(name = "fileops")]
#[command(version)]
#[command(about = "Text file analysis and directory-wide batch reporting", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the JSON configuration file (defaults to ./config.json when present)
    #[arg(short, long, global = true, env = "FILEOPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single text file
    File(file::FileArgs),

    /// Generate report, index and merged file for every text file under a directory
    Batch(batch::BatchArgs),
}
