//! # fileops - 文本文件分析与批量报告工具
//!
//! ## 子命令
//! - `file` - 单文件分析
//!   - `info`, `stats`, `head`, `tail`, `count`, `filter`
//! - `batch` - 目录批量报告、索引与合并
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── text/    (单文件统计与行变换)
//!   │     ├── batch/   (目录遍历与批量产物)
//!   │     └── models/  (数据模型)
//!   ├── config.rs   (JSON 配置)
//!   ├── logging.rs  (诊断日志)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod models;
mod text;
mod utils;

use clap::Parser;
use cli::Cli;
use config::AppConfig;
use error::{ErrorKind, FileOpsError};
use std::error::Error;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        utils::output::print_error(&format!("{}", e));
        let mut source = e.source();
        while let Some(cause) = source {
            utils::output::print_error(&format!("  caused by: {}", cause));
            source = cause.source();
        }
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> error::Result<()> {
    logging::init_logger(cli.verbose)?;
    let config = AppConfig::load(cli.config.as_deref())?;
    commands::run(cli.command, &config)
}

fn exit_code(err: &FileOpsError) -> i32 {
    match err.kind() {
        ErrorKind::Io => 1,
        ErrorKind::InvalidInput => 2,
    }
}
