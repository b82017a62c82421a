//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `text/`, `batch/`, `utils/`
//! - 子模块: file, batch

pub mod batch;
pub mod file;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::error::{FileOpsError, Result};

use std::fs;
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands, config: &AppConfig) -> Result<()> {
    match cmd {
        Commands::File(args) => file::execute(args, config),
        Commands::Batch(args) => batch::execute(args, config),
    }
}

/// 确保输出目录存在
pub(crate) fn ensure_out_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| FileOpsError::FileWriteError {
        path: out_dir.display().to_string(),
        source: e,
    })
}
