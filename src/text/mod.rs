//! # 文本分析模块
//!
//! 针对单个文本文件的统计与行变换。
//!
//! ## 功能
//! - 文件大小、行数、单词数与平均单词长度
//! - 前 N 行、后 N 行
//! - 关键字计数与包含/排除过滤
//!
//! ## 依赖关系
//! - 被 `batch/report.rs` 和 `commands/file.rs` 使用
//! - 使用 `models/stats.rs`
//! - 子模块: stats, lines

pub mod lines;
pub mod stats;

use crate::error::{FileOpsError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 以缓冲方式打开文件
pub(crate) fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| FileOpsError::read(path, e))
}
