//! # 文件记录数据模型
//!
//! 目录遍历时为每个匹配文件生成的瞬时记录。
//!
//! ## 依赖关系
//! - 由 `batch/walker.rs` 产生
//! - 被 `batch/report.rs`, `batch/index.rs`, `batch/merge.rs` 消费

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// 索引中修改时间的格式
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 单个匹配文件的记录
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// 遍历得到的路径（以根目录为前缀）
    pub path: PathBuf,

    /// 文件名
    pub name: String,

    /// 大小（字节）
    pub size_bytes: u64,

    /// 最后修改时间（本地时区）
    pub modified_at: DateTime<Local>,
}

impl FileRecord {
    /// 按 `YYYY-MM-DD HH:MM:SS` 格式化修改时间
    pub fn modified_display(&self) -> String {
        self.modified_at.format(MODIFIED_FORMAT).to_string()
    }
}
