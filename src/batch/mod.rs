//! # 批量处理模块
//!
//! 对目录下所有文本文件生成汇总产物。
//!
//! ## 功能
//! - 单词统计报告 (`report.txt`)
//! - 文件索引（路径、大小、修改时间）
//! - 合并所有文件内容
//!
//! 三种产物各自独立遍历一次根目录，遍历顺序一致；任一文件出错即终止。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `text/stats.rs` 计算单词统计
//! - 使用 `walkdir` 遍历目录

pub mod index;
pub mod merge;
pub mod report;
pub mod walker;

pub use index::generate_index;
pub use merge::merge_files;
pub use report::generate_report;
pub use walker::{TextFileWalker, DEFAULT_SUFFIX};

use std::path::{Path, PathBuf};

/// 批量操作配置
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// 参与处理的文件名后缀
    pub suffix: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl BatchOptions {
    /// 为根目录创建遍历器
    pub fn walker(&self, root: &Path) -> TextFileWalker {
        TextFileWalker::new(root).with_suffix(&self.suffix)
    }
}

/// 批量操作结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// 输出文件路径
    pub output: PathBuf,
    /// 处理的文件数
    pub files: usize,
}
