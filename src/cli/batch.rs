//! # batch 子命令 CLI 定义
//!
//! 对目录下所有文本文件生成报告、索引与合并文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 批量步骤
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BatchStep {
    /// Word statistics report (report.txt)
    Report,
    /// File index with size and modification time (index.txt)
    Index,
    /// All files concatenated (merged.txt)
    Merge,
}

impl BatchStep {
    /// 默认执行顺序
    pub const ALL: [BatchStep; 3] = [BatchStep::Report, BatchStep::Index, BatchStep::Merge];
}

impl std::fmt::Display for BatchStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStep::Report => write!(f, "report"),
            BatchStep::Index => write!(f, "index"),
            BatchStep::Merge => write!(f, "merge"),
        }
    }
}

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Root directory to scan (defaults to `base_dir` from the configuration)
    pub dir: Option<PathBuf>,

    /// Run only the given step(s); may be repeated
    #[arg(long, value_enum)]
    pub only: Vec<BatchStep>,
}

impl BatchArgs {
    /// 要执行的步骤，保持 report → index → merge 的顺序
    pub fn steps(&self) -> Vec<BatchStep> {
        if self.only.is_empty() {
            return BatchStep::ALL.to_vec();
        }
        BatchStep::ALL
            .into_iter()
            .filter(|step| self.only.contains(step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_order() {
        let args = BatchArgs {
            dir: None,
            only: vec![BatchStep::Merge, BatchStep::Report, BatchStep::Merge],
        };
        assert_eq!(args.steps(), vec![BatchStep::Report, BatchStep::Merge]);

        let args = BatchArgs {
            dir: None,
            only: vec![],
        };
        assert_eq!(args.steps(), BatchStep::ALL.to_vec());
    }
}
