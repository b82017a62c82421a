//! # 数据模型模块
//!
//! 定义文件记录与文本统计结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `text/`、`batch/` 和 `commands/` 使用
//! - 子模块: record, stats

pub mod record;
pub mod stats;

pub use record::FileRecord;
pub use stats::{FileInfo, WordStats};
