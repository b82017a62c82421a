//! # 文本统计结果数据模型
//!
//! ## 依赖关系
//! - 由 `text/stats.rs` 产生
//! - 被 `batch/report.rs` 和 `commands/file.rs` 使用

/// 单词统计结果
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WordStats {
    /// 单词数（不含纯整数 token）
    pub word_count: usize,

    /// 平均单词长度（字节）
    pub mean_word_length: f64,
}

impl WordStats {
    /// 由单词数与总长度构造，单词数为 0 时均值为 0
    pub fn from_totals(word_count: usize, total_length: usize) -> Self {
        let mean_word_length = if word_count > 0 {
            total_length as f64 / word_count as f64
        } else {
            0.0
        };
        WordStats {
            word_count,
            mean_word_length,
        }
    }
}

/// 文件基本信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileInfo {
    /// 大小（字节）
    pub size_bytes: u64,

    /// 行数
    pub line_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_totals() {
        let stats = WordStats::from_totals(3, 14);
        assert_eq!(stats.word_count, 3);
        assert!((stats.mean_word_length - 14.0 / 3.0).abs() < 1e-9);

        let empty = WordStats::from_totals(0, 0);
        assert_eq!(empty.word_count, 0);
        assert_eq!(empty.mean_word_length, 0.0);
    }
}
