//! # 批量单词统计报告
//!
//! 为每个文本文件生成一段统计（文件名、单词数、平均单词长度），
//! 写入输出目录下的 `report.txt`。
//!
//! ## 依赖关系
//! - 使用 `batch/walker.rs`
//! - 使用 `text/stats.rs`

use super::{BatchOptions, BatchSummary};
use crate::error::{FileOpsError, Result};
use crate::models::WordStats;
use crate::text::stats;

use std::fs;
use std::path::Path;

/// 报告文件名
pub const REPORT_FILE_NAME: &str = "report.txt";

const REPORT_BANNER: &str = "=== Batch FileOps Report ===\n\n";

/// 生成单词统计报告
///
/// 所有文件处理完成后才写出，任一文件失败时不会生成报告。
pub fn generate_report(
    root: &Path,
    out_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let mut report = String::from(REPORT_BANNER);
    let mut files = 0;

    for record in options.walker(root).walk()? {
        let record = record?;
        let word_stats = stats::word_stats(&record.path)?;
        push_stanza(&mut report, &record.name, &word_stats);
        files += 1;
    }

    let output = out_dir.join(REPORT_FILE_NAME);
    fs::write(&output, report).map_err(|e| FileOpsError::write(&output, e))?;
    log::info!("Report for {} file(s) written to {}", files, output.display());

    Ok(BatchSummary { output, files })
}

fn push_stanza(report: &mut String, name: &str, word_stats: &WordStats) {
    report.push_str(&format!(
        "Fichier: {}\nMots: {}\nLongueur moyenne: {:.2}\n\n",
        name, word_stats.word_count, word_stats.mean_word_length
    ));
}
