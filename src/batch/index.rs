//! # 批量文件索引
//!
//! 以管道符分隔的表格列出所有文本文件的路径、大小与修改时间。
//!
//! ## 依赖关系
//! - 使用 `batch/walker.rs`

use super::{BatchOptions, BatchSummary};
use crate::error::{FileOpsError, Result};

use std::fs;
use std::path::Path;

const INDEX_HEADER: &str = "Chemin | Taille | Date Modif\n--- | --- | ---\n";

/// 生成文件索引
pub fn generate_index(
    root: &Path,
    out_file: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let mut index = String::from(INDEX_HEADER);
    let mut files = 0;

    for record in options.walker(root).walk()? {
        let record = record?;
        index.push_str(&format!(
            "{} | {} | {}\n",
            record.path.display(),
            record.size_bytes,
            record.modified_display()
        ));
        files += 1;
    }

    fs::write(out_file, index).map_err(|e| FileOpsError::write(out_file, e))?;
    log::info!("Index of {} file(s) written to {}", files, out_file.display());

    Ok(BatchSummary {
        output: out_file.to_path_buf(),
        files,
    })
}
