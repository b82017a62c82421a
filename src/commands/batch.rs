//! # batch 命令实现
//!
//! 依次生成报告、索引与合并文件。每个步骤独立遍历根目录，
//! 某一步失败时报告错误并继续后续步骤，最终汇总失败数。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::ensure_out_dir;
use crate::batch::{self, BatchOptions, BatchSummary};
use crate::cli::batch::{BatchArgs, BatchStep};
use crate::config::AppConfig;
use crate::error::{FileOpsError, Result};
use crate::utils::{output, progress};

use std::path::Path;

/// 索引文件名
const INDEX_FILE_NAME: &str = "index.txt";
/// 合并文件名
const MERGED_FILE_NAME: &str = "merged.txt";

/// 执行 batch 命令
pub fn execute(args: BatchArgs, config: &AppConfig) -> Result<()> {
    let root = args.dir.clone().unwrap_or_else(|| config.base_dir.clone());
    let steps = args.steps();

    output::print_header(&format!("Batch processing '{}'", root.display()));
    ensure_out_dir(&config.out_dir)?;

    let options = config.batch_options();
    output::print_info(&format!("Matching '*{}' files", options.suffix));
    let mut failed = 0;

    for step in &steps {
        let pb = progress::create_spinner(&format!("Running {}...", step));
        let result = run_step(*step, &root, &config.out_dir, &options);
        pb.finish_and_clear();

        match result {
            Ok(summary) => output::print_success(&format!(
                "{} of {} file(s) written to '{}'",
                step,
                summary.files,
                summary.output.display()
            )),
            Err(e) => {
                failed += 1;
                output::print_error(&format!("{} failed: {}", step, e));
            }
        }
    }

    if failed > 0 {
        return Err(FileOpsError::BatchFailed {
            failed,
            total: steps.len(),
        });
    }

    output::print_done(&format!("{} batch step(s) completed", steps.len()));
    Ok(())
}

fn run_step(
    step: BatchStep,
    root: &Path,
    out_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    match step {
        BatchStep::Report => batch::generate_report(root, out_dir, options),
        BatchStep::Index => batch::generate_index(root, &out_dir.join(INDEX_FILE_NAME), options),
        BatchStep::Merge => batch::merge_files(root, &out_dir.join(MERGED_FILE_NAME), options),
    }
}
