//! # file 命令实现
//!
//! 单文件分析：信息、单词统计、head/tail、关键字计数与过滤。
//!
//! ## 依赖关系
//! - 使用 `cli/file.rs` 定义的参数
//! - 使用 `text/`
//! - 使用 `utils/output.rs`

use super::ensure_out_dir;
use crate::cli::file::{CountArgs, FileArgs, FileCommands, FilterArgs, SliceArgs, TargetArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::text::lines::{self, FilterMode};
use crate::text::stats;
use crate::utils::output::{self, MetricRow};

use std::path::{Path, PathBuf};

/// 执行 file 命令
pub fn execute(args: FileArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        FileCommands::Info(args) => info(args, config),
        FileCommands::Stats(args) => word_stats(args, config),
        FileCommands::Head(args) => slice(args, config, Slice::Head),
        FileCommands::Tail(args) => slice(args, config, Slice::Tail),
        FileCommands::Count(args) => count(args, config),
        FileCommands::Filter(args) => filter(args, config),
    }
}

#[derive(Clone, Copy)]
enum Slice {
    Head,
    Tail,
}

fn input_path(path: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    path.unwrap_or_else(|| config.default_file.clone())
}

/// 输出路径：显式指定优先，否则写入输出目录下的默认文件名
fn output_path(
    output: Option<PathBuf>,
    config: &AppConfig,
    default_name: &str,
) -> Result<PathBuf> {
    match output {
        Some(path) => Ok(path),
        None => {
            ensure_out_dir(&config.out_dir)?;
            Ok(config.out_dir.join(default_name))
        }
    }
}

fn info(args: TargetArgs, config: &AppConfig) -> Result<()> {
    let path = input_path(args.path, config);
    stats::check_file(&path)?;
    let info = stats::file_info(&path)?;

    output::print_header(&format!("File info: {}", path.display()));
    output::print_metrics(&[
        MetricRow::new("Size (bytes)", info.size_bytes),
        MetricRow::new("Lines", info.line_count),
    ]);
    Ok(())
}

fn word_stats(args: TargetArgs, config: &AppConfig) -> Result<()> {
    let path = input_path(args.path, config);
    let result = stats::word_stats(&path)?;

    output::print_header(&format!("Word statistics: {}", path.display()));
    output::print_metrics(&[
        MetricRow::new("Words", result.word_count),
        MetricRow::new("Mean word length", format!("{:.2}", result.mean_word_length)),
    ]);
    Ok(())
}

fn slice(args: SliceArgs, config: &AppConfig, which: Slice) -> Result<()> {
    let path = input_path(args.path, config);
    let (selected, default_name) = match which {
        Slice::Head => (lines::head(&path, args.lines)?, "head.txt"),
        Slice::Tail => (lines::tail(&path, args.lines)?, "tail.txt"),
    };

    let out = output_path(args.output, config, default_name)?;
    lines::write_lines(&out, &selected)?;
    report_saved(&path, selected.len(), &out);
    Ok(())
}

fn count(args: CountArgs, config: &AppConfig) -> Result<()> {
    let path = input_path(args.path, config);
    let matches = lines::count_matching(&path, &args.keyword)?;

    output::print_success(&format!(
        "{} line(s) in '{}' contain '{}'",
        matches,
        path.display(),
        args.keyword
    ));
    Ok(())
}

fn filter(args: FilterArgs, config: &AppConfig) -> Result<()> {
    let path = input_path(args.path, config);
    let mode = if args.exclude {
        FilterMode::Exclude
    } else {
        FilterMode::Include
    };
    let kept = lines::filter_lines(&path, &args.keyword, mode)?;

    let out = output_path(args.output, config, "filtered.txt")?;
    lines::write_lines(&out, &kept)?;
    report_saved(&path, kept.len(), &out);
    Ok(())
}

fn report_saved(input: &Path, count: usize, out: &Path) {
    output::print_done(&format!(
        "Saved {} line(s) from '{}' to '{}'",
        count,
        input.display(),
        out.display()
    ));
}
