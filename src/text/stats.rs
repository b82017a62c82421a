//! # 文本统计
//!
//! 计算文件大小、行数以及单词统计。
//!
//! 纯整数 token（可带 `+`/`-` 符号，且在 i64 范围内）不计为单词，
//! 形如 `3.14` 的 token 仍然计为单词。单词长度按原始字节数计算，
//! 无效 UTF-8 字节不做替换，按所在 token 的一部分计入。
//!
//! ## 依赖关系
//! - 被 `batch/report.rs` 和 `commands/file.rs` 调用
//! - 使用 `models/stats.rs`

use super::open_buffered;
use crate::error::{FileOpsError, Result};
use crate::models::{FileInfo, WordStats};

use std::fs;
use std::io::BufRead;
use std::path::Path;

/// 检查路径存在且不是目录
pub fn check_file(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpsError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => FileOpsError::read(path, e),
    })?;

    if metadata.is_dir() {
        return Err(FileOpsError::NotAFile {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// 文件大小与行数
pub fn file_info(path: &Path) -> Result<FileInfo> {
    let reader = open_buffered(path)?;
    let line_count = count_lines(reader).map_err(|e| FileOpsError::read(path, e))?;

    let size_bytes = fs::metadata(path)
        .map_err(|e| FileOpsError::read(path, e))?
        .len();

    Ok(FileInfo {
        size_bytes,
        line_count,
    })
}

/// 文件的单词统计
pub fn word_stats(path: &Path) -> Result<WordStats> {
    let reader = open_buffered(path)?;
    word_stats_from_reader(reader).map_err(|e| FileOpsError::read(path, e))
}

/// 从任意缓冲读取源计算单词统计
pub fn word_stats_from_reader<R: BufRead>(reader: R) -> std::io::Result<WordStats> {
    let mut word_count = 0;
    let mut total_length = 0;

    for line in reader.split(b'\n') {
        let line = line?;
        for token in split_tokens(&line) {
            if is_integer(token) {
                continue;
            }
            word_count += 1;
            total_length += token.len();
        }
    }

    Ok(WordStats::from_totals(word_count, total_length))
}

/// 按 Unicode 空白切分一行
fn split_tokens(line: &[u8]) -> Vec<&[u8]> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut offset = 0;

    for chunk in line.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            if c.is_whitespace() {
                if let Some(begin) = start.take() {
                    tokens.push(&line[begin..offset + i]);
                }
            } else if start.is_none() {
                start = Some(offset + i);
            }
        }
        offset += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            start.get_or_insert(offset);
            offset += chunk.invalid().len();
        }
    }

    if let Some(begin) = start {
        tokens.push(&line[begin..]);
    }
    tokens
}

/// token 是否为十进制有符号整数
fn is_integer(token: &[u8]) -> bool {
    std::str::from_utf8(token)
        .map(|text| text.parse::<i64>().is_ok())
        .unwrap_or(false)
}

fn count_lines<R: BufRead>(reader: R) -> std::io::Result<usize> {
    let mut count = 0;
    for line in reader.split(b'\n') {
        line?;
        count += 1;
    }
    Ok(count)
}
