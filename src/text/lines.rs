//! # 行变换
//!
//! 前 N 行、后 N 行、关键字计数与过滤。
//! 行以 `\n` 分隔，行尾的 `\r` 会被去除。
//!
//! ## 依赖关系
//! - 被 `commands/file.rs` 调用

use super::open_buffered;
use crate::error::{FileOpsError, Result};

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// 过滤模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// 保留包含关键字的行
    Include,
    /// 保留不包含关键字的行
    Exclude,
}

impl FilterMode {
    fn keeps(self, line: &str, keyword: &str) -> bool {
        match self {
            FilterMode::Include => line.contains(keyword),
            FilterMode::Exclude => !line.contains(keyword),
        }
    }
}

/// 前 N 行
pub fn head(path: &Path, n: usize) -> Result<Vec<String>> {
    let reader = open_buffered(path)?;
    head_lines(reader, n).map_err(|e| FileOpsError::read(path, e))
}

/// 后 N 行
pub fn tail(path: &Path, n: usize) -> Result<Vec<String>> {
    let reader = open_buffered(path)?;
    tail_lines(reader, n).map_err(|e| FileOpsError::read(path, e))
}

/// 包含关键字的行数
pub fn count_matching(path: &Path, keyword: &str) -> Result<usize> {
    let reader = open_buffered(path)?;
    count_matching_lines(reader, keyword).map_err(|e| FileOpsError::read(path, e))
}

/// 按关键字过滤行
pub fn filter_lines(path: &Path, keyword: &str, mode: FilterMode) -> Result<Vec<String>> {
    let reader = open_buffered(path)?;
    filter_matching_lines(reader, keyword, mode).map_err(|e| FileOpsError::read(path, e))
}

/// 逐行写出（每行以 `\n` 结尾），覆盖已有文件
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|e| FileOpsError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| FileOpsError::write(path, e))?;
    }
    writer.flush().map_err(|e| FileOpsError::write(path, e))?;
    log::info!("Wrote {} line(s) to {}", lines.len(), path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 基于 BufRead 的实现
// ─────────────────────────────────────────────────────────────

fn text_lines<R: BufRead>(reader: R) -> impl Iterator<Item = std::io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|bytes| {
            let text = String::from_utf8_lossy(&bytes);
            match text.strip_suffix('\r') {
                Some(stripped) => stripped.to_string(),
                None => text.into_owned(),
            }
        })
    })
}

fn head_lines<R: BufRead>(reader: R, n: usize) -> std::io::Result<Vec<String>> {
    text_lines(reader).take(n).collect()
}

fn tail_lines<R: BufRead>(reader: R, n: usize) -> std::io::Result<Vec<String>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut window = VecDeque::with_capacity(n.min(1024));
    for line in text_lines(reader) {
        if window.len() == n {
            window.pop_front();
        }
        window.push_back(line?);
    }
    Ok(window.into())
}

fn count_matching_lines<R: BufRead>(reader: R, keyword: &str) -> std::io::Result<usize> {
    let mut count = 0;
    for line in text_lines(reader) {
        if line?.contains(keyword) {
            count += 1;
        }
    }
    Ok(count)
}

fn filter_matching_lines<R: BufRead>(
    reader: R,
    keyword: &str,
    mode: FilterMode,
) -> std::io::Result<Vec<String>> {
    let mut kept = Vec::new();
    for line in text_lines(reader) {
        let line = line?;
        if mode.keeps(&line, keyword) {
            kept.push(line);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "first error\nsecond ok\r\nthird error\nfourth ok\n";

    #[test]
    fn test_head() {
        let lines = head_lines(SAMPLE.as_bytes(), 2).unwrap();
        assert_eq!(lines, vec!["first error", "second ok"]);

        let all = head_lines(SAMPLE.as_bytes(), 100).unwrap();
        assert_eq!(all.len(), 4);

        assert!(head_lines(SAMPLE.as_bytes(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_tail() {
        let lines = tail_lines("a\nb\nc\n".as_bytes(), 2).unwrap();
        assert_eq!(lines, vec!["b", "c"]);

        let lines = tail_lines("a\nb\nc".as_bytes(), 5).unwrap();
        assert_eq!(lines, vec!["a", "b", "c"]);

        assert!(tail_lines("a\nb".as_bytes(), 0).unwrap().is_empty());
        assert!(tail_lines("".as_bytes(), 3).unwrap().is_empty());
    }

    #[test]
    fn test_count_matching() {
        assert_eq!(count_matching_lines(SAMPLE.as_bytes(), "error").unwrap(), 2);
        assert_eq!(count_matching_lines(SAMPLE.as_bytes(), "Error").unwrap(), 0);
        assert_eq!(count_matching_lines(SAMPLE.as_bytes(), "").unwrap(), 4);
    }

    #[test]
    fn test_filter_lines() {
        let kept = filter_matching_lines(SAMPLE.as_bytes(), "ok", FilterMode::Include).unwrap();
        assert_eq!(kept, vec!["second ok", "fourth ok"]);

        let kept = filter_matching_lines(SAMPLE.as_bytes(), "ok", FilterMode::Exclude).unwrap();
        assert_eq!(kept, vec!["first error", "third error"]);
    }

    #[test]
    fn test_write_lines_and_file_wrappers() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("log.txt");
        fs::write(&input, SAMPLE).unwrap();

        let lines = head(&input, 3).unwrap();
        let out = dir.path().join("head.txt");
        write_lines(&out, &lines).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "first error\nsecond ok\nthird error\n"
        );

        assert_eq!(tail(&input, 1).unwrap(), vec!["fourth ok"]);
        assert_eq!(count_matching(&input, "third").unwrap(), 1);
        assert_eq!(
            filter_lines(&input, "second", FilterMode::Include).unwrap(),
            vec!["second ok"]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = head(&dir.path().join("missing.txt"), 1).unwrap_err();
        assert!(matches!(err, FileOpsError::FileReadError { .. }));
    }
}
