//! # 批量合并
//!
//! 将所有文本文件依次写入同一个输出文件，每个文件前加一行分隔标记。
//! 逐个文件流式复制，不会同时持有多个文件的内容。
//! 输出文件位于根目录之下时跳过它本身，每个文件最多复制遍历时记录的大小。
//!
//! ## 依赖关系
//! - 使用 `batch/walker.rs`

use super::{BatchOptions, BatchSummary};
use crate::error::{FileOpsError, Result};

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// 合并所有文本文件
///
/// 根目录在创建输出文件之前校验；遍历中途失败时输出文件不完整，应视为无效。
pub fn merge_files(
    root: &Path,
    out_file: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let records = options.walker(root).walk()?;

    let file = File::create(out_file).map_err(|e| FileOpsError::write(out_file, e))?;
    let out_canonical =
        fs::canonicalize(out_file).map_err(|e| FileOpsError::write(out_file, e))?;
    let mut writer = BufWriter::new(file);
    let mut files = 0;

    for record in records {
        let record = record?;
        if fs::canonicalize(&record.path).is_ok_and(|path| path == out_canonical) {
            log::debug!("Skipping merge output {}", record.path.display());
            continue;
        }

        let mut source = File::open(&record.path)
            .map_err(|e| FileOpsError::read(&record.path, e))?
            .take(record.size_bytes);

        writeln!(writer, "--- FICHIER: {} ---", record.name)
            .map_err(|e| FileOpsError::write(out_file, e))?;
        io::copy(&mut source, &mut writer).map_err(|e| FileOpsError::read(&record.path, e))?;
        writer
            .write_all(b"\n\n")
            .map_err(|e| FileOpsError::write(out_file, e))?;
        files += 1;
    }

    writer.flush().map_err(|e| FileOpsError::write(out_file, e))?;
    log::info!("Merged {} file(s) into {}", files, out_file.display());

    Ok(BatchSummary {
        output: out_file.to_path_buf(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merge_files() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(data.path().join("a.txt"), "X").unwrap();
        fs::write(data.path().join("b.txt"), "Y").unwrap();
        fs::write(data.path().join("c.csv"), "Z").unwrap();

        let out_file = out.path().join("merged.txt");
        let summary = merge_files(data.path(), &out_file, &BatchOptions::default()).unwrap();
        assert_eq!(summary.files, 2);
        assert_eq!(
            fs::read_to_string(&out_file).unwrap(),
            "--- FICHIER: a.txt ---\nX\n\n--- FICHIER: b.txt ---\nY\n\n"
        );
    }

    #[test]
    fn test_merge_keeps_raw_bytes() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let raw: &[u8] = &[0xff, 0xfe, b'\r', b'\n', b'a'];
        fs::write(data.path().join("bin.txt"), raw).unwrap();

        let out_file = out.path().join("merged.txt");
        merge_files(data.path(), &out_file, &BatchOptions::default()).unwrap();

        let mut expected = b"--- FICHIER: bin.txt ---\n".to_vec();
        expected.extend_from_slice(raw);
        expected.extend_from_slice(b"\n\n");
        assert_eq!(fs::read(&out_file).unwrap(), expected);
    }

    #[test]
    fn test_missing_root_writes_nothing() {
        let out = TempDir::new().unwrap();
        let out_file = out.path().join("merged.txt");
        let err = merge_files(&out.path().join("missing"), &out_file, &BatchOptions::default())
            .unwrap_err();
        assert!(matches!(err, FileOpsError::DirectoryNotFound { .. }));
        assert!(!out_file.exists());
    }

    #[test]
    fn test_output_inside_root_is_skipped() {
        let data = TempDir::new().unwrap();
        let body = "x".repeat(20_000);
        fs::write(data.path().join("a.txt"), &body).unwrap();
        fs::create_dir(data.path().join("out")).unwrap();

        let out_file = data.path().join("out").join("merged.txt");
        let summary = merge_files(data.path(), &out_file, &BatchOptions::default()).unwrap();
        assert_eq!(summary.files, 1);
        assert_eq!(
            fs::read_to_string(&out_file).unwrap(),
            format!("--- FICHIER: a.txt ---\n{}\n\n", body)
        );

        // 再次运行时旧的合并结果也不会被并入
        merge_files(data.path(), &out_file, &BatchOptions::default()).unwrap();
        assert_eq!(fs::metadata(&out_file).unwrap().len(), 23 + 20_000 + 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_merge_follows_symlinked_file() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("real.txt"), "R").unwrap();
        std::os::unix::fs::symlink(out.path().join("real.txt"), data.path().join("link.txt"))
            .unwrap();

        let out_file = out.path().join("merged.txt");
        let summary = merge_files(data.path(), &out_file, &BatchOptions::default()).unwrap();
        assert_eq!(summary.files, 1);
        assert_eq!(
            fs::read_to_string(&out_file).unwrap(),
            "--- FICHIER: link.txt ---\nR\n\n"
        );
    }
}
