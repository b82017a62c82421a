//! # 目录遍历器
//!
//! 递归遍历根目录，产出所有以指定后缀结尾的普通文件记录。
//!
//! ## 功能
//! - 深度优先，每一层按文件名排序，保证报告/索引/合并三者顺序一致
//! - 后缀匹配区分大小写
//! - 指向普通文件的符号链接同样参与处理，指向目录的链接不会展开，悬空链接被跳过
//! - 任一子目录读取失败即终止整个遍历
//!
//! ## 依赖关系
//! - 被 `batch/report.rs`, `batch/index.rs`, `batch/merge.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{FileOpsError, Result};
use crate::models::FileRecord;

use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 默认文本文件后缀
pub const DEFAULT_SUFFIX: &str = ".txt";

/// 文本文件遍历器
pub struct TextFileWalker {
    /// 根目录
    root: PathBuf,
    /// 文件名后缀
    suffix: String,
}

impl TextFileWalker {
    /// 创建新的遍历器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// 设置文件名后缀
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    /// 开始遍历
    ///
    /// 根目录不存在或不是目录时立即失败，不产出任何记录。
    pub fn walk(&self) -> Result<TextFiles> {
        let metadata = fs::metadata(&self.root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileOpsError::DirectoryNotFound {
                path: self.root.display().to_string(),
            },
            _ => FileOpsError::read(&self.root, e),
        })?;

        if !metadata.is_dir() {
            return Err(FileOpsError::NotADirectory {
                path: self.root.display().to_string(),
            });
        }

        log::debug!(
            "Walking '{}' for '*{}' files",
            self.root.display(),
            self.suffix
        );

        Ok(TextFiles {
            inner: WalkDir::new(&self.root).sort_by_file_name().into_iter(),
            root: self.root.clone(),
            suffix: self.suffix.clone(),
            failed: false,
        })
    }
}

/// 遍历结果的惰性序列
///
/// 出错后产出该错误并结束。
pub struct TextFiles {
    inner: walkdir::IntoIter,
    root: PathBuf,
    suffix: String,
    failed: bool,
}

impl Iterator for TextFiles {
    type Item = Result<FileRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.failed = true;
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(FileOpsError::WalkError {
                        path: path.display().to_string(),
                        source: e,
                    }));
                }
            };

            if entry.file_type().is_dir() || !self.matches(&entry) {
                continue;
            }

            let record = match file_metadata(&entry) {
                Ok(Some(metadata)) => to_record(&entry, &metadata),
                Ok(None) => continue,
                Err(e) => Err(e),
            };
            if record.is_err() {
                self.failed = true;
            }
            return Some(record);
        }
    }
}

impl TextFiles {
    fn matches(&self, entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(&self.suffix))
            .unwrap_or(false)
    }
}

/// 普通文件或指向普通文件的符号链接的元数据，其余类型返回 `None`
fn file_metadata(entry: &DirEntry) -> Result<Option<Metadata>> {
    let path = entry.path();
    if entry.path_is_symlink() {
        return match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file().then_some(metadata)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Skipping dangling link {}", path.display());
                Ok(None)
            }
            Err(e) => Err(FileOpsError::read(path, e)),
        };
    }
    if !entry.file_type().is_file() {
        return Ok(None);
    }
    entry
        .metadata()
        .map(Some)
        .map_err(|e| FileOpsError::WalkError {
            path: path.display().to_string(),
            source: e,
        })
}

fn to_record(entry: &DirEntry, metadata: &Metadata) -> Result<FileRecord> {
    let path = entry.path();
    let modified = metadata
        .modified()
        .map_err(|e| FileOpsError::read(path, e))?;

    log::trace!("Matched {}", path.display());

    Ok(FileRecord {
        path: path.to_path_buf(),
        name: entry.file_name().to_string_lossy().to_string(),
        size_bytes: metadata.len(),
        modified_at: DateTime::<Local>::from(modified),
    })
}
