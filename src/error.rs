//! # 统一错误处理模块
//!
//! 定义 fileops 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - `Io`: 路径不存在、权限不足、读写失败
//! - `InvalidInput`: 参数或配置本身不合法（如根目录其实是普通文件）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 错误大类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    InvalidInput,
}

/// fileops 统一错误类型
#[derive(Error, Debug)]
pub enum FileOpsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {path}")]
    WalkError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Not a regular file: {path}")]
    NotAFile { path: String },

    #[error("Invalid configuration '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    #[error("{failed} of {total} batch step(s) failed")]
    BatchFailed { failed: usize, total: usize },
}

impl FileOpsError {
    /// 错误所属大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileOpsError::NotADirectory { .. }
            | FileOpsError::NotAFile { .. }
            | FileOpsError::ConfigError { .. } => ErrorKind::InvalidInput,
            _ => ErrorKind::Io,
        }
    }

    /// 包装读错误
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        FileOpsError::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 包装写错误
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        FileOpsError::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FileOpsError>;
