//! # 配置模块
//!
//! 从 JSON 文件加载默认路径与文件后缀。
//!
//! ```json
//! {
//!   "default_file": "data/sample.txt",
//!   "base_dir": "data",
//!   "out_dir": "out",
//!   "default_ext": ".txt"
//! }
//! ```
//!
//! 未知字段会被忽略，缺失字段取默认值。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 使用 `serde_json` 解析

use crate::batch::{BatchOptions, DEFAULT_SUFFIX};
use crate::error::{FileOpsError, Result};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 未指定 `--config` 时尝试加载的文件
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `file` 子命令的默认输入文件
    pub default_file: PathBuf,

    /// `batch` 子命令的默认根目录
    pub base_dir: PathBuf,

    /// 所有输出文件所在目录
    pub out_dir: PathBuf,

    /// 批量处理的文件后缀
    pub default_ext: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_file: PathBuf::from("data/sample.txt"),
            base_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("out"),
            default_ext: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// - 显式指定的路径必须存在且合法
    /// - 未指定时尝试 `config.json`，不存在则使用默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    log::debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// 从指定 JSON 文件加载
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FileOpsError::ConfigError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_json(&content).map_err(|reason| FileOpsError::ConfigError {
            path: path.display().to_string(),
            reason,
        })?;

        log::info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    fn from_json(content: &str) -> std::result::Result<Self, String> {
        let config: AppConfig = serde_json::from_str(content).map_err(|e| e.to_string())?;
        if config.default_ext.is_empty() {
            return Err("default_ext must not be empty".to_string());
        }
        Ok(config)
    }

    /// 批量操作配置
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            suffix: self.default_ext.clone(),
        }
    }
}
