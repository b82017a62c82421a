//! # 日志模块
//!
//! 基于 `log` + `fern` 的诊断日志，输出到 stderr，不干扰 stdout 上的结果输出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 初始化
//! - 其他模块通过 `log::{info, debug, trace}` 宏使用

use crate::error::Result;

use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// 由 `-v` 出现次数得到日志级别
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 初始化全局日志
pub fn init_logger(verbose: u8) -> Result<()> {
    let level = level_from_verbosity(verbose);
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("Logger initialized at level {}", level);
    Ok(())
}
