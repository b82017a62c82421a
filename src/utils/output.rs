//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 使用 `colored` 和 `tabled` crate

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 键值表格的一行
#[derive(Debug, Clone, Tabled)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl MetricRow {
    pub fn new(metric: &str, value: impl ToString) -> Self {
        MetricRow {
            metric: metric.to_string(),
            value: value.to_string(),
        }
    }
}

/// 打印键值表格
pub fn print_metrics(rows: &[MetricRow]) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}
