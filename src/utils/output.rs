//! # 控制台输出
//!
//! 运行过程中面向用户的彩色提示：启动标题、配置与脚本加载信息、
//! 上限警告，以及最终的 passed/failed 汇总行。
//! 运行日志本身走 `utils/logger.rs`，这里只负责终端展示。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/mod.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 致命错误或 failed 汇总（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// passed 汇总
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 运行开始时的标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
