//! # 命令执行进度
//!
//! 批量执行时按已执行命令条数推进的进度条，总长度为上限截断后的条数。
//! 执行结束后由调用方清除，不会残留在输出中。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 创建命令执行进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
