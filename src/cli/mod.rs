//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `--input`: 命令脚本路径
//! - `--output`: 输出文件基名
//! - `--config`: 配置文件路径（默认 `config.json`）
//! - `--output-dir`: 输出根目录（默认 `output`）
//! - `--verbose`: 控制台输出调试日志
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/mod.rs`

use clap::Parser;
use std::path::PathBuf;

/// fsbatch - 脚本驱动的批量文件管理工具
#[derive(Parser, Debug)]
#[command(name = "fsbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Run a script of file-management commands and record pass/fail reports",
    long_about = None
)]
pub struct Cli {
    /// Path to the command script (one command per line)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Base name for the rotated .log/.csv report file
    #[arg(short, long)]
    pub output: String,

    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json", env = "FSBATCH_CONFIG")]
    pub config: PathBuf,

    /// Root directory for report files
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Print debug logs to the console
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
