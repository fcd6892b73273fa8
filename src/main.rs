//! # fsbatch - 脚本驱动的批量文件管理工具
//!
//! 读取命令脚本，将每行翻译为一次文件操作，按序执行（受上限约束），
//! 并把每条命令的成功/失败写入轮转的日志或 CSV 报告。
//!
//! ## 支持的命令
//! - `MoveLast <src> <dest>` - 移动最新修改的文件
//! - `Categorize <dir>` - 按大小阈值分类
//! - `Count <dir>` - 统计文件数
//! - `Delete <file> <dir>` - 删除文件
//! - `Rename <old> <new> <dir>` - 重命名
//! - `ListAll <dir>` - 列出全部条目
//! - `Sort <dir> <name|size|date>` - 排序并写出列表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (运行流程与七种文件操作)
//!   │     ├── parsers/   (脚本与大小解析)
//!   │     ├── batch/     (目录快照与顺序执行)
//!   │     ├── report/    (结果报告与文件轮转)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、运行日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logger::init_console(cli.verbose);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
