//! # 命令数据模型
//!
//! 七种文件操作统一为一个封闭的枚举，由 `CommandFactory` 构造，
//! 由 `BatchRunner` 按顺序执行。
//!
//! ## 依赖关系
//! - 被 `commands/factory.rs`, `parsers/script.rs`, `batch/runner.rs` 使用
//! - 执行逻辑委托给 `commands/` 下各操作模块

use crate::batch::Execute;
use crate::commands::{categorize, count, delete, list_all, move_last, rename, sort};
use crate::utils::logger::RunLog;

use std::fmt;
use std::path::PathBuf;

/// Sort 命令的排序依据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    /// 按文件名字典序
    Name,
    /// 按字节数升序
    Size,
    /// 按修改时间升序
    Date,
}

impl SortCriteria {
    /// 解析排序依据（大小写不敏感）
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "name" => Some(SortCriteria::Name),
            "size" => Some(SortCriteria::Size),
            "date" => Some(SortCriteria::Date),
            _ => None,
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortCriteria::Name => write!(f, "name"),
            SortCriteria::Size => write!(f, "size"),
            SortCriteria::Date => write!(f, "date"),
        }
    }
}

/// 一条可执行的文件操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 将 `source_dir` 中最新修改的文件移入 `dest_dir`
    MoveLast { source_dir: PathBuf, dest_dir: PathBuf },
    /// 按阈值把 `dir` 中的文件分到 small/large 两个子目录
    Categorize { dir: PathBuf, threshold_bytes: u64 },
    /// 统计 `dir` 中的普通文件数
    Count { dir: PathBuf },
    /// 删除 `dir/filename`
    Delete { filename: String, dir: PathBuf },
    /// 将 `dir/old_name` 重命名为 `dir/new_name`
    Rename {
        old_name: String,
        new_name: String,
        dir: PathBuf,
    },
    /// 列出 `dir` 下的全部条目
    ListAll { dir: PathBuf },
    /// 排序并写出 `dir/sorted_<criteria>.txt`
    Sort { dir: PathBuf, criteria: SortCriteria },
}

impl Command {
    /// 脚本中使用的命令名
    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveLast { .. } => "MoveLast",
            Command::Categorize { .. } => "Categorize",
            Command::Count { .. } => "Count",
            Command::Delete { .. } => "Delete",
            Command::Rename { .. } => "Rename",
            Command::ListAll { .. } => "ListAll",
            Command::Sort { .. } => "Sort",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveLast {
                source_dir,
                dest_dir,
            } => write!(
                f,
                "MoveLast {} -> {}",
                source_dir.display(),
                dest_dir.display()
            ),
            Command::Categorize {
                dir,
                threshold_bytes,
            } => write!(f, "Categorize {} ({} bytes)", dir.display(), threshold_bytes),
            Command::Count { dir } => write!(f, "Count {}", dir.display()),
            Command::Delete { filename, dir } => {
                write!(f, "Delete {} in {}", filename, dir.display())
            }
            Command::Rename {
                old_name,
                new_name,
                dir,
            } => write!(f, "Rename {} -> {} in {}", old_name, new_name, dir.display()),
            Command::ListAll { dir } => write!(f, "ListAll {}", dir.display()),
            Command::Sort { dir, criteria } => {
                write!(f, "Sort {} by {}", dir.display(), criteria)
            }
        }
    }
}

impl Execute for Command {
    fn execute(&self, log: &RunLog) -> bool {
        match self {
            Command::MoveLast {
                source_dir,
                dest_dir,
            } => move_last::execute(source_dir, dest_dir, log),
            Command::Categorize {
                dir,
                threshold_bytes,
            } => categorize::execute(dir, *threshold_bytes, log),
            Command::Count { dir } => count::execute(dir, log).is_some(),
            Command::Delete { filename, dir } => delete::execute(filename, dir, log),
            Command::Rename {
                old_name,
                new_name,
                dir,
            } => rename::execute(old_name, new_name, dir, log),
            Command::ListAll { dir } => list_all::execute(dir, log).is_some(),
            Command::Sort { dir, criteria } => sort::execute(dir, *criteria, log),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
