//! # 命令工厂
//!
//! 将脚本中的命令名与参数映射为 `Command`。
//!
//! ## 功能
//! - 构造时解析一次阈值大小，之后所有 Categorize 共用
//! - 未注册的命令名 → `UnknownCommand`
//! - 参数个数不符或取值非法 → `InvalidArguments`
//!
//! ## 依赖关系
//! - 被 `parsers/script.rs`, `commands/mod.rs` 使用
//! - 使用 `parsers/size.rs`, `models/command.rs`

use crate::error::{FsBatchError, Result};
use crate::models::{Command, SortCriteria};
use crate::parsers::size::parse_size;

use std::path::PathBuf;

/// 已注册的命令名及其参数说明
pub const COMMANDS: [(&str, &[&str]); 7] = [
    ("MoveLast", &["source_dir", "dest_dir"]),
    ("Categorize", &["dir"]),
    ("Count", &["dir"]),
    ("Delete", &["filename", "dir"]),
    ("Rename", &["old_name", "new_name", "dir"]),
    ("ListAll", &["dir"]),
    ("Sort", &["dir", "criteria"]),
];

/// 命令工厂
#[derive(Debug, Clone)]
pub struct CommandFactory {
    /// Categorize 使用的阈值（字节）
    threshold_bytes: u64,
}

impl CommandFactory {
    /// 由阈值大小字符串创建工厂
    pub fn new(threshold_size: &str) -> Result<Self> {
        Ok(Self {
            threshold_bytes: parse_size(threshold_size)?,
        })
    }

    pub fn threshold_bytes(&self) -> u64 {
        self.threshold_bytes
    }

    /// 根据命令名与参数构造命令
    pub fn create_command(&self, name: &str, args: &[String]) -> Result<Command> {
        let params = COMMANDS
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, params)| *params)
            .ok_or_else(|| FsBatchError::UnknownCommand {
                name: name.to_string(),
            })?;

        if args.len() != params.len() {
            return Err(FsBatchError::InvalidArguments {
                command: name.to_string(),
                reason: format!(
                    "expected {} argument(s) <{}>, got {}",
                    params.len(),
                    params.join("> <"),
                    args.len()
                ),
            });
        }

        let path = |i: usize| PathBuf::from(&args[i]);

        let command = match name {
            "MoveLast" => Command::MoveLast {
                source_dir: path(0),
                dest_dir: path(1),
            },
            "Categorize" => Command::Categorize {
                dir: path(0),
                threshold_bytes: self.threshold_bytes,
            },
            "Count" => Command::Count { dir: path(0) },
            "Delete" => Command::Delete {
                filename: args[0].clone(),
                dir: path(1),
            },
            "Rename" => Command::Rename {
                old_name: args[0].clone(),
                new_name: args[1].clone(),
                dir: path(2),
            },
            "ListAll" => Command::ListAll { dir: path(0) },
            "Sort" => Command::Sort {
                dir: path(0),
                criteria: SortCriteria::parse(&args[1]).ok_or_else(|| {
                    FsBatchError::InvalidArguments {
                        command: name.to_string(),
                        reason: format!(
                            "unknown criteria '{}' (expected name, size or date)",
                            args[1]
                        ),
                    }
                })?,
            },
            _ => {
                return Err(FsBatchError::UnknownCommand {
                    name: name.to_string(),
                })
            }
        };

        Ok(command)
    }
}
