//! # 数据模型模块
//!
//! 定义命令、执行结果与运行配置的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `commands/`, `batch/`, `report/` 使用
//! - 子模块: command, config, result

pub mod command;
pub mod config;
pub mod result;

pub use command::{Command, SortCriteria};
pub use config::Config;
pub use result::{CommandOutcome, ExecutionResult, RunStatus};
