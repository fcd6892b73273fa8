//! # 批量处理模块
//!
//! 提供目录快照与命令的顺序批量执行。
//!
//! ## 功能
//! - 列出目录下一层的条目
//! - 按序执行并受执行上限约束
//! - 进度反馈与结果汇总
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use runner::{BatchRunner, Execute};
