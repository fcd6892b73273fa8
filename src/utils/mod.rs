//! # 工具函数模块
//!
//! 提供美化输出、进度条、运行日志与文件移动等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/`, `report/` 模块使用
//! - 子模块: fs, logger, output, progress

pub mod fs;
pub mod logger;
pub mod output;
pub mod progress;
