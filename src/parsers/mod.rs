//! # 解析器模块
//!
//! 提供命令脚本与大小字符串的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: script, size

pub mod script;
pub mod size;

pub use script::ScriptParser;
