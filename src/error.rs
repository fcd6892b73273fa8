//! # 统一错误处理模块
//!
//! 定义 fsbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 命令本身从不向外传播错误（失败折算为 `false`），
//! 这里的错误只出现在构造阶段和运行的致命路径上。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fsbatch 统一错误类型
#[derive(Error, Debug)]
pub enum FsBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid size format: '{0}' (expected e.g. '512B', '10KB', '1.5GB')")]
    InvalidSizeFormat(String),

    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    #[error("Invalid arguments for '{command}': {reason}")]
    InvalidArguments { command: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Missing or malformed configuration: {path}\nReason: {reason}")]
    ConfigError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FsBatchError>;
