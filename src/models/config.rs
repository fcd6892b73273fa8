//! # 运行配置模型
//!
//! 对应 `config.json`，启动时加载一次，之后只读。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs`, `report/` 使用
//! - 使用 `serde`, `serde_json`

use crate::error::{FsBatchError, Result};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 运行配置
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// 为 true 时所有输出写入同一目录，否则按 passed/failed 分目录
    #[serde(rename = "Same_dir")]
    pub same_dir: bool,

    /// 同一基名下最多保留的输出文件数
    #[serde(rename = "Max_log_files")]
    pub max_log_files: usize,

    /// 最多执行的命令条数，缺省为不限
    #[serde(rename = "Max_commands", default)]
    pub max_commands: Option<usize>,

    /// Categorize 的大小阈值，如 "10MB"
    #[serde(rename = "Threshold_size")]
    pub threshold_size: String,

    /// "csv" 选择 CSV 报告，其余选择日志报告
    #[serde(rename = "Output")]
    pub output: String,
}

impl Config {
    /// 从 JSON 文件加载配置
    pub fn load(path: &Path) -> Result<Self> {
        let config_error = |reason: String| FsBatchError::ConfigError {
            path: path.display().to_string(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    /// 是否输出 CSV 报告
    pub fn is_csv(&self) -> bool {
        self.output.eq_ignore_ascii_case("csv")
    }

    /// 有效的保留上限（至少保留新建的那一个）
    pub fn retained_files(&self) -> usize {
        self.max_log_files.max(1)
    }
}
