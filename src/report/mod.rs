//! # 结果报告模块
//!
//! 将执行结果写入轮转的日志或 CSV 文件。
//!
//! ## 功能
//! - 计算整体状态（全部成功为 passed）
//! - 根据 `Same_dir` 选择输出目录：`<root>/` 或 `<root>/<passed|failed>/`
//! - `Output == "csv"` 时写 CSV，否则写日志
//! - 两种输出都只消费已有的执行结果，不会再次执行命令
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `models/`, `utils/logger.rs`
//! - 子模块: export, rotation

pub mod export;
pub mod rotation;

use crate::error::Result;
use crate::models::{Config, ExecutionResult, RunStatus};
use crate::utils::logger::RunLog;

use rotation::OutputRotator;
use std::path::PathBuf;

/// 报告写出位置与状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub status: RunStatus,
    pub path: PathBuf,
}

/// 结果报告器
pub struct ResultReporter<'a> {
    config: &'a Config,
    output_root: PathBuf,
}

impl<'a> ResultReporter<'a> {
    pub fn new(config: &'a Config, output_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_root: output_root.into(),
        }
    }

    /// 本次运行的输出目录
    pub fn target_dir(&self, status: RunStatus) -> PathBuf {
        if self.config.same_dir {
            self.output_root.clone()
        } else {
            self.output_root.join(status.as_str())
        }
    }

    /// 写出报告，返回状态与文件路径
    pub fn report(
        &self,
        result: &ExecutionResult,
        base_name: &str,
        log: &RunLog,
    ) -> Result<ReportSummary> {
        let status = result.status();
        let extension = if self.config.is_csv() { "csv" } else { "log" };
        let dir = self.target_dir(status);

        let rotator =
            OutputRotator::new(&dir, base_name, extension, self.config.retained_files());
        let path = rotator.next_path()?;

        log.info(format!(
            "Run {}: {}/{} command(s) succeeded",
            status,
            result.passed_count(),
            result.len()
        ));

        if self.config.is_csv() {
            export::write_csv(&path, result)?;
        } else {
            export::write_log(&path, result, &log.records())?;
        }

        Ok(ReportSummary { status, path })
    }
}
