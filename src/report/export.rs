//! # 报告导出
//!
//! 将执行结果导出为 CSV 或日志文本。
//!
//! ## 支持格式
//! - CSV: 每条命令一行单字段记录 `command#<i>: <true|false>`，无表头
//! - LOG: 运行日志全部记录，随后每条命令一行结果，最后一行整体状态
//!
//! ## 依赖关系
//! - 被 `report/mod.rs` 调用
//! - 使用 `models/result.rs` 的 ExecutionResult
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{FsBatchError, Result};
use crate::models::{CommandOutcome, ExecutionResult};
use crate::utils::logger::LogRecord;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 单条结果的文本形式
pub fn outcome_line(outcome: &CommandOutcome) -> String {
    format!("{}: {}", outcome.label(), outcome.success)
}

/// 导出结果为 CSV
pub fn write_csv(output_path: &Path, result: &ExecutionResult) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    for outcome in result.iter() {
        wtr.write_record([outcome_line(outcome)])?;
    }

    wtr.flush().map_err(|e| FsBatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出结果为日志文件
pub fn write_log(
    output_path: &Path,
    result: &ExecutionResult,
    records: &[LogRecord],
) -> Result<()> {
    let write_error = |e: std::io::Error| FsBatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(writer, "{}", record).map_err(write_error)?;
    }
    for outcome in result.iter() {
        writeln!(writer, "{}", outcome_line(outcome)).map_err(write_error)?;
    }
    writeln!(writer, "Status: {}", result.status()).map_err(write_error)?;

    writer.flush().map_err(write_error)
}
