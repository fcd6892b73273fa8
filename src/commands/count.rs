//! # Count 操作
//!
//! 统计目录下一层的普通文件数。数量为 0 也算成功。
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用
//! - 使用 `batch/collector.rs`

use crate::batch::collector::FileCollector;
use crate::utils::logger::RunLog;

use std::path::Path;

/// 执行 Count，返回文件数；无法列出目录时返回 None
pub fn execute(dir: &Path, log: &RunLog) -> Option<usize> {
    match FileCollector::new(dir).collect() {
        Ok(files) => {
            log.info(format!(
                "Count: {} file(s) in '{}'",
                files.len(),
                dir.display()
            ));
            Some(files.len())
        }
        Err(e) => {
            log.error(format!("Count: {}", e));
            None
        }
    }
}
