//! # ListAll 操作
//!
//! 列出目录下一层的全部条目（文件与子目录），逐条写入运行日志。
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用
//! - 使用 `batch/collector.rs`

use crate::batch::collector::{file_name, FileCollector};
use crate::utils::logger::RunLog;

use std::path::Path;

/// 执行 ListAll，返回条目名列表；无法列出目录时返回 None
pub fn execute(dir: &Path, log: &RunLog) -> Option<Vec<String>> {
    let entries = match FileCollector::new(dir).all_entries().collect() {
        Ok(entries) => entries,
        Err(e) => {
            log.error(format!("ListAll: {}", e));
            return None;
        }
    };

    log.info(format!(
        "ListAll: {} entr{} in '{}'",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        dir.display()
    ));

    let names: Vec<String> = entries
        .iter()
        .map(|path| {
            let name = file_name(path);
            if path.is_dir() {
                log.info(format!("  {}/", name));
            } else {
                log.info(format!("  {}", name));
            }
            name
        })
        .collect();

    Some(names)
}
