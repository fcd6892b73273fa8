//! # Delete 操作
//!
//! 删除 `dir/filename`：仅当其存在、是普通文件且可写。
//! 文件不存在或无权限时返回 false，不视为运行错误。
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用

use crate::utils::logger::RunLog;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 执行 Delete
pub fn execute(filename: &str, dir: &Path, log: &RunLog) -> bool {
    let path = dir.join(filename);

    let metadata = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log.warn(format!("Delete: '{}' does not exist", path.display()));
            return false;
        }
        Err(e) => {
            log.error(format!("Delete: cannot access '{}': {}", path.display(), e));
            return false;
        }
    };

    if !metadata.is_file() {
        log.warn(format!("Delete: '{}' is not a regular file", path.display()));
        return false;
    }

    if metadata.permissions().readonly() {
        log.error(format!(
            "Delete: permission denied, '{}' is read-only",
            path.display()
        ));
        return false;
    }

    match fs::remove_file(&path) {
        Ok(()) => {
            log.info(format!("Delete: removed '{}'", path.display()));
            true
        }
        Err(e) => {
            log.error(format!("Delete: failed to remove '{}': {}", path.display(), e));
            false
        }
    }
}
