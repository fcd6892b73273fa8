//! # MoveLast 操作
//!
//! 将源目录中最近修改的普通文件移入目标目录。
//!
//! ## 功能
//! - 按修改时间选出最新文件
//! - 修改时间相同时取文件名字典序最靠前者（列表已按文件名排序）
//! - 目标目录不存在时自动创建
//! - 目标目录中已有同名文件时不覆盖，返回 false
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用
//! - 使用 `batch/collector.rs`, `utils/fs.rs`

use crate::batch::collector::{file_name, FileCollector};
use crate::utils::fs::move_into;
use crate::utils::logger::RunLog;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// 执行 MoveLast
pub fn execute(source_dir: &Path, dest_dir: &Path, log: &RunLog) -> bool {
    let files = match FileCollector::new(source_dir).collect() {
        Ok(files) => files,
        Err(e) => {
            log.error(format!("MoveLast: {}", e));
            return false;
        }
    };

    let newest = match newest_file(&files) {
        Ok(Some(path)) => path,
        Ok(None) => {
            log.warn(format!(
                "MoveLast: no files found in '{}'",
                source_dir.display()
            ));
            return false;
        }
        Err(e) => {
            log.error(format!("MoveLast: failed to read metadata: {}", e));
            return false;
        }
    };

    if let Err(e) = fs::create_dir_all(dest_dir) {
        log.error(format!(
            "MoveLast: failed to create '{}': {}",
            dest_dir.display(),
            e
        ));
        return false;
    }

    match move_into(&newest, dest_dir) {
        Ok(moved) => {
            log.info(format!(
                "MoveLast: moved '{}' to '{}'",
                file_name(&newest),
                moved.display()
            ));
            true
        }
        Err(e) => {
            log.error(format!(
                "MoveLast: failed to move '{}' to '{}': {}",
                newest.display(),
                dest_dir.display(),
                e
            ));
            false
        }
    }
}

/// 修改时间最新的文件；严格更新才替换，保证并列时取列表中的第一个
fn newest_file(files: &[PathBuf]) -> std::io::Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, &PathBuf)> = None;
    for path in files {
        let modified = fs::metadata(path)?.modified()?;
        match newest {
            Some((best, _)) if modified <= best => {}
            _ => newest = Some((modified, path)),
        }
    }
    Ok(newest.map(|(_, path)| path.clone()))
}
