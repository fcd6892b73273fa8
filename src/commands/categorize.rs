//! # Categorize 操作
//!
//! 按大小阈值将目录中的普通文件分到两个子目录。
//!
//! ## 功能
//! - 大小 <= 阈值 → `inner_dir_small/`，否则 → `inner_dir_large/`
//! - 子目录已存在时直接复用，其中原有文件不受影响
//! - 子目录中已有同名文件时不覆盖，操作失败
//! - 先取目录快照再移动，新建子目录中的文件不会被再次处理
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用
//! - 使用 `batch/collector.rs`, `utils/fs.rs`

use crate::batch::collector::{file_name, FileCollector};
use crate::utils::fs::move_into;
use crate::utils::logger::RunLog;

use std::fs;
use std::path::Path;

pub const SMALL_DIR: &str = "inner_dir_small";
pub const LARGE_DIR: &str = "inner_dir_large";

/// 执行 Categorize
pub fn execute(dir: &Path, threshold_bytes: u64, log: &RunLog) -> bool {
    let files = match FileCollector::new(dir).collect() {
        Ok(files) => files,
        Err(e) => {
            log.error(format!("Categorize: {}", e));
            return false;
        }
    };

    let small_dir = dir.join(SMALL_DIR);
    let large_dir = dir.join(LARGE_DIR);
    for target in [&small_dir, &large_dir] {
        if let Err(e) = fs::create_dir_all(target) {
            log.error(format!(
                "Categorize: failed to create '{}': {}",
                target.display(),
                e
            ));
            return false;
        }
    }

    let mut small = 0;
    let mut large = 0;
    for path in &files {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                log.error(format!(
                    "Categorize: failed to read '{}': {}",
                    path.display(),
                    e
                ));
                return false;
            }
        };

        let (target, counter) = if size <= threshold_bytes {
            (&small_dir, &mut small)
        } else {
            (&large_dir, &mut large)
        };

        if let Err(e) = move_into(path, target) {
            log.error(format!(
                "Categorize: failed to move '{}' to '{}': {}",
                path.display(),
                target.display(),
                e
            ));
            return false;
        }
        *counter += 1;
        log.debug(format!(
            "Categorize: '{}' ({} bytes) -> {}",
            file_name(path),
            size,
            file_name(target)
        ));
    }

    log.info(format!(
        "Categorize: {} small, {} large file(s) in '{}' (threshold {} bytes)",
        small,
        large,
        dir.display(),
        threshold_bytes
    ));
    true
}
