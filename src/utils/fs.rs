//! # 文件移动工具
//!
//! 优先使用 `rename`；跨文件系统（EXDEV）时退回到复制加删除。
//! 目标目录中已有同名文件时不覆盖，返回 `AlreadyExists`。
//!
//! ## 依赖关系
//! - 被 `commands/move_last.rs`, `commands/categorize.rs` 使用

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 将 `source` 移入目录 `dest_dir`，保留原文件名，返回新路径
pub fn move_into(source: &Path, dest_dir: &Path) -> io::Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", source.display()),
        )
    })?;
    let destination = dest_dir.join(file_name);
    if destination.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("'{}' already exists", destination.display()),
        ));
    }

    match fs::rename(source, &destination) {
        Ok(()) => Ok(destination),
        Err(e) if is_cross_device(&e) => {
            fs::copy(source, &destination)?;
            fs::remove_file(source)?;
            Ok(destination)
        }
        Err(e) => Err(e),
    }
}

fn is_cross_device(err: &io::Error) -> bool {
    // EXDEV: Linux/macOS 为 18，Windows 为 ERROR_NOT_SAME_DEVICE (17)
    match err.raw_os_error() {
        Some(code) if cfg!(windows) => code == 17,
        Some(code) => code == 18,
        None => false,
    }
}
