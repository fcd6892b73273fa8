//! # Rename 操作
//!
//! 在同一目录内将 `old_name` 重命名为 `new_name`。
//!
//! 目标已存在时的行为取决于平台的 `rename` 语义：
//! Unix 上会覆盖目标，Windows 上会失败并返回 false。
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用

use crate::utils::logger::RunLog;

use std::fs;
use std::path::Path;

/// 执行 Rename
pub fn execute(old_name: &str, new_name: &str, dir: &Path, log: &RunLog) -> bool {
    let source = dir.join(old_name);
    let target = dir.join(new_name);

    if !source.exists() {
        log.warn(format!("Rename: '{}' does not exist", source.display()));
        return false;
    }

    if target.exists() {
        log.warn(format!(
            "Rename: '{}' already exists, result depends on the platform",
            target.display()
        ));
    }

    match fs::rename(&source, &target) {
        Ok(()) => {
            log.info(format!("Rename: '{}' -> '{}'", old_name, new_name));
            true
        }
        Err(e) => {
            log.error(format!(
                "Rename: failed to rename '{}' to '{}': {}",
                source.display(),
                target.display(),
                e
            ));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renames_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("draft.txt"), "hello").unwrap();

        let log = RunLog::new();
        assert!(execute("draft.txt", "final.txt", dir.path(), &log));
        assert!(!dir.path().join("draft.txt").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("final.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_missing_source_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new();
        assert!(!execute("ghost.txt", "final.txt", dir.path(), &log));
        assert!(!dir.path().join("final.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_target_is_replaced_with_warning() {
        use crate::utils::logger::LogLevel;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("old.txt"), "fresh").unwrap();
        fs::write(dir.path().join("new.txt"), "stale").unwrap();

        let log = RunLog::new();
        assert!(execute("old.txt", "new.txt", dir.path(), &log));
        assert!(!dir.path().join("old.txt").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("new.txt")).unwrap(),
            "fresh"
        );
        assert!(log
            .records()
            .iter()
            .any(|r| r.level == LogLevel::Warning && r.message.contains("already exists")));
    }

    #[test]
    fn test_renames_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("old_dir")).unwrap();

        let log = RunLog::new();
        assert!(execute("old_dir", "new_dir", dir.path(), &log));
        assert!(dir.path().join("new_dir").is_dir());
    }
}
