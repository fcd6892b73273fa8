//! # 文件收集器
//!
//! 列出目录下一层的条目，供各文件操作使用。
//!
//! ## 功能
//! - 只列出直接子条目（不递归）
//! - 可选只保留普通文件（跟随符号链接判断，指向普通文件的链接也算）
//! - 按文件名排序，使列表顺序确定
//! - 在操作开始前给出目录快照
//!
//! ## 依赖关系
//! - 被 `commands/` 下各操作模块调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{FsBatchError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 是否只保留普通文件
    files_only: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认只收集普通文件）
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            files_only: true,
        }
    }

    /// 同时收集子目录等全部条目
    pub fn all_entries(mut self) -> Self {
        self.files_only = false;
        self
    }

    /// 收集目录快照
    ///
    /// 目录不存在或无法读取时返回错误；单个条目读取失败同样视为错误，
    /// 避免静默漏掉文件。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(FsBatchError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| FsBatchError::FileReadError {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;
            if self.files_only && !entry.path().is_file() {
                continue;
            }
            paths.push(entry.into_path());
        }

        Ok(paths)
    }
}

/// 取路径的文件名部分
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_only_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.txt"), "n").unwrap();

        let files = FileCollector::new(dir.path()).collect().unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_collect_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let entries = FileCollector::new(dir.path()).all_entries().collect().unwrap();
        let names: Vec<String> = entries.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.txt", "sub"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_count_as_files() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("target.txt"), "t").unwrap();
        fs::create_dir(outside.path().join("target_dir")).unwrap();
        symlink(outside.path().join("target.txt"), dir.path().join("link.txt")).unwrap();
        symlink(outside.path().join("target_dir"), dir.path().join("link_dir")).unwrap();
        symlink(outside.path().join("gone.txt"), dir.path().join("dangling")).unwrap();

        let files = FileCollector::new(dir.path()).collect().unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["link.txt"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCollector::new(dir.path().join("nope")).collect();
        assert!(matches!(result, Err(FsBatchError::DirectoryNotFound { .. })));
    }
}
