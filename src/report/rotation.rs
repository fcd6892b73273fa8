//! # 输出文件轮转
//!
//! 同一目录下名为 `<base>_<n>.<ext>` 的文件构成一个有上限的集合，
//! 新建文件前按修改时间淘汰最旧的文件。集合每次都从目录列表重新推导。
//!
//! ## 依赖关系
//! - 被 `report/mod.rs` 使用

use crate::error::{FsBatchError, Result};

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// 输出文件轮转器
pub struct OutputRotator {
    dir: PathBuf,
    base_name: String,
    extension: String,
    max_files: usize,
}

impl OutputRotator {
    pub fn new(
        dir: impl Into<PathBuf>,
        base_name: &str,
        extension: &str,
        max_files: usize,
    ) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.to_string(),
            extension: extension.to_string(),
            max_files: max_files.max(1),
        }
    }

    /// 淘汰旧文件并返回下一个可用的输出路径
    pub fn next_path(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| FsBatchError::FileWriteError {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let mut existing = self.existing_files()?;
        // 最旧的排在前面
        existing.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let excess = (existing.len() + 1).saturating_sub(self.max_files);
        for (path, _) in existing.drain(..excess) {
            log::debug!("Rotating out '{}'", path.display());
            fs::remove_file(&path).map_err(|e| FsBatchError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
        }

        let mut n = existing.len() + 1;
        loop {
            let candidate = self.dir.join(self.file_name(n));
            if !candidate.exists() {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    fn file_name(&self, n: usize) -> String {
        format!("{}_{}.{}", self.base_name, n, self.extension)
    }

    /// 文件名是否形如 `<base>_<n>.<ext>`
    fn is_member(&self, name: &str) -> bool {
        name.strip_prefix(self.base_name.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_suffix(self.extension.as_str()))
            .and_then(|rest| rest.strip_suffix('.'))
            .map_or(false, |n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }

    /// 目录中属于本集合的文件及其修改时间
    fn existing_files(&self) -> Result<Vec<(PathBuf, SystemTime)>> {
        let read_error = |source: std::io::Error| FsBatchError::FileReadError {
            path: self.dir.display().to_string(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !self.is_member(&name) {
                continue;
            }
            let meta = entry.metadata().map_err(read_error)?;
            if meta.is_file() {
                files.push((entry.path(), meta.modified().map_err(read_error)?));
            }
        }
        Ok(files)
    }
}
