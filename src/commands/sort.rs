//! # Sort 操作
//!
//! 按名称、大小或修改时间对目录中的普通文件排序，
//! 将文件名逐行写入 `dir/sorted_<criteria>.txt`（覆盖已有文件）。
//!
//! 上一次运行留下的 `sorted_<criteria>.txt` 同样是普通文件，
//! 会出现在本次的排序结果中。
//!
//! ## 依赖关系
//! - 被 `models/command.rs` 调用
//! - 使用 `batch/collector.rs`

use crate::batch::collector::{file_name, FileCollector};
use crate::models::SortCriteria;
use crate::utils::logger::RunLog;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 输出文件名
pub fn output_name(criteria: SortCriteria) -> String {
    format!("sorted_{}.txt", criteria)
}

/// 执行 Sort
pub fn execute(dir: &Path, criteria: SortCriteria, log: &RunLog) -> bool {
    let files = match FileCollector::new(dir).collect() {
        Ok(files) => files,
        Err(e) => {
            log.error(format!("Sort: {}", e));
            return false;
        }
    };

    let ordered = match order_files(files, criteria) {
        Ok(ordered) => ordered,
        Err(e) => {
            log.error(format!("Sort: failed to read metadata: {}", e));
            return false;
        }
    };

    let output = dir.join(output_name(criteria));
    match write_listing(&output, &ordered) {
        Ok(()) => {
            log.info(format!(
                "Sort: wrote {} name(s) by {} to '{}'",
                ordered.len(),
                criteria,
                output.display()
            ));
            true
        }
        Err(e) => {
            log.error(format!("Sort: failed to write '{}': {}", output.display(), e));
            false
        }
    }
}

/// 排序；输入已按文件名排列，稳定排序使并列项保持名称顺序
fn order_files(files: Vec<PathBuf>, criteria: SortCriteria) -> std::io::Result<Vec<String>> {
    let mut keyed = Vec::with_capacity(files.len());
    for path in files {
        let meta = fs::metadata(&path)?;
        keyed.push((file_name(&path), meta.len(), meta.modified()?));
    }

    match criteria {
        SortCriteria::Name => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortCriteria::Size => keyed.sort_by_key(|entry| entry.1),
        SortCriteria::Date => keyed.sort_by_key(|entry| entry.2),
    }

    Ok(keyed.into_iter().map(|(name, _, _)| name).collect())
}

fn write_listing(output: &Path, names: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(output)?);
    for name in names {
        writeln!(writer, "{}", name)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};

    fn read_output(dir: &Path, criteria: SortCriteria) -> String {
        fs::read_to_string(dir.join(output_name(criteria))).unwrap()
    }

    #[test]
    fn test_sort_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let log = RunLog::new();
        assert!(execute(dir.path(), SortCriteria::Name, &log));
        assert_eq!(read_output(dir.path(), SortCriteria::Name), "a.txt\nb.txt\n");
    }

    #[test]
    fn test_sort_by_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("big.bin"), vec![0u8; 300]).unwrap();
        fs::write(dir.path().join("tiny.bin"), vec![0u8; 3]).unwrap();
        fs::write(dir.path().join("mid.bin"), vec![0u8; 30]).unwrap();

        let log = RunLog::new();
        assert!(execute(dir.path(), SortCriteria::Size, &log));
        assert_eq!(
            read_output(dir.path(), SortCriteria::Size),
            "tiny.bin\nmid.bin\nbig.bin\n"
        );
    }

    #[test]
    fn test_sort_by_date() {
        let dir = tempfile::tempdir().unwrap();
        for (name, secs) in [("first", 1_000_000), ("third", 3_000_000), ("second", 2_000_000)] {
            let path = dir.path().join(name);
            fs::write(&path, name).unwrap();
            set_file_mtime(&path, FileTime::from_unix_time(secs, 0)).unwrap();
        }

        let log = RunLog::new();
        assert!(execute(dir.path(), SortCriteria::Date, &log));
        assert_eq!(
            read_output(dir.path(), SortCriteria::Date),
            "first\nsecond\nthird\n"
        );
    }

    #[test]
    fn test_previous_output_is_included() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let log = RunLog::new();
        assert!(execute(dir.path(), SortCriteria::Name, &log));
        assert!(execute(dir.path(), SortCriteria::Name, &log));
        assert_eq!(
            read_output(dir.path(), SortCriteria::Name),
            "a.txt\nb.txt\nsorted_name.txt\n"
        );
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new();
        assert!(!execute(&dir.path().join("nope"), SortCriteria::Name, &log));
    }
}
