//! # 批量执行器
//!
//! 按顺序执行命令序列，收集每条命令的成功/失败结果。
//!
//! ## 功能
//! - 严格按序号 1, 2, 3... 顺序执行
//! - 达到执行上限后停止，后续命令既不执行也不出现在结果中
//! - 单条命令 panic 时记为失败并继续，不影响整批
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 结果写入 `models/result.rs`

use crate::models::ExecutionResult;
use crate::utils::logger::RunLog;
use crate::utils::progress;

use std::panic::{self, AssertUnwindSafe};

/// 可被批量执行的对象
pub trait Execute {
    /// 执行并返回是否成功
    fn execute(&self, log: &RunLog) -> bool;

    /// 用于日志的简短描述
    fn describe(&self) -> String;
}

/// 批量执行器
pub struct BatchRunner {
    /// 最多执行的命令条数，None 为不限
    max_commands: Option<usize>,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(max_commands: Option<usize>) -> Self {
        Self { max_commands }
    }

    /// 顺序执行命令列表
    pub fn run<T: Execute>(&self, commands: &[T], log: &RunLog) -> ExecutionResult {
        let planned = match self.max_commands {
            Some(max) => commands.len().min(max),
            None => commands.len(),
        };
        let pb = progress::create_progress_bar(planned as u64, "Executing");

        let mut result = ExecutionResult::new();

        for (idx, command) in commands.iter().enumerate() {
            let index = idx + 1;

            if let Some(max) = self.max_commands {
                if index > max {
                    log.warn(format!(
                        "Maximum number of commands ({}) reached, {} command(s) not executed",
                        max,
                        commands.len() - max
                    ));
                    break;
                }
            }

            log.info(format!("Executing command#{}: {}", index, command.describe()));

            let success = match panic::catch_unwind(AssertUnwindSafe(|| command.execute(log))) {
                Ok(success) => success,
                Err(payload) => {
                    log.error(format!(
                        "command#{} aborted unexpectedly: {}",
                        index,
                        panic_message(payload.as_ref())
                    ));
                    false
                }
            };

            let outcome = result.push(success);
            if outcome.success {
                log.info(format!("{} succeeded", outcome.label()));
            } else {
                log.error(format!("{} failed", outcome.label()));
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        result
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Command;
    use crate::utils::logger::LogLevel;
    use std::cell::Cell;
    use std::fs;

    struct Probe<'a> {
        outcome: Option<bool>,
        calls: &'a Cell<usize>,
    }

    impl Execute for Probe<'_> {
        fn execute(&self, _log: &RunLog) -> bool {
            self.calls.set(self.calls.get() + 1);
            match self.outcome {
                Some(success) => success,
                None => panic!("probe exploded"),
            }
        }

        fn describe(&self) -> String {
            "probe".to_string()
        }
    }

    #[test]
    fn test_cap_stops_before_extra_commands() {
        let dir = tempfile::tempdir().unwrap();
        let mut commands = Vec::new();
        for i in 1..=5 {
            let name = format!("file{}.txt", i);
            fs::write(dir.path().join(&name), "x").unwrap();
            commands.push(Command::Delete {
                filename: name,
                dir: dir.path().to_path_buf(),
            });
        }

        let log = RunLog::new();
        let result = BatchRunner::new(Some(3)).run(&commands, &log);

        let labels: Vec<String> = result.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["command#1", "command#2", "command#3"]);
        assert!(!dir.path().join("file1.txt").exists());
        assert!(!dir.path().join("file3.txt").exists());
        // 第 4、5 条从未执行
        assert!(dir.path().join("file4.txt").exists());
        assert!(dir.path().join("file5.txt").exists());
    }

    #[test]
    fn test_unbounded_runs_everything() {
        let calls = Cell::new(0);
        let probes: Vec<Probe> = (0..4)
            .map(|_| Probe {
                outcome: Some(true),
                calls: &calls,
            })
            .collect();

        let log = RunLog::new();
        let result = BatchRunner::new(None).run(&probes, &log);
        assert_eq!(result.len(), 4);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_zero_cap_runs_nothing() {
        let calls = Cell::new(0);
        let probes = vec![Probe {
            outcome: Some(true),
            calls: &calls,
        }];

        let log = RunLog::new();
        let result = BatchRunner::new(Some(0)).run(&probes, &log);
        assert!(result.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_panic_is_recorded_as_failure() {
        let calls = Cell::new(0);
        let probes = vec![
            Probe {
                outcome: Some(true),
                calls: &calls,
            },
            Probe {
                outcome: None,
                calls: &calls,
            },
            Probe {
                outcome: Some(false),
                calls: &calls,
            },
            Probe {
                outcome: Some(true),
                calls: &calls,
            },
        ];

        let log = RunLog::new();
        let result = BatchRunner::new(None).run(&probes, &log);

        let outcomes: Vec<bool> = result.iter().map(|o| o.success).collect();
        assert_eq!(outcomes, vec![true, false, false, true]);
        assert_eq!(calls.get(), 4);
        assert!(log
            .records()
            .iter()
            .any(|r| r.level == LogLevel::Error && r.message.contains("probe exploded")));
    }
}
