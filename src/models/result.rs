//! # 执行结果模型
//!
//! 命令序号（从 1 开始）到成功/失败的有序映射。
//!
//! ## 依赖关系
//! - 由 `batch/runner.rs` 逐条构建
//! - 被 `report/` 消费

use std::fmt;

/// 整体运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
}

impl RunStatus {
    /// 对应的输出子目录名
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Passed => "passed",
            RunStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单条命令的执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// 从 1 开始的命令序号
    pub index: usize,
    pub success: bool,
}

impl CommandOutcome {
    /// 形如 `command#3` 的标签
    pub fn label(&self) -> String {
        format!("command#{}", self.index)
    }
}

/// 按执行顺序排列的结果映射
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    outcomes: Vec<CommandOutcome>,
}

impl ExecutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加下一条命令的结果，序号自动递增
    pub fn push(&mut self, success: bool) -> CommandOutcome {
        let outcome = CommandOutcome {
            index: self.outcomes.len() + 1,
            success,
        };
        self.outcomes.push(outcome);
        outcome
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandOutcome> {
        self.outcomes.iter()
    }

    /// 成功条数
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// 全部成功为 passed（空结果也算 passed）
    pub fn status(&self) -> RunStatus {
        if self.outcomes.iter().all(|o| o.success) {
            RunStatus::Passed
        } else {
            RunStatus::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_one_based_and_increasing() {
        let mut result = ExecutionResult::new();
        result.push(true);
        result.push(false);
        result.push(true);

        let labels: Vec<String> = result.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["command#1", "command#2", "command#3"]);
        let second = result.iter().nth(1).unwrap();
        assert!(!second.success);
        assert_eq!(result.passed_count(), 2);
    }

    #[test]
    fn test_status() {
        let mut result = ExecutionResult::new();
        assert_eq!(result.status(), RunStatus::Passed);

        result.push(true);
        assert_eq!(result.status(), RunStatus::Passed);

        result.push(false);
        assert_eq!(result.status(), RunStatus::Failed);
        assert_eq!(result.status().to_string(), "failed");
    }
}
