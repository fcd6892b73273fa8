//! # 运行日志
//!
//! 单次运行的显式日志记录器，取代进程级全局日志状态。
//!
//! ## 功能
//! - 记录带时间戳与级别的日志条目
//! - 同步转发到 `log` 门面（控制台由 `env_logger` 输出）
//! - 运行结束时交给报告器写入轮转日志文件
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/script.rs`, `batch/runner.rs`, `report/` 使用
//! - 使用 `log`, `chrono`

use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::fmt;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// 单条日志记录
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// 单次运行的日志记录器
///
/// 运行开始时创建，通过引用传给各组件，运行结束时由报告器消费。
#[derive(Debug, Default)]
pub struct RunLog {
    records: RefCell<Vec<LogRecord>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条日志
    pub fn record(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        let console_level: log::Level = level.into();
        log::log!(target: "fsbatch", console_level, "{}", message);
        self.records.borrow_mut().push(LogRecord {
            timestamp: Local::now(),
            level,
            message,
        });
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.record(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.record(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.record(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.record(LogLevel::Error, message);
    }

    /// 当前所有记录的快照
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    /// 指定级别的记录条数
    pub fn count(&self, level: LogLevel) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.level == level)
            .count()
    }
}

/// 初始化控制台日志（`RUST_LOG` 优先）
pub fn init_console(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
