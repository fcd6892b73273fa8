//! # 命令执行模块
//!
//! 串联一次完整运行：加载配置 → 解析脚本 → 顺序执行 → 写出报告。
//! 七种文件操作的实现也位于本模块下。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `batch/`, `report/`, `utils/`
//! - 子模块: factory, move_last, categorize, count, delete, rename, list_all, sort

pub mod categorize;
pub mod count;
pub mod delete;
pub mod factory;
pub mod list_all;
pub mod move_last;
pub mod rename;
pub mod sort;

use crate::batch::BatchRunner;
use crate::cli::Cli;
use crate::error::Result;
use crate::models::{Config, ExecutionResult, RunStatus};
use crate::parsers::ScriptParser;
use crate::report::{ReportSummary, ResultReporter};
use crate::utils::logger::{LogLevel, RunLog};
use crate::utils::output;

use factory::CommandFactory;
use tabled::{Table, Tabled};

/// 结果汇总表行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Command")]
    label: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Result")]
    result: String,
}

/// 执行一次完整运行
pub fn run(cli: Cli) -> Result<ReportSummary> {
    output::print_header("fsbatch");

    let config = Config::load(&cli.config)?;
    output::print_info(&format!("Loaded configuration from '{}'", cli.config.display()));

    let log = RunLog::new();
    let factory = CommandFactory::new(&config.threshold_size)?;
    log.debug(format!(
        "Categorize threshold: {} bytes",
        factory.threshold_bytes()
    ));

    let commands = ScriptParser::new(&factory).parse_file(&cli.input, &log)?;
    output::print_info(&format!(
        "Parsed {} command(s) from '{}'",
        commands.len(),
        cli.input.display()
    ));
    if let Some(max) = config.max_commands {
        if commands.len() > max {
            output::print_warning(&format!(
                "Only the first {} of {} command(s) will run (Max_commands)",
                max,
                commands.len()
            ));
        }
    }

    let result = BatchRunner::new(config.max_commands).run(&commands, &log);

    let rows: Vec<ResultRow> = result
        .iter()
        .zip(commands.iter())
        .map(|(outcome, command)| ResultRow {
            label: outcome.label(),
            description: command.to_string(),
            result: if outcome.success { "passed" } else { "failed" }.to_string(),
        })
        .collect();
    if !result.is_empty() {
        println!("{}", Table::new(&rows));
    }

    let summary =
        ResultReporter::new(&config, &cli.output_dir).report(&result, &cli.output, &log)?;
    print_summary(&result, &summary, &log);

    Ok(summary)
}

fn print_summary(result: &ExecutionResult, summary: &ReportSummary, log: &RunLog) {
    let warnings = log.count(LogLevel::Warning);
    let errors = log.count(LogLevel::Error);
    if warnings + errors > 0 {
        output::print_warning(&format!(
            "{} warning(s), {} error(s) recorded",
            warnings, errors
        ));
    }

    let message = format!(
        "{}/{} command(s) succeeded, report written to '{}'",
        result.passed_count(),
        result.len(),
        summary.path.display()
    );
    match summary.status {
        RunStatus::Passed => output::print_done(&message),
        RunStatus::Failed => output::print_error(&message),
    }
}
