//! # 脚本解析器
//!
//! 逐行读取命令脚本，按 POSIX shell 规则分词，交给 `CommandFactory` 构造命令。
//!
//! ## 格式
//! ```text
//! Count ./inbox
//! Rename "old report.txt" "new report.txt" ./docs
//! Sort ./docs size
//! ```
//! - 每行一条命令，第一个词为命令名，其余为参数
//! - 空行跳过（记录警告）
//! - 无法分词、未知命令或参数错误的行跳过（记录错误），不中断解析
//! - 不支持 `#` 注释
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `commands/factory.rs`
//! - 使用 `shell-words` 分词

use crate::commands::factory::CommandFactory;
use crate::error::{FsBatchError, Result};
use crate::models::Command;
use crate::utils::logger::RunLog;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 分词后的一行脚本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 从 1 开始的行号
    pub line_no: usize,
    pub command_name: String,
    pub args: Vec<String>,
}

impl ScriptLine {
    /// 分词；空行返回 Ok(None)
    pub fn tokenize(line_no: usize, line: &str) -> std::result::Result<Option<Self>, String> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let mut words =
            shell_words::split(&escape_word_hashes(line)).map_err(|e| e.to_string())?;
        if words.is_empty() {
            return Ok(None);
        }

        let command_name = words.remove(0);
        Ok(Some(Self {
            line_no,
            command_name,
            args: words,
        }))
    }
}

/// 给未加引号、位于词首的 `#` 加反斜杠
///
/// `shell-words` 会把词首的 `#` 当作注释开始，而脚本格式中 `#` 只是普通字符。
fn escape_word_hashes(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q && !(q == '"' && prev == Some('\\')) => quote = None,
            Some(_) => {}
            None if prev == Some('\\') => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '#' && prev.map_or(true, char::is_whitespace) => escaped.push('\\'),
            None => {}
        }
        escaped.push(c);
        // 连续两个反斜杠互相抵消
        prev = if prev == Some('\\') && c == '\\' { None } else { Some(c) };
    }

    escaped
}

/// 脚本解析器
pub struct ScriptParser<'a> {
    factory: &'a CommandFactory,
}

impl<'a> ScriptParser<'a> {
    pub fn new(factory: &'a CommandFactory) -> Self {
        Self { factory }
    }

    /// 解析脚本文件；文件无法打开或读取时返回错误
    pub fn parse_file(&self, path: &Path, log: &RunLog) -> Result<Vec<Command>> {
        let read_error = |source: std::io::Error| FsBatchError::FileReadError {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(read_error)?;

        let commands = self.parse_lines(lines.iter().map(String::as_str), log);
        log.info(format!(
            "Parsed {} command(s) from '{}'",
            commands.len(),
            path.display()
        ));
        Ok(commands)
    }

    /// 解析若干行脚本，跳过无效行
    pub fn parse_lines<'l>(
        &self,
        lines: impl IntoIterator<Item = &'l str>,
        log: &RunLog,
    ) -> Vec<Command> {
        let mut commands = Vec::new();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line_no = idx + 1;

            let script_line = match ScriptLine::tokenize(line_no, raw) {
                Ok(Some(script_line)) => script_line,
                Ok(None) => {
                    log.warn(format!("Line {}: empty line skipped", line_no));
                    continue;
                }
                Err(e) => {
                    log.error(format!("Line {}: cannot tokenize '{}': {}", line_no, raw, e));
                    continue;
                }
            };

            match self
                .factory
                .create_command(&script_line.command_name, &script_line.args)
            {
                Ok(command) => {
                    log.debug(format!(
                        "Line {}: {} with {} argument(s)",
                        line_no,
                        command.name(),
                        script_line.args.len()
                    ));
                    commands.push(command);
                }
                Err(e) => {
                    log.error(format!("Line {}: {}", script_line.line_no, e));
                }
            }
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::LogLevel;
    use std::path::PathBuf;

    fn factory() -> CommandFactory {
        CommandFactory::new("1KB").unwrap()
    }

    #[test]
    fn test_tokenize_quoted_arguments() {
        let line = ScriptLine::tokenize(3, r#"Rename "old name.txt" 'new name.txt' my\ docs"#)
            .unwrap()
            .unwrap();
        assert_eq!(line.line_no, 3);
        assert_eq!(line.command_name, "Rename");
        assert_eq!(line.args, vec!["old name.txt", "new name.txt", "my docs"]);
    }

    #[test]
    fn test_tokenize_blank_and_unbalanced() {
        assert_eq!(ScriptLine::tokenize(1, "   \t").unwrap(), None);
        assert!(ScriptLine::tokenize(2, r#"Count "unterminated"#).is_err());
    }

    #[test]
    fn test_unknown_command_line_is_skipped() {
        let factory = factory();
        let parser = ScriptParser::new(&factory);
        let log = RunLog::new();

        let commands = parser.parse_lines(["Count a", "Launch rockets", "ListAll b"], &log);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], Command::Count { dir: PathBuf::from("a") });
        assert_eq!(commands[1], Command::ListAll { dir: PathBuf::from("b") });
        assert_eq!(log.count(LogLevel::Error), 1);
    }

    #[test]
    fn test_bad_lines_never_abort() {
        let factory = factory();
        let parser = ScriptParser::new(&factory);
        let log = RunLog::new();

        let lines = [
            "",
            "Rename only_two args",
            "Sort dir sideways",
            "Delete 'unbalanced dir",
            "Count ok",
        ];
        let commands = parser.parse_lines(lines, &log);
        assert_eq!(commands, vec![Command::Count { dir: PathBuf::from("ok") }]);
        assert_eq!(log.count(LogLevel::Warning), 1);
        assert_eq!(log.count(LogLevel::Error), 3);
    }

    #[test]
    fn test_hash_is_not_a_comment() {
        let factory = factory();
        let parser = ScriptParser::new(&factory);
        let log = RunLog::new();

        // 以 `#` 开头的行被当作命令名，因此是未知命令
        let commands = parser.parse_lines(["# Count a"], &log);
        assert!(commands.is_empty());
        assert_eq!(log.count(LogLevel::Error), 1);

        let commands = parser.parse_lines(["Delete #draft.txt notes"], &log);
        assert_eq!(
            commands,
            vec![Command::Delete {
                filename: "#draft.txt".into(),
                dir: PathBuf::from("notes"),
            }]
        );
    }

    #[test]
    fn test_escape_word_hashes() {
        assert_eq!(escape_word_hashes("# a"), "\\# a");
        assert_eq!(escape_word_hashes("a b#c"), "a b#c");
        assert_eq!(escape_word_hashes("a '#x' \"#y\""), "a '#x' \"#y\"");
        assert_eq!(escape_word_hashes("a \\#b"), "a \\#b");
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script.txt");
        std::fs::write(&script, "Count a\n\nUnknown x\nSort b name\n").unwrap();

        let factory = factory();
        let log = RunLog::new();
        let commands = ScriptParser::new(&factory).parse_file(&script, &log).unwrap();
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_parse_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let factory = factory();
        let log = RunLog::new();
        let result = ScriptParser::new(&factory).parse_file(&dir.path().join("none.txt"), &log);
        assert!(matches!(result, Err(FsBatchError::FileReadError { .. })));
    }
}
