//! # 大小字符串解析器
//!
//! 将 "10MB" 之类的可读大小转换为字节数。
//!
//! ## 格式
//! 数值（整数或小数，允许 `.5`、`1.` 这样省略一侧数字）后跟单位 B / KB / MB / GB / TB，大小写不敏感，
//! 单位按 1024 进制换算，结果截断为整数。
//!
//! ## 依赖关系
//! - 被 `commands/factory.rs` 使用
//! - 使用 `regex`

use crate::error::{FsBatchError, Result};

use regex::Regex;
use std::sync::OnceLock;

fn size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*(B|KB|MB|GB|TB)\s*$")
            .expect("size pattern is a valid regex")
    })
}

/// 单位对应的字节倍数
fn unit_multiplier(unit: &str) -> Option<u64> {
    match unit.to_uppercase().as_str() {
        "B" => Some(1),
        "KB" => Some(1024),
        "MB" => Some(1024u64.pow(2)),
        "GB" => Some(1024u64.pow(3)),
        "TB" => Some(1024u64.pow(4)),
        _ => None,
    }
}

/// 解析大小字符串为字节数
pub fn parse_size(input: &str) -> Result<u64> {
    let invalid = || FsBatchError::InvalidSizeFormat(input.to_string());

    let caps = size_pattern().captures(input).ok_or_else(invalid)?;
    let multiplier = unit_multiplier(&caps[2]).ok_or_else(invalid)?;
    let number = &caps[1];

    // 整数走精确路径，避免大数经过 f64 丢失精度
    if let Ok(whole) = number.parse::<u64>() {
        return whole.checked_mul(multiplier).ok_or_else(invalid);
    }

    let value: f64 = number.parse().map_err(|_| invalid())?;
    let bytes = value * multiplier as f64;
    if !bytes.is_finite() || bytes > u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(bytes.trunc() as u64)
}
