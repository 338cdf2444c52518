//parser/parsers.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::FieldError;

// `(length=12):` from `ltp`: fixed 8-char prefix, the integer, fixed 2-char suffix
static DEPTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{8}([+-]?[0-9]+).{2}$").unwrap());

/// Splits a report into lines, ending a line at `\r\n`, `\n` or a lone `\r`.
pub fn report_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Extracts the logic depth embedded in the last token of a `topological` line.
pub fn parse_depth_token(token: &str) -> Result<i64, FieldError> {
    DEPTH_TOKEN
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .ok_or_else(|| FieldError::Depth(token.to_string()))
}

pub fn parse_transistor_count(token: &str) -> Result<i64, FieldError> {
    token
        .parse()
        .map_err(|_| FieldError::TransistorCount(token.to_string()))
}

/// Gate counts are occurrence counts but may be written as reals.
pub fn parse_gate_count(token: &str) -> Result<f64, FieldError> {
    match token.parse::<f64>() {
        Ok(count) if count.is_finite() => Ok(count),
        _ => Err(FieldError::GateCount(token.to_string())),
    }
}
