//! Text form of a single `path: value` line.

use jsoncmp_diff::{canonical_string, normalize_numbers};
use jsoncmp_types::{leaf_key, path_depth};
use serde_json::Value;

/// Spaces of indentation per path segment below the top level.
const INDENT_WIDTH: usize = 2;

/// Render `"key": value` for the last segment of `path`, indented by depth.
///
/// Arrays and objects are pretty-printed over several lines; continuation
/// lines carry the same indentation as the key. The root path renders the
/// value alone.
pub fn format_path_value(path: &str, value: &Value) -> String {
    let depth = path_depth(path);
    let indent = " ".repeat(depth.saturating_sub(1) * INDENT_WIDTH);
    let rendered = format_value(value, &indent);
    if depth == 0 {
        return rendered;
    }
    format!("{indent}\"{}\": {rendered}", leaf_key(path))
}

/// Render a value; `indent` prefixes every line after the first.
pub fn format_value(value: &Value, indent: &str) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape_string(s)),
        Value::Array(_) | Value::Object(_) => {
            let value = normalize_numbers(value);
            let pretty =
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            pretty
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    if i == 0 {
                        line.to_string()
                    } else {
                        format!("{indent}{line}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        scalar => canonical_string(scalar),
    }
}

/// Escape backslash, double quote, newline, carriage return and tab.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
