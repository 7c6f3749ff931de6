//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/19/2026 - In-place allowlist and truncation inside project()
//! - 10/19/2026 - Char-safe text truncation, project() for per-record filtering
//! - 10/19/2026 - Initial implementation

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    pub fields: Option<String>,
    pub max_text_chars: Option<u32>,
}

impl OutputControls {
    /// Serialize a record and apply the field allowlist and text truncation.
    ///
    /// The allowlist applies to the record itself, or to each element when
    /// the record is an array. Nested objects are kept whole.
    pub fn project<T: Serialize>(&self, data: &T) -> Value {
        let mut value = serde_json::to_value(data).unwrap_or(Value::Null);

        if let Some(ref fields) = self.fields {
            let keep: Vec<&str> = fields.split(',').map(str::trim).filter(|f| !f.is_empty()).collect();
            match value {
                Value::Array(ref mut records) => {
                    for record in records.iter_mut() {
                        retain_keys(record, &keep);
                    }
                }
                ref mut record => retain_keys(record, &keep),
            }
        }

        if let Some(max_chars) = self.max_text_chars {
            truncate_strings(&mut value, max_chars as usize);
        }

        value
    }

    /// Render a value as pretty or compact JSON.
    pub fn render(&self, value: &Value) -> String {
        let rendered = if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        };
        rendered.unwrap_or_else(|_| "null".to_string())
    }

    /// Emit data according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        self.render(&self.project(data))
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }

    /// Shorten text for human-readable output.
    pub fn preview(&self, text: &str) -> String {
        match self.max_text_chars {
            Some(max_chars) => truncate(text, max_chars as usize),
            None => text.to_string(),
        }
    }
}

/// Drop object keys not in the allowlist.
fn retain_keys(record: &mut Value, keep: &[&str]) {
    if let Value::Object(map) = record {
        let kept: serde_json::Map<String, Value> = keep
            .iter()
            .filter_map(|k| map.remove(*k).map(|v| (k.to_string(), v)))
            .collect();
        *map = kept;
    }
}

/// Truncate every string in place, at any depth.
fn truncate_strings(value: &mut Value, max_chars: usize) {
    match value {
        Value::String(s) => *s = truncate(s, max_chars),
        Value::Array(items) => items.iter_mut().for_each(|v| truncate_strings(v, max_chars)),
        Value::Object(map) => map.values_mut().for_each(|v| truncate_strings(v, max_chars)),
        _ => {}
    }
}

/// Truncate on char boundaries, appending "..." when cut.
fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Error body printed to stderr in JSON mode.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    let body = ErrorBody { success: false, error };
    serde_json::to_string(&body).unwrap_or_else(|_| json!({ "success": false }).to_string())
}
