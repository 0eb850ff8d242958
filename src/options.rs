use crate::errors::{CsvBenchError, CsvBenchResult};
use serde_json::{Map, Value};

/// Raw reader options as parsed from the CLI literal, keys left uninterpreted.
pub type OptionsMap = Map<String, Value>;

/// Parse the options argument as a JSON object literal.
///
/// Only a closed grammar of scalars, lists and one top-level mapping is
/// accepted; this is deliberately not a general expression evaluator. Keys are
/// not checked here, so an unrecognized option name still reaches the read
/// step before it is rejected.
pub fn parse_literal(text: &str) -> CsvBenchResult<OptionsMap> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CsvBenchError::ReaderOptionError(format!(
            "options literal must be a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

/// Typed CSV reader settings, converted from an [`OptionsMap`] at read time.
#[derive(Debug, Default, PartialEq)]
pub struct CsvOptions {
    pub separator: Option<u8>,
    pub has_header: Option<bool>,
    pub skip_rows: Option<usize>,
    pub n_rows: Option<usize>,
    pub quote_char: Option<u8>,
    pub comment_prefix: Option<String>,
    pub null_values: Option<Vec<String>>,
    pub low_memory: Option<bool>,
}

impl CsvOptions {
    pub fn from_map(map: &OptionsMap) -> CsvBenchResult<Self> {
        let mut opts = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "sep" | "separator" => opts.separator = Some(single_byte(key, value)?),
                "header" | "has_header" => opts.has_header = Some(boolean(key, value)?),
                "skiprows" | "skip_rows" => opts.skip_rows = Some(unsigned(key, value)?),
                "nrows" | "n_rows" => opts.n_rows = Some(unsigned(key, value)?),
                "quotechar" | "quote_char" => opts.quote_char = Some(single_byte(key, value)?),
                "comment" => opts.comment_prefix = Some(string(key, value)?),
                "null_values" => opts.null_values = Some(string_list(key, value)?),
                "low_memory" => opts.low_memory = Some(boolean(key, value)?),
                _ => {
                    return Err(CsvBenchError::ReaderOptionError(format!(
                        "unrecognized reader option `{key}`"
                    )))
                }
            }
        }
        Ok(opts)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn bad_value(key: &str, expected: &str, value: &Value) -> CsvBenchError {
    CsvBenchError::ReaderOptionError(format!(
        "option `{key}` expects {expected}, got {}",
        type_name(value)
    ))
}

fn single_byte(key: &str, value: &Value) -> CsvBenchResult<u8> {
    let s = value
        .as_str()
        .ok_or_else(|| bad_value(key, "a single-character string", value))?;
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => Err(CsvBenchError::ReaderOptionError(format!(
            "option `{key}` expects a single-character string, got {s:?}"
        ))),
    }
}

fn boolean(key: &str, value: &Value) -> CsvBenchResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| bad_value(key, "a boolean", value))
}

fn unsigned(key: &str, value: &Value) -> CsvBenchResult<usize> {
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| bad_value(key, "a non-negative integer", value))
}

fn string(key: &str, value: &Value) -> CsvBenchResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| bad_value(key, "a string", value))
}

fn string_list(key: &str, value: &Value) -> CsvBenchResult<Vec<String>> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| bad_value(key, "a string or list of strings", item))
            })
            .collect(),
        _ => Err(bad_value(key, "a string or list of strings", value)),
    }
}
