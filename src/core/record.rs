//! JSON record building and cycle-safe encoding
//!
//! A record is a flat `serde_json::Map` in fixed key order (the crate enables
//! serde_json's `preserve_order` feature). Encoding tracks the chain of open
//! container ancestors by cell identity: a back-edge to an open ancestor is
//! replaced with the `"[Circular]"` marker, while repeated references that are
//! siblings encode in full.

use super::inspect;
use super::log_level::LogLevel;
use super::render::CIRCULAR_MARKER;
use super::stack;
use super::value::LogValue;
use chrono::Utc;
use serde_json::{Map, Number, Value};

/// Timestamp layout shared by text and JSON output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Elapsed-duration context a timer supplies alongside an emit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationContext {
    pub formatted: String,
    pub millis: u64,
}

/// Build a record for one log call. The timestamp is generated here; severe
/// levels additionally carry serialized errors and the call-site stack.
pub fn build_record(
    level: LogLevel,
    message: &LogValue,
    args: &[LogValue],
    module: Option<&str>,
    duration: Option<&DurationContext>,
) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert(
        "timestamp".to_string(),
        Value::String(Utc::now().format(TIMESTAMP_FORMAT).to_string()),
    );
    record.insert(
        "level".to_string(),
        Value::String(level.name().to_string()),
    );
    record.insert("message".to_string(), encode_value(message));

    if let Some(label) = module.filter(|label| !label.is_empty()) {
        record.insert("module".to_string(), Value::String(label.to_string()));
    }
    if !args.is_empty() {
        record.insert(
            "args".to_string(),
            Value::Array(args.iter().map(encode_value).collect()),
        );
    }
    if let Some(ctx) = duration {
        record.insert(
            "duration".to_string(),
            Value::String(ctx.formatted.clone()),
        );
        record.insert("durationMs".to_string(), Value::Number(ctx.millis.into()));
    }

    if level.is_severe() {
        let errors: Vec<Value> = std::iter::once(message)
            .chain(args.iter())
            .filter_map(LogValue::as_error)
            .map(|cell| {
                serde_json::to_value(inspect::serialize_error(cell)).unwrap_or(Value::Null)
            })
            .collect();
        record.insert("errors".to_string(), Value::Array(errors));
        record.insert(
            "nativeStack".to_string(),
            Value::Array(
                stack::capture_native_stack()
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
        );
    }

    record
}

/// Serialize a record to one line of JSON.
pub fn stringify(record: &Map<String, Value>) -> String {
    serde_json::to_string(record).unwrap_or_default()
}

/// Encode a value to JSON with ancestor-stack cycle protection.
pub fn encode_value(value: &LogValue) -> Value {
    let mut ancestors = Vec::new();
    encode(value, &mut ancestors)
}

fn encode(value: &LogValue, ancestors: &mut Vec<usize>) -> Value {
    match value {
        LogValue::Null => Value::Null,
        LogValue::Bool(b) => Value::Bool(*b),
        LogValue::Int(i) => Value::Number((*i).into()),
        LogValue::Float(f) => encode_float(*f),
        LogValue::String(s) => Value::String(s.clone()),
        LogValue::Error(cell) => {
            serde_json::to_value(inspect::serialize_error(cell)).unwrap_or(Value::Null)
        }
        LogValue::Array(cell) => {
            let id = value.cell_id().unwrap_or_default();
            if ancestors.contains(&id) {
                return Value::String(CIRCULAR_MARKER.to_string());
            }
            ancestors.push(id);
            let encoded = cell
                .read()
                .iter()
                .map(|item| encode(item, ancestors))
                .collect();
            ancestors.pop();
            Value::Array(encoded)
        }
        LogValue::Map(cell) => {
            let id = value.cell_id().unwrap_or_default();
            if ancestors.contains(&id) {
                return Value::String(CIRCULAR_MARKER.to_string());
            }
            ancestors.push(id);
            let mut object = Map::new();
            for (key, item) in cell.read().iter() {
                object.insert(key.clone(), encode(item, ancestors));
            }
            ancestors.pop();
            Value::Object(object)
        }
    }
}

fn encode_float(f: f64) -> Value {
    if f.is_finite() {
        Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string()))
    } else if f.is_nan() {
        Value::String("NaN".to_string())
    } else if f > 0.0 {
        Value::String("Infinity".to_string())
    } else {
        Value::String("-Infinity".to_string())
    }
}
