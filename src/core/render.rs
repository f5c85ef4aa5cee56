//! Human-readable rendering of arbitrary values
//!
//! Strings pass through unchanged and errors reduce to their display message;
//! everything else gets a deep structural rendering with a recursion depth cap
//! and ancestor tracking so cyclic data terminates.

use super::inspect;
use super::value::LogValue;

/// Sentinel substituted for a container back-edge during traversal.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// Recursion cap for deep rendering; bounds worst-case output size.
const MAX_DEPTH: usize = 10;

/// Render a value for text-mode output.
pub fn render(value: &LogValue) -> String {
    match value {
        LogValue::String(s) => s.clone(),
        LogValue::Error(cell) => inspect::display_message(&cell.read()),
        other => {
            let mut ancestors = Vec::new();
            render_deep(other, 0, &mut ancestors)
        }
    }
}

fn render_deep(value: &LogValue, depth: usize, ancestors: &mut Vec<usize>) -> String {
    match value {
        LogValue::Null => "null".to_string(),
        LogValue::Bool(b) => b.to_string(),
        LogValue::Int(i) => i.to_string(),
        LogValue::Float(f) => render_float(*f),
        // Nested strings are quoted so `{ name: "John" }` reads unambiguously
        LogValue::String(s) => format!("{:?}", s),
        LogValue::Error(cell) => inspect::display_message(&cell.read()),
        LogValue::Array(cell) => {
            let id = value.cell_id().unwrap_or_default();
            if ancestors.contains(&id) {
                return CIRCULAR_MARKER.to_string();
            }
            if depth >= MAX_DEPTH {
                return "[...]".to_string();
            }
            let items = cell.read();
            if items.is_empty() {
                return "[]".to_string();
            }
            ancestors.push(id);
            let inner = items
                .iter()
                .map(|item| render_deep(item, depth + 1, ancestors))
                .collect::<Vec<_>>()
                .join(", ");
            ancestors.pop();
            format!("[ {} ]", inner)
        }
        LogValue::Map(cell) => {
            let id = value.cell_id().unwrap_or_default();
            if ancestors.contains(&id) {
                return CIRCULAR_MARKER.to_string();
            }
            if depth >= MAX_DEPTH {
                return "{...}".to_string();
            }
            let entries = cell.read();
            if entries.is_empty() {
                return "{}".to_string();
            }
            ancestors.push(id);
            let inner = entries
                .iter()
                .map(|(key, item)| format!("{}: {}", key, render_deep(item, depth + 1, ancestors)))
                .collect::<Vec<_>>()
                .join(", ");
            ancestors.pop();
            format!("{{ {} }}", inner)
        }
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        f.to_string()
    }
}
