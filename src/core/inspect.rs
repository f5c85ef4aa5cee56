//! Error inspection: display messages, cause chains, and structured records
//!
//! Cause chains are walked iteratively with a visited set keyed on cell
//! identity, so self-referencing and mutually-referencing errors terminate.

use super::value::{ErrorValue, LogValue, SharedError};
use serde::Serialize;
use std::sync::Arc;

/// Display message for an error: the message if non-empty, else the name if
/// non-empty, else the literal "Error".
pub fn display_message(err: &ErrorValue) -> String {
    if !err.message.is_empty() {
        err.message.clone()
    } else if !err.name.is_empty() {
        err.name.clone()
    } else {
        "Error".to_string()
    }
}

/// Walk the cause chain starting from `root.cause`, visiting each cell at
/// most once. The root itself counts as visited, so a self-cause yields an
/// empty chain and `A -> B -> A` yields exactly `[B]`. A cause that is not
/// error-like ends the chain.
pub fn cause_chain(root: &SharedError) -> Vec<SharedError> {
    let mut seen = vec![Arc::as_ptr(root) as usize];
    let mut chain = Vec::new();

    let mut current = root.read().cause.clone();
    loop {
        let cell = match current {
            Some(LogValue::Error(cell)) => cell,
            _ => break,
        };
        let id = Arc::as_ptr(&cell) as usize;
        if seen.contains(&id) {
            break;
        }
        seen.push(id);
        current = cell.read().cause.clone();
        chain.push(cell);
    }
    chain
}

/// Structured, tree-shaped view of an error and its flattened cause chain.
/// Cause entries never carry nested causes; the chain walk already
/// flattened them.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub name: String,
    pub message: String,
    pub stack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causes: Option<Vec<ErrorRecord>>,
}

impl ErrorRecord {
    fn shallow(err: &ErrorValue) -> Self {
        Self {
            name: if err.name.is_empty() {
                "Error".to_string()
            } else {
                err.name.clone()
            },
            message: display_message(err),
            stack: err.stack.join("\n"),
            causes: None,
        }
    }
}

/// Serialize an error plus its cause chain into an [`ErrorRecord`].
pub fn serialize_error(root: &SharedError) -> ErrorRecord {
    let chain = cause_chain(root);
    let mut record = ErrorRecord::shallow(&root.read());
    if !chain.is_empty() {
        record.causes = Some(
            chain
                .iter()
                .map(|cell| ErrorRecord::shallow(&cell.read()))
                .collect(),
        );
    }
    record
}
