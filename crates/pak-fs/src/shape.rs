//! Structural classification of persisted documents
//!
//! A document is recognised by the fields it exposes once serialized, not by
//! its Rust type, so hand-built tables and typed descriptors classify alike.

use toml::{Table, Value};

/// Payload categories that warrant a diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Non-empty `slices` array.
    Launch { slices: usize },
    /// Non-empty `metadata` table; keys in lexicographic order.
    Store { keys: Vec<String> },
    /// Anything else.
    Plain,
}

impl Shape {
    /// Classify a serialized document. `Launch` takes precedence over `Store`.
    pub fn of(document: &Table) -> Self {
        if let Some(Value::Array(slices)) = document.get("slices") {
            if !slices.is_empty() {
                return Self::Launch {
                    slices: slices.len(),
                };
            }
        }

        if let Some(Value::Table(metadata)) = document.get("metadata") {
            if !metadata.is_empty() {
                let mut keys: Vec<String> = metadata.keys().cloned().collect();
                keys.sort();
                return Self::Store { keys };
            }
        }

        Self::Plain
    }

    /// One-line summary, without indentation or trailing newline.
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Launch { slices } => Some(format!("{slices} application slices")),
            Self::Store { keys } => {
                let keys: Vec<String> = keys.iter().map(|k| printable(k)).collect();
                Some(format!("Writing persistent metadata: {}", keys.join(", ")))
            }
            Self::Plain => None,
        }
    }
}

/// Escape control characters so a quoted key cannot break the summary line.
fn printable(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
