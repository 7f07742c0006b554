//! Buildpack payloads persisted as TOML
//!
//! `launch.toml` describes what the application runs; `store.toml` carries
//! metadata retained across builds.

use serde::{Deserialize, Serialize};
use toml::Table;

/// Contents of `launch.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processes: Vec<Process>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slices: Vec<Slice>,
}

/// An image label applied at export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

/// A process type the launcher can start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    #[serde(rename = "type")]
    pub kind: String,

    pub command: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default)]
    pub direct: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}

impl Process {
    pub fn new(kind: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            command: command.into(),
            ..Self::default()
        }
    }
}

/// A group of application files exported as its own image layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Contents of `store.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default, skip_serializing_if = "Table::is_empty")]
    pub metadata: Table,
}

impl Store {
    /// Insert a metadata entry, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<toml::Value>) {
        self.metadata.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_type_field_name() {
        let process = Process::new("web", "java");
        let value = toml::Value::try_from(&process).unwrap();
        let table = value.as_table().unwrap();
        assert_eq!(table.get("type").and_then(|v| v.as_str()), Some("web"));
        assert!(table.get("kind").is_none());
        assert!(table.get("default").is_none());
        assert!(table.get("args").is_none());
    }

    #[test]
    fn test_empty_launch_serializes_to_empty_table() {
        let value = toml::Value::try_from(Launch::default()).unwrap();
        assert!(value.as_table().unwrap().is_empty());
    }

    #[test]
    fn test_store_insert() {
        let mut store = Store::default();
        store.insert("version", "1.2.3");
        store.insert("version", "2.0.0");
        assert_eq!(store.metadata.len(), 1);
        assert_eq!(
            store.metadata.get("version").and_then(|v| v.as_str()),
            Some("2.0.0")
        );
    }
}
