//! TOML writer with shape-aware diagnostics

use crate::shape::Shape;
use crate::{Error, Result, io};
use pak_bard::Logger;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value as Json;
use std::path::Path;
use toml::{Table, Value};

/// Persists values as TOML files.
///
/// With a logger configured, each successful write of a recognised payload
/// (see [`Shape`]) appends one header line to the logger's sink. Sink failures
/// are reported through `tracing` and never fail the write.
#[derive(Debug, Clone, Default)]
pub struct TomlWriter {
    logger: Option<Logger>,
}

impl TomlWriter {
    /// Create a writer that logs nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(logger: Logger) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    /// Serialize `value` and write it to `path`, creating or truncating the file.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    /// - [`Error::Serialize`] if `value` does not serialize to a TOML table
    /// - [`Error::Io`] if the file cannot be created or written
    pub fn write<T>(&self, path: impl AsRef<Path>, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let path = path.as_ref();
        let document = to_document(path, value)?;
        let content = toml::to_string(&document).map_err(|e| Error::serialize(path, e))?;

        io::write_bytes(path, content.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote TOML");

        self.report(&document);
        Ok(())
    }

    fn report(&self, document: &Table) {
        let Some(logger) = &self.logger else {
            return;
        };
        let Some(summary) = Shape::of(document).summary() else {
            return;
        };
        if let Err(e) = logger.header(&summary) {
            tracing::warn!(error = %e, "Failed to write diagnostic line");
        }
    }
}

/// Read a TOML file back into `T`.
///
/// # Errors
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Parse`] if the content is not valid TOML for `T`
pub fn read_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = io::read_text(path)?;
    toml::from_str(&content).map_err(|e| Error::parse(path, e))
}

fn to_document<T>(path: &Path, value: &T) -> Result<Table>
where
    T: Serialize + ?Sized,
{
    let table = match Value::try_from(value).map_err(|e| Error::serialize(path, e))? {
        Value::Table(table) => table,
        other => {
            return Err(Error::serialize(
                path,
                format!("top-level value must be a table, got {}", other.type_str()),
            ));
        }
    };

    // The TOML encoder skips entries it cannot represent (e.g. `None` inside
    // an array) instead of failing; compare against the full data model.
    let expected = serde_json::to_value(value).map_err(|e| Error::serialize(path, e))?;
    if let Json::Object(fields) = &expected {
        if let Some(location) = dropped_in_table(fields, &table) {
            return Err(Error::serialize(
                path,
                format!("`{}` cannot be represented in TOML", location.join(".")),
            ));
        }
    }

    Ok(table)
}

/// Location of the first non-null entry in `expected` missing from `actual`.
fn dropped_in_table(
    expected: &serde_json::Map<String, Json>,
    actual: &Table,
) -> Option<Vec<String>> {
    expected
        .iter()
        .filter(|(_, value)| !value.is_null())
        .find_map(|(key, value)| match actual.get(key) {
            None => Some(vec![key.clone()]),
            Some(found) => dropped(value, found).map(|mut rest| {
                rest.insert(0, key.clone());
                rest
            }),
        })
}

fn dropped(expected: &Json, actual: &Value) -> Option<Vec<String>> {
    match (expected, actual) {
        (Json::Object(fields), Value::Table(table)) => dropped_in_table(fields, table),
        (Json::Array(items), Value::Array(values)) => {
            if items.len() != values.len() {
                return Some(Vec::new());
            }
            items
                .iter()
                .zip(values)
                .enumerate()
                .find_map(|(index, (item, value))| {
                    dropped(item, value).map(|mut rest| {
                        rest.insert(0, index.to_string());
                        rest
                    })
                })
        }
        _ => None,
    }
}
