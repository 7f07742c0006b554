//! TOML persistence with content-aware diagnostics
//!
//! [`TomlWriter`] serializes any value to a TOML file and, when a logger is
//! configured, reports a one-line summary for recognised payload shapes.

pub mod descriptor;
pub mod error;
pub mod io;
pub mod shape;
pub mod writer;

pub use descriptor::{Label, Launch, Process, Slice, Store};
pub use error::{Error, Result};
pub use shape::Shape;
pub use writer::{TomlWriter, read_toml};
