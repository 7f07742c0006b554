//! Shared test utilities for the buildpack diagnostics workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`dir`] — [`TestDir`] scratch directory for persisted files
//! - [`sink`] — in-memory log sinks that tests can read back
//! - [`toml`] — semantic TOML comparison

pub mod dir;
pub mod sink;
pub mod toml;

pub use dir::TestDir;
pub use sink::{SharedBuffer, shared_buffer};
pub use self::toml::assert_toml_eq;
