//! Line-oriented logger over a caller-owned sink
//!
//! Every method appends whole, newline-terminated lines. The sink is shared
//! with the caller, which keeps its own handle to read or close it.

use crate::formatter::render_identity;
use crate::style::Styling;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Append-only destination for diagnostic lines.
///
/// `Arc<Mutex<Vec<u8>>>` and `Arc<Mutex<std::fs::File>>` coerce to this type.
pub type Sink = Arc<Mutex<dyn Write + Send>>;

const HEADER_INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";

/// Writes indented status lines in the buildpack "bard" layout.
#[derive(Clone)]
pub struct Logger {
    info: Sink,
    debug: Option<Sink>,
    styling: Styling,
}

impl Logger {
    /// Create a logger with default (terminal) styling and debug disabled.
    pub fn new(sink: Sink) -> Self {
        Self::with_styling(sink, Styling::default())
    }

    pub fn with_styling(sink: Sink, styling: Styling) -> Self {
        Self {
            info: sink,
            debug: None,
            styling,
        }
    }

    /// Enable the debug stream.
    pub fn with_debug(mut self, sink: Sink) -> Self {
        self.debug = Some(sink);
        self
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug.is_some()
    }

    pub fn styling(&self) -> &Styling {
        &self.styling
    }

    /// Unindented line.
    pub fn info(&self, message: impl fmt::Display) -> io::Result<()> {
        append(&self.info, &format!("{message}\n"))
    }

    /// Section header, indented two spaces.
    pub fn header(&self, message: impl fmt::Display) -> io::Result<()> {
        append(&self.info, &format!("{HEADER_INDENT}{message}\n"))
    }

    /// Detail lines, each indented four spaces. Blank lines stay blank.
    pub fn body(&self, message: impl fmt::Display) -> io::Result<()> {
        let message = message.to_string();
        let mut out = String::with_capacity(message.len() + BODY_INDENT.len());
        for line in message.lines() {
            if !line.is_empty() {
                out.push_str(BODY_INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }
        if out.is_empty() {
            out.push('\n');
        }
        append(&self.info, &out)
    }

    /// Blank line followed by the emphasized name and version.
    pub fn title(&self, name: &str, version: &str) -> io::Result<()> {
        let identity = render_identity(&self.styling, name, version);
        append(&self.info, &format!("\n{identity}\n"))
    }

    /// Line on the debug stream. Dropped when debug is disabled.
    pub fn debug(&self, message: impl fmt::Display) -> io::Result<()> {
        match &self.debug {
            Some(sink) => append(sink, &format!("{message}\n")),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("debug", &self.is_debug_enabled())
            .field("styling", &self.styling)
            .finish()
    }
}

fn append(sink: &Sink, text: &str) -> io::Result<()> {
    tracing::trace!(line = %text.trim_end(), "bard");
    // A panic in another writer must not silence diagnostics.
    let mut guard = sink.lock().unwrap_or_else(PoisonError::into_inner);
    guard.write_all(text.as_bytes())?;
    guard.flush()
}
