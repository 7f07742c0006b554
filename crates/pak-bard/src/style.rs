//! Emphasis capabilities used by the formatters
//!
//! Rendering code never embeds escape sequences directly. It goes through an
//! [`Emphasis`] implementation chosen once at startup and passed down as a
//! [`Styling`] handle.

use owo_colors::OwoColorize;
use std::fmt;
use std::sync::Arc;

/// Applies "strong" and "soft" emphasis to a piece of text.
pub trait Emphasis: Send + Sync {
    /// Primary weight, used for names and identities.
    fn strong(&self, text: &str) -> String;

    /// Secondary weight, used for call-out values such as defaults.
    fn soft(&self, text: &str) -> String;
}

/// ANSI emphasis: bold for strong, italic for soft.
///
/// Always emits escape sequences; whether to style at all is decided by
/// choosing this over [`Plain`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Colored;

impl Emphasis for Colored {
    fn strong(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn soft(&self, text: &str) -> String {
        text.italic().to_string()
    }
}

/// No-op emphasis for non-terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Emphasis for Plain {
    fn strong(&self, text: &str) -> String {
        text.to_string()
    }

    fn soft(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Shared, cheaply cloneable handle to an [`Emphasis`] implementation.
#[derive(Clone)]
pub struct Styling(Arc<dyn Emphasis>);

impl Styling {
    /// Wrap an arbitrary emphasis implementation.
    pub fn new(emphasis: impl Emphasis + 'static) -> Self {
        Self(Arc::new(emphasis))
    }

    /// Terminal styling.
    pub fn colored() -> Self {
        Self::new(Colored)
    }

    /// Styling disabled.
    pub fn plain() -> Self {
        Self::new(Plain)
    }

    /// Pick styling for an output stream.
    ///
    /// Callers typically pass `std::io::stdout().is_terminal()` once at
    /// process start and thread the result through.
    pub fn detect(is_terminal: bool) -> Self {
        if is_terminal {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for Styling {
    fn default() -> Self {
        Self::colored()
    }
}

impl fmt::Debug for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Styling(..)")
    }
}

impl Emphasis for Styling {
    fn strong(&self, text: &str) -> String {
        self.0.strong(text)
    }

    fn soft(&self, text: &str) -> String {
        self.0.soft(text)
    }
}
