//! Display formatters for identities and launch-time configuration hints

use crate::style::Emphasis;

/// Render a name with strong emphasis, optionally followed by a description.
///
/// An empty description renders the name alone.
pub fn render_identity(style: &dyn Emphasis, name: &str, description: &str) -> String {
    let name = style.strong(name);
    if description.is_empty() {
        name
    } else {
        format!("{name} {description}")
    }
}

/// Render the standard hint for an environment variable and its default.
///
/// The variable name is inserted verbatim after a `$`.
pub fn render_env_default(style: &dyn Emphasis, env_var: &str, default: &str) -> String {
    format!(
        "Set ${env_var} to configure. Default {}.",
        style.soft(default)
    )
}

/// A name and optional description, e.g. a buildpack and its version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFormatter {
    pub name: String,
    pub description: String,
}

impl IdentityFormatter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn render(&self, style: &dyn Emphasis) -> String {
        render_identity(style, &self.name, &self.description)
    }
}

/// An environment variable that configures launch behaviour, and its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfigFormatter {
    pub name: String,
    pub default: String,
}

impl LaunchConfigFormatter {
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }

    pub fn render(&self, style: &dyn Emphasis) -> String {
        render_env_default(style, &self.name, &self.default)
    }
}
