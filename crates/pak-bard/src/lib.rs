//! Status-line formatting and logging for buildpack tooling
//!
//! Renders names and configuration hints with consistent emphasis and writes
//! indented diagnostic lines to a caller-owned sink.

pub mod formatter;
pub mod logger;
pub mod style;

pub use formatter::{
    IdentityFormatter, LaunchConfigFormatter, render_env_default, render_identity,
};
pub use logger::{Logger, Sink};
pub use style::{Colored, Emphasis, Plain, Styling};
