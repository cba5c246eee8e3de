//! Error types for credmenu.
//!
//! Each concern has its own error enum; [`Error`] wraps them so every
//! operation can return a single [`Result`] and propagate with `?`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unable to determine home directory")]
    NoHome,
}

/// Credential file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("malformed store {}: {lines} lines is not a multiple of 3", .path.display())]
    Malformed { path: PathBuf, lines: usize },

    #[error("failed to read store: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write store: {0}")]
    Write(#[source] std::io::Error),
}

/// Errors from the chooser process and its exit-status protocol.
#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("chooser returned unexpected exit status: {0}")]
    ProtocolViolation(i32),

    #[error("chooser was terminated by a signal")]
    Terminated,

    #[error("failed to spawn chooser {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to talk to chooser: {0}")]
    Pipe(#[source] std::io::Error),
}

/// A required external program is not on `$PATH`.
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("cannot find {role} '{program}' in your current $PATH")]
    Missing { role: &'static str, program: String },
}

/// Clipboard and notification collaborator failures.
#[derive(Error, Debug)]
pub enum DesktopError {
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("notification failed: {0}")]
    Notify(String),
}

/// Result type alias for credmenu operations.
pub type Result<T> = std::result::Result<T, Error>;
