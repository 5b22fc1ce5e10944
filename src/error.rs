//! Crate-level error types.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// A required collaborator (renderer, mount point) was not supplied.
    /// Initialization does not attempt a partial start.
    MissingCollaborator(&'static str),
    /// A section record is unusable (duplicate id, bad radius).
    InvalidSection(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCollaborator(what) => {
                write!(f, "missing collaborator: {what}")
            }
            Self::InvalidSection(msg) => {
                write!(f, "invalid section: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A visual asset that could not be loaded.
///
/// Never fatal: the affected object keeps its flat fallback colour for the
/// rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetError {
    /// Asset path as requested.
    pub path: String,
    /// Human-readable cause.
    pub reason: String,
}

impl AssetError {
    /// Build an error for `path`.
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load '{}': {}", self.path, self.reason)
    }
}

impl std::error::Error for AssetError {}
