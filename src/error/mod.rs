//! Error types and handling infrastructure for bulk replacement runs

use anyhow::Error;
use std::path::PathBuf;

/// Core error kinds for the replacement process
#[derive(Debug, thiserror::Error)]
pub enum ReplaceErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("File too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge {
        size: u64,
        limit: u64,
        path: PathBuf,
    },

    #[error("Root path is not a traversable directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ReplaceErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for replacement operations
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("{kind}")]
    Replace {
        kind: ReplaceErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ReplaceError {
    pub fn replace(kind: ReplaceErrorKind) -> Self {
        Self::Replace { kind, source: None }
    }

    pub fn replace_with_source(kind: ReplaceErrorKind, source: anyhow::Error) -> Self {
        Self::Replace {
            kind,
            source: Some(source),
        }
    }

    /// Wrap an IO failure, keeping the path it happened on.
    pub fn io(error: std::io::Error, path: &std::path::Path) -> Self {
        Self::Replace {
            kind: ReplaceErrorKind::io(error.to_string(), Some(path.to_path_buf())),
            source: Some(error.into()),
        }
    }

    pub fn configuration(message: String) -> Self {
        Self::replace(ReplaceErrorKind::configuration(message))
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Replace { kind, .. } => match kind {
                ReplaceErrorKind::Io { message, .. } => format!("IO error: {}", message),
                ReplaceErrorKind::FileTooLarge { size, limit, .. } => {
                    format!("File too large: {} bytes (limit: {} bytes)", size, limit)
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// Result type for replacement operations
pub type ReplaceResult<T> = Result<T, ReplaceError>;
