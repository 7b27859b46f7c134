//! Error types for prompter.
//!
//! Uses thiserror for derive macros. Every variant that concerns a file
//! carries its path so the message points at the offending input.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for prompter operations.
#[derive(Error, Debug)]
pub enum PrompterError {
    /// Required input is missing or configuration is invalid.
    #[error("{0}")]
    ConfigurationError(String),

    /// A payload file parsed but does not describe a usable payload.
    #[error("invalid payload '{}': {reason}", path.display())]
    ValidationError { path: PathBuf, reason: String },

    /// A payload or config file is not valid YAML.
    #[error("failed to parse '{}': {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    /// A file or directory could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered output could not be serialized.
    #[error("failed to serialize output: {0}")]
    SerializeError(String),
}

impl PrompterError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PrompterError::IoError {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn validation(path: &Path, reason: impl Into<String>) -> Self {
        PrompterError::ValidationError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrompterError::ConfigurationError(_) => exit_codes::CONFIG_ERROR,
            PrompterError::ValidationError { .. } => exit_codes::PAYLOAD_FAILURE,
            PrompterError::ParseError { .. } => exit_codes::PAYLOAD_FAILURE,
            PrompterError::IoError { .. } => exit_codes::IO_FAILURE,
            PrompterError::SerializeError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for prompter operations.
pub type Result<T> = std::result::Result<T, PrompterError>;
