//! Task Converter Port
//!
//! Turns a container-composition file into a provider-native task
//! definition. The conversion is deterministic for a given input, so
//! failures are never retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::TaskDefinition;

/// Error kinds a converter can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// Input unreadable, tool unavailable or tool exited non-zero
    ConversionFailure,
    /// Tool succeeded but its output is not a task definition
    MalformedOutput,
}

/// Error during conversion
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The composition file could not be read
    #[error("cannot read composition file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The converter process could not be started
    #[error("converter '{program}' could not be started: {message}")]
    Unavailable { program: String, message: String },

    /// The converter process exited non-zero
    #[error("converter '{program}' failed ({status}): {stderr}")]
    ConversionFailure {
        program: String,
        status: String,
        stderr: String,
    },

    /// The converter output is not a well-formed task definition
    #[error("converter output is not a task definition: {message}")]
    MalformedOutput { message: String },
}

impl ConversionError {
    pub fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::MalformedOutput { .. } => ConversionErrorKind::MalformedOutput,
            Self::Unreadable { .. } | Self::Unavailable { .. } | Self::ConversionFailure { .. } => {
                ConversionErrorKind::ConversionFailure
            }
        }
    }
}

/// Converts a composition file to a task definition
pub trait TaskConverter {
    fn convert(&self, path: &Path) -> Result<TaskDefinition, ConversionError>;
}
