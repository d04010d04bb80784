//! Replay error taxonomy.
//!
//! Numeric anomalies inside the model are not errors: they surface as
//! NaN/∞ in the outputs. Only I/O, malformed log text and configuration
//! problems end a run.

use std::path::PathBuf;

use orca_common::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    /// Reading the log or writing a report failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field the replay needs is not a number.
    #[error("log line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log has no depth samples to replay.
    #[error("log contains no depth samples")]
    EmptyLog,
}

impl ReplayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
