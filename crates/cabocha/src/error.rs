use std::process::ExitStatus;
use thiserror::Error;

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, CabochaError>;

/// Errors raised while obtaining a chunk sequence for one sentence
#[derive(Error, Debug)]
pub enum CabochaError {
    /// IO error while talking to the parser process
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The parser executable could not be started
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The parser exited unsuccessfully
    #[error("Parser exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },

    /// The lattice output could not be read
    #[error("Malformed lattice at line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// A static parser was asked for a sentence it does not know
    #[error("No lattice registered for sentence: {0}")]
    UnknownSentence(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CabochaError {
    /// Create a malformed-lattice error
    pub fn malformed(line: usize, msg: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: msg.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
