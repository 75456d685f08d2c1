use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parser failure for one sentence
    #[error("Parse failure: {0}")]
    ParseFailure(#[from] inga_cabocha::CabochaError),

    /// Malformed clue list, demonstrative list or settings
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed scoring oracle input
    #[error("Invalid score table at line {line}: {message}")]
    InvalidScores { line: usize, message: String },
}

impl ExtractError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// True for errors that must abort the run before extraction starts
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_) | Self::InvalidScores { .. } | Self::Read { .. }
        )
    }
}
