use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type ShuffleResult<T> = Result<T, ShuffleError>;

#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("missing required tools: {}", .0.join(", "))]
    MissingDependency(Vec<String>),

    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("no clips found in {}", .0.display())]
    NoClipsFound(PathBuf),

    #[error("scene detection failed: {0}")]
    DetectionFailed(String),

    #[error("concatenation failed: {0}")]
    ConcatenationFailed(String),

    #[error("invalid usage: {0}")]
    InvalidUsage(String),

    #[error("interrupted by signal")]
    Interrupted,

    #[error("{context}: {cause}")]
    Io { context: String, cause: io::Error },
}

impl ShuffleError {
    pub fn io(context: impl Into<String>, cause: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            cause,
        }
    }
}
