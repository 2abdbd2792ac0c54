use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid board dimensions: {rows}x{columns} board with {letters} letters")]
    InvalidBoardDimensions {
        rows: usize,
        columns: usize,
        letters: usize,
    },

    #[error("invalid letters: {0}")]
    InvalidLetters(String),

    #[error("invalid word length range: minimum {minimum} is greater than maximum {maximum}")]
    InvalidWordLength { minimum: usize, maximum: usize },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("board file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("dictionary error: {0}")]
    Dictionary(#[from] fst::Error),
}

impl Error {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
