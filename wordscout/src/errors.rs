/// This module defines the error types for wordscout.
///
/// Every failure the library can report is a variant of [`PuzzleError`] and is
/// returned through [`PuzzleResult`]. A word that cannot be found in a grid is
/// *not* an error: it is an empty match list.
///
/// ```rust,ignore
/// match puzzle.coordinates("foo") {
///     Ok(matches) if matches.is_empty() => // Word is absent,
///     Ok(matches) => // Process matches,
///     Err(PuzzleError::EmptyBoard) => // Nothing was generated,
///     Err(e) => // Handle other errors
/// }
/// ```
use std::path::PathBuf;
use thiserror::Error;

/// Result type for puzzle operations
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Errors that can occur while generating or searching a grid of letters
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error(
        "Cannot generate a grid of letters due to invalid \"{height}x{width}\" grid size. \
         It should not contain negative or zero values!"
    )]
    InvalidDimension { height: i64, width: i64 },
    #[error(
        "Cannot generate a grid of letters due to too large \"{height}x{width}\" grid size. \
         It should not hold more than {max_cells} letters!"
    )]
    GridTooLarge {
        height: i64,
        width: i64,
        max_cells: i64,
    },
    #[error("Cannot build a grid as it contains empty rows")]
    EmptyGrid,
    #[error("The board of letters is empty!")]
    EmptyBoard,
    #[error("Specified \"{0}\" grid size value is invalid. It should match \"NxN\" pattern e.g \"10x10\"!")]
    InvalidGridSize(String),
    #[error("Specified \"{0}\" word value is invalid. It should match \"only lowercase letters\" pattern e.g \"foo\"!")]
    InvalidWord(String),
    #[error("\"{0}\" file has invalid suffix, expected \".txt\" or \".log\"")]
    InvalidWordsFile(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Search task failed: {0}")]
    TaskError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PuzzleError {
    pub fn invalid_dimension(height: i64, width: i64) -> Self {
        Self::InvalidDimension { height, width }
    }

    pub fn grid_too_large(height: i64, width: i64, max_cells: i64) -> Self {
        Self::GridTooLarge {
            height,
            width,
            max_cells,
        }
    }

    pub fn invalid_grid_size(size: impl Into<String>) -> Self {
        Self::InvalidGridSize(size.into())
    }

    pub fn invalid_word(word: impl Into<String>) -> Self {
        Self::InvalidWord(word.into())
    }

    pub fn invalid_words_file(path: impl Into<PathBuf>) -> Self {
        Self::InvalidWordsFile(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn task_error(msg: impl Into<String>) -> Self {
        Self::TaskError(msg.into())
    }
}
