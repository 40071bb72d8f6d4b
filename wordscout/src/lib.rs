pub mod config;
pub mod errors;
pub mod grid;
pub mod input;
pub mod metrics;
pub mod properties;
pub mod results;
pub mod search;

pub use config::{CliOverrides, ExecutionMode, PuzzleConfig};
pub use errors::{PuzzleError, PuzzleResult};
pub use grid::{Grid, GridContent, GridSession, RandomWordsGrid};
pub use properties::{Coordinate, GridSize, LetterCoordinates};
pub use results::{MatchResult, PuzzleReport, WordReport};
pub use search::{
    start_word_search_puzzle, start_words_search_puzzle, HiddenWord, HiddenWords, SearchPuzzle,
    SearchWordPuzzle,
};
