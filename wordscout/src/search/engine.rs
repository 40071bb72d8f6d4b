use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::{PuzzleError, PuzzleResult};
use crate::metrics::SearchMetrics;
use crate::properties::{Coordinate, LetterCoordinates};
use crate::results::MatchResult;

/// A puzzle able to locate items in a board of letters
pub trait SearchPuzzle {
    /// Starting and ending coordinates of every occurrence of `item`
    fn coordinates(&self, item: &str) -> PuzzleResult<Vec<MatchResult>>;

    /// Name of the puzzle
    fn name(&self) -> &'static str;
}

/// Searches a grid of letters (a-z only) for words.
///
/// Words can be found along any diagonal, forwards, upwards, downwards or
/// backwards, and never wrap between edges.
#[derive(Debug, Clone)]
pub struct SearchWordPuzzle {
    board: Arc<LetterCoordinates>,
    metrics: SearchMetrics,
}

impl SearchWordPuzzle {
    /// Every direction a word may run in, tried in this order
    pub const MOVEMENT_COORDINATES: [Coordinate; 8] = [
        Coordinate::new(1, 0),
        Coordinate::new(0, 1),
        Coordinate::new(-1, 0),
        Coordinate::new(0, -1),
        Coordinate::new(-1, -1),
        Coordinate::new(1, 1),
        Coordinate::new(-1, 1),
        Coordinate::new(1, -1),
    ];

    pub fn new(board: Arc<LetterCoordinates>) -> Self {
        Self::with_metrics(board, SearchMetrics::new())
    }

    /// Creates a puzzle reporting into shared metrics
    pub fn with_metrics(board: Arc<LetterCoordinates>, metrics: SearchMetrics) -> Self {
        Self { board, metrics }
    }
}

impl SearchPuzzle for SearchWordPuzzle {
    /// Matches are reported in discovery order: start cells in board order,
    /// then directions in [`Self::MOVEMENT_COORDINATES`] order. Overlapping
    /// matches are all kept, so a single-letter word matches eight times per
    /// occurrence.
    fn coordinates(&self, item: &str) -> PuzzleResult<Vec<MatchResult>> {
        if self.board.is_empty() {
            return Err(PuzzleError::EmptyBoard);
        }
        let letters: Vec<char> = item.chars().collect();
        let (&first_letter, next_letters) = letters
            .split_first()
            .ok_or_else(|| PuzzleError::invalid_word(item))?;

        info!("Searching for \"{}\" word in a grid of letters ...", item);
        if let Some(missing) = letters.iter().find(|&&l| !self.board.contains_letter(l)) {
            warn!(
                "Cannot find coordinates for \"{}\" word as the board does not contain \"{}\" letter",
                item, missing
            );
            self.metrics.record_word(0);
            return Ok(Vec::new());
        }

        let start_cells = self.board.get(first_letter).unwrap_or_default();
        let mut probes = 0u64;
        let mut word_coordinates = Vec::new();

        for &first_coordinate in start_cells {
            for &movement in Self::MOVEMENT_COORDINATES.iter() {
                let mut probe = first_coordinate;
                let found = next_letters.iter().all(|&next_letter| {
                    probe = probe + movement;
                    probes += 1;
                    self.board.contains(next_letter, probe)
                });
                if found {
                    debug!(
                        "Found \"{}\" word at: {}; {}",
                        item, first_coordinate, probe
                    );
                    word_coordinates.push(MatchResult::new(first_coordinate, probe));
                }
            }
        }

        self.metrics.record_probes(start_cells.len() as u64, probes);
        self.metrics.record_word(word_coordinates.len());
        Ok(word_coordinates)
    }

    fn name(&self) -> &'static str {
        "SearchWordPuzzle"
    }
}
