use tracing::{info, trace};

use crate::errors::{PuzzleError, PuzzleResult};
use crate::properties::{Coordinate, LetterCoordinates};

/// Rows of a grid, as generated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridContent {
    rows: Vec<String>,
}

impl GridContent {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indexes every letter of the grid by its coordinates.
    ///
    /// `x_axis` is the row index and `y_axis` the column index, both scanned
    /// in row-major order, so `["aa", "bb"]` gives
    /// `{a: [(0,0), (0,1)], b: [(1,0), (1,1)]}`.
    pub fn to_coordinates(&self) -> PuzzleResult<LetterCoordinates> {
        if self.rows.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut board = LetterCoordinates::new();
        for (row_index, row) in self.rows.iter().enumerate() {
            for (column_index, letter) in row.chars().enumerate() {
                board.insert(
                    letter,
                    Coordinate::new(row_index as i64, column_index as i64),
                );
            }
        }
        trace!(
            "Indexed {} distinct letters from {} rows",
            board.len(),
            self.rows.len()
        );
        Ok(board)
    }

    /// Joins the rows with newlines
    pub fn render(&self) -> PuzzleResult<String> {
        if self.rows.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }
        let content = self.rows.join("\n");
        info!("The following grid of letters is generated\n{}", content);
        Ok(content)
    }
}
