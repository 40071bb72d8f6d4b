use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::errors::{PuzzleError, PuzzleResult};

static GRID_SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+)x(-?\d+)$").expect("grid size pattern is valid"));

/// A single point of a grid: `x_axis` is the row, `y_axis` the column.
///
/// Probing may step outside the grid, so negative values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x_axis: i64,
    pub y_axis: i64,
}

impl Coordinate {
    pub const fn new(x_axis: i64, y_axis: i64) -> Self {
        Self { x_axis, y_axis }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x_axis + other.x_axis, self.y_axis + other.y_axis)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(X{}, Y{})", self.x_axis, self.y_axis)
    }
}

/// Height and width of a grid of letters.
///
/// The values are not checked here. A grid refuses to build with a
/// non-positive dimension, see [`GridSize::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridSize {
    pub height: i64,
    pub width: i64,
}

impl GridSize {
    pub const fn new(height: i64, width: i64) -> Self {
        Self { height, width }
    }

    /// Largest number of cells a grid may hold
    pub const MAX_CELLS: i64 = 10_000_000;

    /// Returns the dimensions as `(rows, columns)` if both are strictly positive
    /// and the grid holds at most [`GridSize::MAX_CELLS`] cells
    pub fn validate(&self) -> PuzzleResult<(usize, usize)> {
        if self.height <= 0 || self.width <= 0 {
            return Err(PuzzleError::invalid_dimension(self.height, self.width));
        }
        match self.height.checked_mul(self.width) {
            Some(cells) if cells <= Self::MAX_CELLS => {
                Ok((self.height as usize, self.width as usize))
            }
            _ => Err(PuzzleError::grid_too_large(
                self.height,
                self.width,
                Self::MAX_CELLS,
            )),
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(50, 50)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for GridSize {
    type Err = PuzzleError;

    /// Parses `HxW` text, e.g. `10x15`. Negative numbers are accepted here
    /// and rejected when the grid is built.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = GRID_SIZE_PATTERN
            .captures(s.trim())
            .ok_or_else(|| PuzzleError::invalid_grid_size(s))?;
        let height = captures[1]
            .parse::<i64>()
            .map_err(|_| PuzzleError::invalid_grid_size(s))?;
        let width = captures[2]
            .parse::<i64>()
            .map_err(|_| PuzzleError::invalid_grid_size(s))?;
        Ok(Self::new(height, width))
    }
}

impl TryFrom<String> for GridSize {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GridSize> for String {
    fn from(size: GridSize) -> Self {
        size.to_string()
    }
}

/// Index of a grid: every letter mapped to all coordinates holding it,
/// in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCoordinates {
    positions: HashMap<char, Vec<Coordinate>>,
    cells: HashSet<(char, Coordinate)>,
}

impl LetterCoordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `letter` at `coordinate`, after any coordinate already recorded for it
    pub fn insert(&mut self, letter: char, coordinate: Coordinate) {
        self.positions.entry(letter).or_default().push(coordinate);
        self.cells.insert((letter, coordinate));
    }

    /// All coordinates of `letter`, or `None` if the letter is not in the grid
    pub fn get(&self, letter: char) -> Option<&[Coordinate]> {
        self.positions.get(&letter).map(Vec::as_slice)
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Whether `letter` sits at `coordinate`
    pub fn contains(&self, letter: char, coordinate: Coordinate) -> bool {
        self.cells.contains(&(letter, coordinate))
    }

    /// Number of distinct letters
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.keys().copied()
    }
}

impl FromIterator<(char, Vec<Coordinate>)> for LetterCoordinates {
    fn from_iter<I: IntoIterator<Item = (char, Vec<Coordinate>)>>(iter: I) -> Self {
        let mut board = Self::new();
        for (letter, coordinates) in iter {
            for coordinate in coordinates {
                board.insert(letter, coordinate);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_display() {
        let point = Coordinate::new(15, 3);
        assert_eq!(point.to_string(), "(X15, Y3)");
        assert_eq!((point.x_axis, point.y_axis), (15, 3));
    }

    #[test]
    fn test_coordinate_step() {
        let point = Coordinate::new(0, 0) + Coordinate::new(-1, 1);
        assert_eq!(point, Coordinate::new(-1, 1));
    }

    #[test]
    fn test_grid_size_parsing() {
        assert_eq!("10x15".parse::<GridSize>().unwrap(), GridSize::new(10, 15));
        assert_eq!("-1x0".parse::<GridSize>().unwrap(), GridSize::new(-1, 0));
        assert!("10".parse::<GridSize>().is_err());
        assert!("10x".parse::<GridSize>().is_err());
        assert!("axb".parse::<GridSize>().is_err());
        assert!("10X10".parse::<GridSize>().is_err());
    }

    #[test]
    fn test_grid_size_validation() {
        assert_eq!(GridSize::new(2, 3).validate().unwrap(), (2, 3));
        for (height, width) in [(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1), (1, -1), (-1, 1)] {
            let err = GridSize::new(height, width).validate().unwrap_err();
            assert!(matches!(err, PuzzleError::InvalidDimension { .. }));
        }
    }

    #[test]
    fn test_grid_size_upper_bound() {
        assert!(GridSize::new(1, GridSize::MAX_CELLS).validate().is_ok());
        for (height, width) in [
            (99_999_999_999, 99_999_999_999),
            (GridSize::MAX_CELLS, 2),
            (i64::MAX, i64::MAX),
        ] {
            let err = GridSize::new(height, width).validate().unwrap_err();
            assert!(matches!(err, PuzzleError::GridTooLarge { .. }));
        }
    }

    #[test]
    fn test_letter_coordinates_order() {
        let mut board = LetterCoordinates::new();
        board.insert('a', Coordinate::new(0, 0));
        board.insert('b', Coordinate::new(0, 1));
        board.insert('a', Coordinate::new(1, 0));

        assert_eq!(board.len(), 2);
        assert_eq!(
            board.get('a').unwrap(),
            &[Coordinate::new(0, 0), Coordinate::new(1, 0)]
        );
        assert!(board.contains('b', Coordinate::new(0, 1)));
        assert!(!board.contains('b', Coordinate::new(0, 0)));
        assert!(board.get('z').is_none());
    }

    #[test]
    fn test_letter_coordinates_from_iter() {
        let board: LetterCoordinates =
            [('a', vec![Coordinate::new(0, 0), Coordinate::new(1, 1)])]
                .into_iter()
                .collect();
        assert!(board.contains_letter('a'));
        assert!(board.contains('a', Coordinate::new(1, 1)));
        assert!(!board.is_empty());
        assert!(LetterCoordinates::new().is_empty());
    }
}
