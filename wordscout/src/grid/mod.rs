/// This module generates grids of letters and turns them into a searchable board.
///
/// A grid goes through a simple lifecycle: it is built (rows are generated),
/// its content is read, then it is refreshed (rows are cleared). The
/// [`GridSession`] guard ties that lifecycle to a scope so a grid never keeps
/// stale rows around once the caller is done with it:
///
/// ```rust,ignore
/// let mut grid = RandomWordsGrid::new(GridSize::new(50, 50));
/// let board = {
///     let session = GridSession::open(&mut grid)?;
///     session.content().to_coordinates()?
/// }; // rows are cleared here, on every exit path
/// ```
///
/// The board is an owned [`LetterCoordinates`](crate::LetterCoordinates)
/// snapshot, so it stays valid for searches after the session has ended.
pub mod content;
pub mod random;

pub use content::GridContent;
pub use random::RandomWordsGrid;

use std::ops::{Deref, DerefMut};
use tracing::debug;

use crate::errors::PuzzleResult;

/// Capabilities every grid of letters provides
pub trait Grid {
    /// Snapshot of the current rows
    fn content(&self) -> GridContent;

    fn height(&self) -> i64;

    fn width(&self) -> i64;

    /// Generates the rows, failing if the grid size is invalid
    fn build(&mut self) -> PuzzleResult<()>;

    /// Clears the rows
    fn refresh(&mut self);
}

/// Scope guard over a built grid.
///
/// Opening the session builds the grid. Dropping it refreshes the grid,
/// whether the scope ends normally, through `?`, or by unwinding.
pub struct GridSession<'a, G: Grid> {
    grid: &'a mut G,
}

impl<'a, G: Grid> GridSession<'a, G> {
    /// Builds `grid` and returns a guard that refreshes it on drop
    pub fn open(grid: &'a mut G) -> PuzzleResult<Self> {
        grid.build()?;
        debug!(
            "Grid session opened for {}x{} grid",
            grid.height(),
            grid.width()
        );
        Ok(Self { grid })
    }
}

impl<G: Grid> Deref for GridSession<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.grid
    }
}

impl<G: Grid> DerefMut for GridSession<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.grid
    }
}

impl<G: Grid> Drop for GridSession<'_, G> {
    fn drop(&mut self) {
        self.grid.refresh();
        debug!("Grid session closed, rows refreshed");
    }
}
