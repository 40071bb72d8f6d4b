use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::{Grid, GridContent};
use crate::errors::PuzzleResult;
use crate::properties::GridSize;

/// A grid of random lowercase letters (a-z only).
///
/// Every cell is drawn independently and uniformly. The generator is a
/// ChaCha8 RNG, so two grids built from the same seed and size hold the
/// same letters.
#[derive(Debug, Clone)]
pub struct RandomWordsGrid {
    size: GridSize,
    rows: Vec<String>,
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomWordsGrid {
    /// Creates a grid seeded from the thread RNG
    pub fn new(size: GridSize) -> Self {
        Self::with_seed(size, rand::thread_rng().gen())
    }

    /// Creates a grid whose letters are fully determined by `seed`
    pub fn with_seed(size: GridSize, seed: u64) -> Self {
        Self {
            size,
            rows: Vec::new(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Grid for RandomWordsGrid {
    fn content(&self) -> GridContent {
        GridContent::new(self.rows.clone())
    }

    fn height(&self) -> i64 {
        self.size.height
    }

    fn width(&self) -> i64 {
        self.size.width
    }

    fn build(&mut self) -> PuzzleResult<()> {
        info!("Grid size {} is used", self.size);
        let (height, width) = self.size.validate()?;

        info!("Generating a grid of random letters ...");
        debug!("Grid seed: {}", self.seed);
        let letters = Uniform::new_inclusive(b'a', b'z');
        let rng = &mut self.rng;
        self.rows = (0..height)
            .map(|_| (0..width).map(|_| rng.sample(letters) as char).collect::<String>())
            .collect();
        Ok(())
    }

    fn refresh(&mut self) {
        self.rows.clear();
    }
}
