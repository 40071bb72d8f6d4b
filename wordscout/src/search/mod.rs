/// This module implements word searching over a board of letters.
///
/// The engine never scans the whole grid. A board maps each letter to the
/// coordinates holding it, so a search starts only from the cells holding the
/// first letter of the word and probes outwards along eight fixed directions:
/// ```text
///  \|/
/// - | -
///  /|\
/// ```
/// A probe succeeds only if every following letter sits exactly one step
/// further along the same direction. Edges never wrap.
///
/// # Running many words
///
/// Each word is an independent unit of work over a read-only board, so a batch
/// can be spread across workers without any locking:
///
/// 1. **Worker pool**: a Rayon pool sized to the CPU count (the default)
///    ```rust,ignore
///    pool.install(|| words.par_iter().map(|word| search_word(word)).collect())
///    ```
/// 2. **Cooperative**: every word is a task on a single-threaded Tokio runtime,
///    joined in input order
/// 3. **Sequential**: a plain loop, mostly useful for debugging
pub mod engine;
pub mod runner;
pub mod words;

pub use engine::{SearchPuzzle, SearchWordPuzzle};
pub use runner::{
    start_word_search_puzzle, start_words_search_puzzle, start_words_search_puzzle_async,
};
pub use words::{HiddenWord, HiddenWords};
