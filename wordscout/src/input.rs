/// Validation and loading of user input: grid sizes, words and word lists.
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{PuzzleError, PuzzleResult};
use crate::properties::GridSize;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+$").expect("word pattern is valid"));

const WORDS_FILE_SUFFIXES: [&str; 2] = ["txt", "log"];

/// Parses a grid size given as `HxW`, e.g. `10x10`
pub fn parse_grid_size(grid_size: &str) -> PuzzleResult<GridSize> {
    grid_size.parse()
}

/// Accepts only words made of lowercase letters, e.g. `foo`
pub fn validate_word(word: &str) -> PuzzleResult<()> {
    if WORD_PATTERN.is_match(word) {
        Ok(())
    } else {
        Err(PuzzleError::invalid_word(word))
    }
}

/// Accepts only `.txt` and `.log` word lists
pub fn validate_words_path(path: &Path) -> PuzzleResult<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if WORDS_FILE_SUFFIXES.contains(&ext) => Ok(()),
        _ => Err(PuzzleError::invalid_words_file(path)),
    }
}

/// Picks `limit` random words from a whitespace separated word list.
///
/// Words are drawn with replacement. Entries that are not lowercase words
/// are skipped.
pub fn random_words<R: Rng + ?Sized>(
    path: &Path,
    limit: usize,
    rng: &mut R,
) -> PuzzleResult<Vec<String>> {
    validate_words_path(path)?;
    let payload = fs::read_to_string(path)?;

    let words: Vec<&str> = payload
        .split_whitespace()
        .filter(|word| {
            let valid = WORD_PATTERN.is_match(word);
            if !valid {
                warn!("Skipping \"{}\" from {}: not a lowercase word", word, path.display());
            }
            valid
        })
        .collect();
    debug!("Loaded {} words from {}", words.len(), path.display());

    if words.is_empty() {
        return Err(PuzzleError::config_error(format!(
            "{} does not contain any words to search",
            path.display()
        )));
    }

    Ok((0..limit)
        .filter_map(|_| words.choose(rng))
        .map(|word| word.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_size() {
        assert_eq!(parse_grid_size("10x10").unwrap(), GridSize::new(10, 10));
        assert_eq!(parse_grid_size("0x-3").unwrap(), GridSize::new(0, -3));
        assert!(matches!(
            parse_grid_size("10 by 10"),
            Err(PuzzleError::InvalidGridSize(_))
        ));
    }

    #[test]
    fn test_validate_word() {
        assert!(validate_word("foo").is_ok());
        for word in ["", "Foo", "foo1", "foo bar", "fóo"] {
            assert!(
                matches!(validate_word(word), Err(PuzzleError::InvalidWord(_))),
                "{word:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_words_path() {
        assert!(validate_words_path(&PathBuf::from("payload/words.txt")).is_ok());
        assert!(validate_words_path(&PathBuf::from("words.log")).is_ok());
        assert!(matches!(
            validate_words_path(&PathBuf::from("words.csv")),
            Err(PuzzleError::InvalidWordsFile(_))
        ));
        assert!(validate_words_path(&PathBuf::from("words")).is_err());
    }

    #[test]
    fn test_random_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "foo bar\nbaz\n Qux 42\n").unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let words = random_words(&path, 10, &mut rng).unwrap();
        assert_eq!(words.len(), 10);
        assert!(words
            .iter()
            .all(|word| ["foo", "bar", "baz"].contains(&word.as_str())));
    }

    #[test]
    fn test_random_words_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "\n  \n").unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            random_words(&path, 3, &mut rng),
            Err(PuzzleError::ConfigError(_))
        ));
    }

    #[test]
    fn test_random_words_missing_file() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            random_words(Path::new("missing/words.txt"), 3, &mut rng),
            Err(PuzzleError::IoError(_))
        ));
    }
}
