/// This module implements the result types of a word search.
///
/// A [`MatchResult`] is one straight-line occurrence of a word. A
/// [`WordReport`] holds every occurrence of one word, and a [`PuzzleReport`]
/// aggregates the reports of a whole batch of words.
///
/// Results render the way they are reported to users:
/// ```text
/// Start at: (X0, Y8), End at: (X0, Y10)
/// ```
use serde::Serialize;
use std::fmt;

use crate::errors::PuzzleResult;
use crate::properties::Coordinate;

/// Start and end coordinates of a found word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MatchResult {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl MatchResult {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start at: {}, End at: {}", self.start, self.end)
    }
}

/// All matches of a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub word: String,
    pub matches: Vec<MatchResult>,
}

impl WordReport {
    pub fn new(word: impl Into<String>, matches: Vec<MatchResult>) -> Self {
        Self {
            word: word.into(),
            matches,
        }
    }

    /// Whether the word was not found anywhere in the grid
    pub fn is_absent(&self) -> bool {
        self.matches.is_empty()
    }

    /// Rendered matches, e.g. `["Start at: (X0, Y0), End at: (X0, Y2)"]`
    pub fn rendered_matches(&self) -> Vec<String> {
        self.matches.iter().map(ToString::to_string).collect()
    }
}

/// A word whose search failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFailure {
    pub word: String,
    pub error: String,
}

/// The complete results of a batch of words
#[derive(Debug, Clone, Default, Serialize)]
pub struct PuzzleReport {
    /// Results per word
    pub word_reports: Vec<WordReport>,
    /// Words whose search returned an error
    pub failures: Vec<WordFailure>,
    /// Total number of matches found
    pub total_matches: usize,
    /// Total number of words searched, failures included
    pub words_searched: usize,
    /// Total number of words found at least once
    pub words_found: usize,
}

impl PuzzleReport {
    /// Creates a new empty report
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a word report to the batch
    pub fn add_word_report(&mut self, report: WordReport) {
        self.words_searched += 1;
        if !report.is_absent() {
            self.total_matches += report.matches.len();
            self.words_found += 1;
        }
        self.word_reports.push(report);
    }

    /// Records a word whose search failed
    pub fn add_failure(&mut self, word: impl Into<String>, error: impl fmt::Display) {
        self.words_searched += 1;
        self.failures.push(WordFailure {
            word: word.into(),
            error: error.to_string(),
        });
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> PuzzleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
