use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::engine::{SearchPuzzle, SearchWordPuzzle};
use super::words::HiddenWord;
use crate::config::ExecutionMode;
use crate::errors::{PuzzleError, PuzzleResult};
use crate::metrics::SearchMetrics;
use crate::results::{PuzzleReport, WordReport};

type WordOutcome = (String, PuzzleResult<WordReport>);

/// Searches a single word and logs whether it was found
pub fn start_word_search_puzzle(word: &HiddenWord) -> PuzzleResult<WordReport> {
    search_word(word, &SearchMetrics::new())
}

fn search_word(word: &HiddenWord, metrics: &SearchMetrics) -> PuzzleResult<WordReport> {
    let puzzle = SearchWordPuzzle::with_metrics(Arc::clone(&word.board), metrics.clone());
    let report = WordReport::new(word.value.as_str(), puzzle.coordinates(&word.value)?);
    if report.is_absent() {
        info!("\"{}\" word is absent in a grid", word);
    } else {
        info!(
            "Found \"{}\" word coordinates in a grid: {:?}",
            word,
            report.rendered_matches()
        );
    }
    Ok(report)
}

/// Searches every word of a batch.
///
/// Words are searched independently: a word whose search fails is logged and
/// recorded in [`PuzzleReport::failures`] without stopping the others. Only a
/// failure to start the workers aborts the batch.
///
/// `Cooperative` and `Sequential` keep the input order of the words. `Pool`
/// makes no ordering promise. `Cooperative` fails with
/// [`PuzzleError::TaskError`] when called from inside a Tokio runtime, where
/// [`start_words_search_puzzle_async`] should be awaited instead.
pub fn start_words_search_puzzle<I>(
    words: I,
    mode: ExecutionMode,
    thread_count: NonZeroUsize,
) -> PuzzleResult<PuzzleReport>
where
    I: IntoIterator<Item = HiddenWord>,
{
    let words: Vec<HiddenWord> = words.into_iter().collect();
    info!("Starting {} search for {} words", mode, words.len());

    let metrics = SearchMetrics::new();
    let outcomes: Vec<WordOutcome> = match mode {
        ExecutionMode::Sequential => words
            .iter()
            .map(|word| (word.value.clone(), search_word(word, &metrics)))
            .collect(),
        ExecutionMode::Pool => search_in_pool(&words, thread_count, &metrics)?,
        ExecutionMode::Cooperative => {
            if tokio::runtime::Handle::try_current().is_ok() {
                return Err(PuzzleError::task_error(
                    "cooperative search cannot block inside a Tokio runtime, \
                     use start_words_search_puzzle_async instead",
                ));
            }
            let runtime = tokio::runtime::Builder::new_current_thread().build()?;
            runtime.block_on(join_word_searches(words, &metrics))?
        }
    };

    Ok(build_report(outcomes, &metrics))
}

/// Searches every word of a batch as tasks of the current Tokio runtime.
///
/// For callers already running inside a runtime. Results keep the input
/// order of the words.
pub async fn start_words_search_puzzle_async<I>(words: I) -> PuzzleResult<PuzzleReport>
where
    I: IntoIterator<Item = HiddenWord>,
{
    let words: Vec<HiddenWord> = words.into_iter().collect();
    info!(
        "Starting {} search for {} words",
        ExecutionMode::Cooperative,
        words.len()
    );

    let metrics = SearchMetrics::new();
    let outcomes = join_word_searches(words, &metrics).await?;
    Ok(build_report(outcomes, &metrics))
}

fn search_in_pool(
    words: &[HiddenWord],
    thread_count: NonZeroUsize,
    metrics: &SearchMetrics,
) -> PuzzleResult<Vec<WordOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count.get())
        .build()
        .map_err(|e| PuzzleError::task_error(e.to_string()))?;
    debug!(
        "Dispatching {} words across {} workers",
        words.len(),
        pool.current_num_threads()
    );

    Ok(pool.install(|| {
        words
            .par_iter()
            .map(|word| (word.value.clone(), search_word(word, metrics)))
            .collect()
    }))
}

async fn join_word_searches(
    words: Vec<HiddenWord>,
    metrics: &SearchMetrics,
) -> PuzzleResult<Vec<WordOutcome>> {
    let handles: Vec<_> = words
        .into_iter()
        .map(|word| {
            let metrics = metrics.clone();
            tokio::spawn(async move {
                let outcome = search_word(&word, &metrics);
                (word.value, outcome)
            })
        })
        .collect();
    debug!("Spawned {} search tasks", handles.len());

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|e| PuzzleError::task_error(e.to_string()))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn build_report(outcomes: Vec<WordOutcome>, metrics: &SearchMetrics) -> PuzzleReport {
    let mut report = PuzzleReport::new();
    for (word, outcome) in outcomes {
        match outcome {
            Ok(word_report) => report.add_word_report(word_report),
            Err(e) => {
                error!("Search for \"{}\" word failed: {}", word, e);
                report.add_failure(word, e);
            }
        }
    }

    metrics.log_stats();
    info!(
        "Search complete. Found {} matches for {} of {} words",
        report.total_matches, report.words_found, report.words_searched
    );
    report
}
