use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Tracks search effort across every word of a batch
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    words_searched: Arc<AtomicU64>,
    words_found: Arc<AtomicU64>,

    // Probe metrics
    start_cells_tried: Arc<AtomicU64>,
    probes: Arc<AtomicU64>,
    matches_found: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Creates a new SearchMetrics instance
    pub fn new() -> Self {
        Self {
            words_searched: Arc::new(AtomicU64::new(0)),
            words_found: Arc::new(AtomicU64::new(0)),
            start_cells_tried: Arc::new(AtomicU64::new(0)),
            probes: Arc::new(AtomicU64::new(0)),
            matches_found: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records one finished word search
    pub fn record_word(&self, matches: usize) {
        self.words_searched.fetch_add(1, Ordering::Relaxed);
        if matches > 0 {
            self.words_found.fetch_add(1, Ordering::Relaxed);
        }
        let total = self
            .matches_found
            .fetch_add(matches as u64, Ordering::Relaxed)
            + matches as u64;
        debug!("Word recorded with {} matches, total: {}", matches, total);
    }

    /// Records the start cells and probe steps spent on a single word
    pub fn record_probes(&self, start_cells: u64, probes: u64) {
        self.start_cells_tried.fetch_add(start_cells, Ordering::Relaxed);
        self.probes.fetch_add(probes, Ordering::Relaxed);
    }

    /// Gets current search statistics
    pub fn get_stats(&self) -> SearchStats {
        SearchStats {
            words_searched: self.words_searched.load(Ordering::Relaxed),
            words_found: self.words_found.load(Ordering::Relaxed),
            start_cells_tried: self.start_cells_tried.load(Ordering::Relaxed),
            probes: self.probes.load(Ordering::Relaxed),
            matches_found: self.matches_found.load(Ordering::Relaxed),
        }
    }

    /// Logs current search statistics
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Search stats:\n\
             Words searched/found: {}/{}\n\
             Start cells tried: {}\n\
             Probe steps: {}\n\
             Matches found: {}",
            stats.words_searched,
            stats.words_found,
            stats.start_cells_tried,
            stats.probes,
            stats.matches_found
        );
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about search effort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub words_searched: u64,
    pub words_found: u64,
    pub start_cells_tried: u64,
    pub probes: u64,
    pub matches_found: u64,
}
