//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for the failures
//! observed while processing entries.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe error statistics tracker.
///
/// Tracks per-category failure counts using atomic counters, allowing
/// concurrent access from multiple worker tasks. All categories are
/// initialized to zero on creation, so incrementing never allocates.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every category initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ProcessingStats { errors }
    }

    /// Increments the counter for an error category.
    ///
    /// All categories are inserted in `new()`; a missing entry indicates an
    /// initialization bug and is logged rather than panicking, so a counting
    /// slip never takes down a worker.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Returns the current count for an error category.
    pub fn error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|counter| counter.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Returns all categories with a nonzero count, highest count first.
    pub fn nonzero_counts(&self) -> Vec<(ErrorType, usize)> {
        let mut counts: Vec<(ErrorType, usize)> = self
            .errors
            .iter()
            .map(|(error, counter)| (*error, counter.load(Ordering::SeqCst)))
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
        counts
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs the end-of-run error statistics.
///
/// One line per category that saw at least one failure; a single summary
/// line when the run was clean.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let counts = stats.nonzero_counts();
    if counts.is_empty() {
        info!("No errors encountered during processing");
        return;
    }
    info!("Error statistics:");
    for (error_type, count) in counts {
        info!("  {}: {}", error_type.as_str(), count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initializes_all_categories_to_zero() {
        let stats = ProcessingStats::new();
        for error in ErrorType::iter() {
            assert_eq!(stats.error_count(error), 0);
        }
    }

    #[test]
    fn test_increment_error() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::InvalidUrl);
        stats.increment_error(ErrorType::InvalidUrl);
        stats.increment_error(ErrorType::DnsResolutionError);
        assert_eq!(stats.error_count(ErrorType::InvalidUrl), 2);
        assert_eq!(stats.error_count(ErrorType::DnsResolutionError), 1);
        assert_eq!(stats.error_count(ErrorType::EmptyEntry), 0);
    }

    #[test]
    fn test_nonzero_counts_sorted_descending() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::InvalidUrl);
        stats.increment_error(ErrorType::InvalidUrl);
        stats.increment_error(ErrorType::EmptyEntry);
        let counts = stats.nonzero_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], (ErrorType::InvalidUrl, 2));
        assert_eq!(counts[1], (ErrorType::EmptyEntry, 1));
    }

    #[test]
    fn test_concurrent_increments() {
        use std::sync::Arc;

        let stats = Arc::new(ProcessingStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.increment_error(ErrorType::HttpRequestOtherError);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.error_count(ErrorType::HttpRequestOtherError), 800);
    }
}
