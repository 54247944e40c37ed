//! Bounded, most-recent-first log of completed analyses.

use std::collections::VecDeque;

use super::types::AnalysisResult;

/// Number of results kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

/// In-memory history of results, newest first.
///
/// Pushing beyond the capacity silently evicts the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<AnalysisResult>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a result, evicting from the back once the capacity is exceeded.
    pub fn push(&mut self, result: AnalysisResult) {
        self.entries.push_front(result);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.front()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&AnalysisResult> {
        self.entries.get(index)
    }

    /// Iterate from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{Distribution, SentimentLabel};

    fn result(id: i64) -> AnalysisResult {
        AnalysisResult {
            id,
            text: format!("text {}", id),
            label: SentimentLabel::Neutral,
            score: 0.5,
            distribution: Distribution { positive: 0.2, neutral: 0.6, negative: 0.2 },
        }
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut history = History::default();
        history.push(result(1));
        history.push(result(2));
        history.push(result(3));
        let ids: Vec<i64> = history.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(history.latest().map(|r| r.id), Some(3));
    }

    #[test]
    fn eleventh_push_evicts_the_oldest() {
        let mut history = History::default();
        for id in 1..=11 {
            history.push(result(id));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        let ids: Vec<i64> = history.iter().map(|r| r.id).collect();
        assert_eq!(ids, (2..=11).rev().collect::<Vec<_>>());
    }

    #[test]
    fn length_grows_until_capacity() {
        let mut history = History::with_capacity(3);
        for id in 0..6 {
            let before = history.len();
            history.push(result(id));
            assert_eq!(history.len(), (before + 1).min(3));
        }
    }
}
