//! In-memory result display.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use crate::traits::ResultDisplay;

/// History entries kept by [`BufferDisplay::new`]
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A [`ResultDisplay`] that keeps its content in memory.
///
/// Every update is also appended to a bounded history, so callers can see
/// the pending indicator as well as the final message. Once the limit is
/// reached the oldest entries are dropped.
#[derive(Debug)]
pub struct BufferDisplay {
    state: RwLock<BufferState>,
    history_limit: usize,
}

#[derive(Debug, Default)]
struct BufferState {
    content: String,
    history: VecDeque<String>,
}

impl Default for BufferDisplay {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl BufferDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` history entries. Zero keeps none.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            state: RwLock::default(),
            history_limit: limit,
        }
    }

    /// Current content
    pub fn content(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .content
            .clone()
    }

    /// Retained contents, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .iter()
            .cloned()
            .collect()
    }
}

impl ResultDisplay for BufferDisplay {
    fn set_content(&self, content: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.content = content.to_string();
        if self.history_limit == 0 {
            return;
        }
        if state.history.len() == self.history_limit {
            state.history.pop_front();
        }
        state.history.push_back(content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_content_replaces_and_records() {
        let display = BufferDisplay::new();
        assert!(display.content().is_empty());

        display.set_content("first");
        display.set_content("second");

        assert_eq!(display.content(), "second");
        assert_eq!(display.history(), vec!["first", "second"]);
    }

    #[test]
    fn history_drops_oldest_past_limit() {
        let display = BufferDisplay::with_history_limit(2);
        for content in ["a", "b", "c", "d"] {
            display.set_content(content);
        }

        assert_eq!(display.content(), "d");
        assert_eq!(display.history(), vec!["c", "d"]);
    }

    #[test]
    fn default_limit_bounds_repeated_submissions() {
        let display = BufferDisplay::new();
        for i in 0..DEFAULT_HISTORY_LIMIT * 3 {
            display.set_content(&i.to_string());
        }

        let history = display.history();
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(
            history.last().map(String::as_str),
            Some((DEFAULT_HISTORY_LIMIT * 3 - 1).to_string().as_str())
        );
    }

    #[test]
    fn zero_limit_keeps_only_content() {
        let display = BufferDisplay::with_history_limit(0);
        display.set_content("only");

        assert_eq!(display.content(), "only");
        assert!(display.history().is_empty());
    }
}
