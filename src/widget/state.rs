//! Widget state
//!
//! The controller owns this; views only ever see a projection of it.

use crate::backend::{JournalRecord, SentimentResult};

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ready to accept a submission
    #[default]
    Idle,
    /// A request is in flight
    Pending,
}

/// Result currently shown in the result panel
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub sentiment: SentimentResult,
    pub reflection: Option<String>,
}

impl From<JournalRecord> for ResultPanel {
    fn from(record: JournalRecord) -> Self {
        Self {
            sentiment: record.sentiment,
            reflection: record.reflection,
        }
    }
}

/// Complete widget state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub phase: Phase,
    /// `Some` while the result panel is visible
    pub result: Option<ResultPanel>,
    /// Successful submissions so far; bumps even when the result repeats
    pub results_shown: u64,
}

impl WidgetState {
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }

    /// Show a fresh result, replacing whatever the panel held
    pub fn show_result(&mut self, panel: ResultPanel) {
        self.result = Some(panel);
        self.results_shown += 1;
    }
}
