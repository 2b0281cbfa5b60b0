//! Journal Widget Controller
//!
//! Runs the submit and clear flows against an injected backend and view.
//!
//! Submitting is split in two so a front-end can keep handling input while a
//! request is outstanding:
//!
//! 1. [`JournalWidget::begin_submit`] validates the input, moves to
//!    [`Phase::Pending`] and hands back a [`PendingSubmit`].
//! 2. [`PendingSubmit::send`] performs the single request. Its future owns
//!    everything it needs, so it can be spawned.
//! 3. [`JournalWidget::finish_submit`] applies the outcome and always returns
//!    the widget to [`Phase::Idle`].
//!
//! [`JournalWidget::handle_submit`] runs all three in sequence.

use std::sync::Arc;
use thiserror::Error;

use super::state::{Phase, ResultPanel, WidgetState};
use super::view::{JournalView, ViewModel};
use crate::backend::{
    BackendError, BackendResult, JournalEntry, JournalRecord, SentimentBackend, SentimentResult,
};
use crate::config::WidgetConfig;

/// Why a submission did not produce a result
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Input was empty after trimming
    #[error("Nothing to submit")]
    EmptyEntry,

    /// A request is already outstanding
    #[error("A submission is already in flight")]
    InFlight,

    /// The backend call failed
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

/// A validated submission waiting to be sent
pub struct PendingSubmit<B: ?Sized> {
    backend: Arc<B>,
    entry: JournalEntry,
}

impl<B: SentimentBackend + ?Sized> PendingSubmit<B> {
    pub fn entry(&self) -> &JournalEntry {
        &self.entry
    }

    /// Send the entry to the backend
    pub async fn send(self) -> BackendResult<JournalRecord> {
        self.backend.submit_entry(&self.entry).await
    }
}

/// Journal submission widget
pub struct JournalWidget<B: ?Sized, V> {
    backend: Arc<B>,
    view: V,
    state: WidgetState,
    captions: WidgetConfig,
}

impl<B, V> JournalWidget<B, V>
where
    B: SentimentBackend + ?Sized,
    V: JournalView,
{
    /// Create a widget and draw its initial idle state
    pub fn new(backend: Arc<B>, view: V, captions: WidgetConfig) -> Self {
        let mut widget = Self {
            backend,
            view,
            state: WidgetState::default(),
            captions,
        };
        widget.render();
        widget
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Validate the input and enter the pending phase.
    ///
    /// Empty input raises the empty-entry alert and leaves state untouched.
    /// While a request is outstanding further submissions are refused.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit<B>, SubmitError> {
        if self.state.is_pending() {
            tracing::debug!("Submission ignored, request already in flight");
            return Err(SubmitError::InFlight);
        }

        let Some(entry) = JournalEntry::from_input(&self.view.input_text()) else {
            self.view.alert(&self.captions.empty_entry_message);
            return Err(SubmitError::EmptyEntry);
        };

        self.state.phase = Phase::Pending;
        self.render();

        Ok(PendingSubmit {
            backend: Arc::clone(&self.backend),
            entry,
        })
    }

    /// Apply the backend outcome and return to idle.
    ///
    /// A failure raises the generic backend alert and leaves the result panel
    /// as it was before the attempt.
    pub fn finish_submit(
        &mut self,
        outcome: BackendResult<JournalRecord>,
    ) -> Result<SentimentResult, SubmitError> {
        let result = match outcome {
            Ok(record) => {
                let panel = ResultPanel::from(record);
                let sentiment = panel.sentiment.clone();
                tracing::info!(
                    label = %sentiment.label,
                    score = sentiment.score,
                    "Sentiment result shown"
                );
                self.state.show_result(panel);
                Ok(sentiment)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    transport = e.is_transport(),
                    "Journal submission failed"
                );
                self.view.alert(&self.captions.backend_error_message);
                Err(SubmitError::Backend(e))
            }
        };

        self.state.phase = Phase::Idle;
        self.render();
        result
    }

    /// Full submit flow
    pub async fn handle_submit(&mut self) -> Result<SentimentResult, SubmitError> {
        let pending = self.begin_submit()?;
        let outcome = pending.send().await;
        self.finish_submit(outcome)
    }

    /// Clear flow: empty the input and hide the result panel.
    ///
    /// An outstanding request is not cancelled.
    pub fn handle_clear(&mut self) {
        self.view.set_input_text("");
        self.state.result = None;
        self.render();
    }

    fn render(&mut self) {
        let model = ViewModel::project(&self.state, &self.captions);
        self.view.render(&model);
    }
}
