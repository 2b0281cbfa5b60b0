//! Interactive session
//!
//! Drives a [`JournalWidget`] from lines of text. Requests run on their own
//! task so `:clear` is still handled while one is outstanding.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use super::controller::{JournalWidget, SubmitError};
use super::view::JournalView;
use crate::backend::SentimentBackend;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Clear,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":clear" | ":c" => Command::Clear,
            ":quit" | ":q" => Command::Quit,
            _ => Command::Submit(line.to_string()),
        }
    }
}

/// What happened over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Results shown
    pub shown: usize,
    /// Requests that failed
    pub failed: usize,
    /// Lines refused before any request (empty or in flight)
    pub rejected: usize,
}

impl SessionSummary {
    fn record<T>(&mut self, outcome: &Result<T, SubmitError>) {
        match outcome {
            Ok(_) => self.shown += 1,
            Err(SubmitError::Backend(_)) => self.failed += 1,
            Err(_) => self.rejected += 1,
        }
    }
}

/// Run the widget until `:quit` or end of input.
///
/// A request still outstanding at that point is awaited before returning.
pub async fn run_session<B, V, R>(
    widget: &mut JournalWidget<B, V>,
    input: R,
) -> std::io::Result<SessionSummary>
where
    B: SentimentBackend + ?Sized + 'static,
    V: JournalView,
    R: AsyncBufRead + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut lines = input.lines();
    let mut summary = SessionSummary::default();

    loop {
        tokio::select! {
            Some(outcome) = rx.recv() => {
                summary.record(&widget.finish_submit(outcome));
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Clear => widget.handle_clear(),
                    Command::Submit(text) => {
                        widget.view_mut().set_input_text(&text);
                        match widget.begin_submit() {
                            Ok(pending) => {
                                let tx = tx.clone();
                                tokio::spawn(async move {
                                    let _ = tx.send(pending.send().await);
                                });
                            }
                            Err(e) => {
                                tracing::debug!(error = %e, "Line not submitted");
                                summary.record::<()>(&Err(e));
                            }
                        }
                    }
                }
            }
        }
    }

    if widget.state().is_pending() {
        if let Some(outcome) = rx.recv().await {
            summary.record(&widget.finish_submit(outcome));
        }
    }

    Ok(summary)
}
