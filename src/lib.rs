//! # Sentiment Journal
//!
//! Journal companion: write a free-text entry, send it to the journal
//! backend, and show the sentiment label and score it returns.
//!
//! ## Modules
//!
//! - [`backend`]: REST client and wire types for the journal backend
//! - [`widget`]: Submission widget (state, view seam, controller, terminal front-end)
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentiment_journal::backend::JournalClient;
//! use sentiment_journal::config::{BackendConfig, WidgetConfig};
//! use sentiment_journal::widget::{JournalView, JournalWidget, TerminalView};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(JournalClient::new(BackendConfig::default())?);
//!     let view = TerminalView::new(std::io::stdout());
//!     let mut widget = JournalWidget::new(client, view, WidgetConfig::default());
//!
//!     widget.view_mut().set_input_text("I had a great day");
//!     let sentiment = widget.handle_submit().await?;
//!     println!("{} {}", sentiment.label, sentiment.score_display());
//!
//!     widget.handle_clear();
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod logging;
pub mod widget;

// Re-export top-level types for convenience
pub use backend::{
    BackendError, BackendResult, JournalClient, JournalEntry, JournalRecord, SearchHit,
    SentimentBackend, SentimentResult, WeeklyProfile,
};

pub use config::{BackendConfig, Config, ConfigError, LoggingConfig, WidgetConfig};

pub use widget::{
    run_session, JournalView, JournalWidget, Phase, SessionSummary, SubmitError, TerminalView,
    ViewModel, WidgetState,
};
