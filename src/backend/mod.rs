//! Journal Backend
//!
//! Everything that crosses the wire to the sentiment backend.
//!
//! ## Endpoints
//!
//! - `POST /journal/text` - Analyze and store an entry
//! - `GET /memory/recent` - Most recent stored entries
//! - `POST /memory/semantic-search` - Entries close to a query text
//! - `GET /cognition/weekly` - Emotional profile over recent days
//!
//! The widget only depends on [`SentimentBackend`], so tests and other
//! front-ends can swap in their own implementation.

mod client;
pub mod dto;
mod error;

pub use client::JournalClient;
pub use dto::{
    EmotionalStability, JournalEntry, JournalRecord, SearchHit, SentimentResult, Volatility,
    WeeklyProfile, WeeklySummary,
};
pub use error::{BackendError, BackendResult};

use async_trait::async_trait;

/// Something that can analyze a journal entry
#[async_trait]
pub trait SentimentBackend: Send + Sync {
    /// Submit one entry and return the stored record with its sentiment
    async fn submit_entry(&self, entry: &JournalEntry) -> BackendResult<JournalRecord>;
}
