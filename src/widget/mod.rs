//! Journal Widget
//!
//! The submission widget: capture an entry, send it to the backend, show the
//! returned sentiment, and reset on clear.
//!
//! ## Architecture
//!
//! - **State**: explicit [`Phase`] plus the result currently on display
//! - **View**: [`JournalView`] trait fed with a [`ViewModel`] projection
//! - **Controller**: [`JournalWidget`] runs the submit and clear flows
//! - **Terminal**: [`TerminalView`] and [`run_session`] for the CLI
//!
//! ## State Machine
//!
//! ```text
//! Idle --submit(non-empty)--> Pending --success--> Idle (result shown)
//!                             Pending --failure--> Idle (result unchanged, alert)
//! any  --clear--------------> same phase (result hidden)
//! ```

mod controller;
mod session;
mod state;
mod terminal;
mod view;

pub use controller::{JournalWidget, PendingSubmit, SubmitError};
pub use session::{run_session, Command, SessionSummary};
pub use state::{Phase, ResultPanel, WidgetState};
pub use terminal::TerminalView;
pub use view::{JournalView, ViewModel};
