//! # Tradebook Journal
//!
//! This crate owns the two state transitions of the active ledger: taking a
//! new trade in, and closing a trading period out.
//!
//! ## Architectural Principles
//!
//! - **Explicit state:** Every operation takes the `UserProfile` it acts on.
//!   There is no ambient ledger; the caller owns persistence and decides when
//!   the mutated profile becomes durable.
//! - **Validate at the door:** A trade is validated before it enters the
//!   ledger. The read side (analytics) tolerates malformed imports; the write
//!   side does not produce them.
//! - **Archives are terminal:** `archive_and_reset` deep-copies the ledger
//!   into an `ArchivedSession` that no component mutates afterwards.
//!
//! ## Public API
//!
//! - `log_trade` / `TradeDraft`: Scored, validated trade intake.
//! - `validate_trade`: The standalone record validator.
//! - `archive_and_reset`: The period close-out transition.

pub mod error;
pub mod session;
pub mod validator;

// Re-export the key components to create a clean, public-facing API.
pub use error::JournalError;
pub use session::archive_and_reset;
pub use validator::{TradeDraft, log_trade, validate_trade};
