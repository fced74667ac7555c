//! # Tradebook Analytics Engine
//!
//! This crate derives the performance picture of a trading ledger. It acts as
//! the "unbiased judge" of the journal: the dashboard numbers and the equity
//! chart both come from here.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless
//!   calculator. It takes the raw trade list as input and produces a
//!   `Metrics` report and equity curve as output. This makes it highly
//!   reliable and easy to test.
//! - **Total Functions:** Every aggregate resolves degenerate input (empty
//!   ledger, no closed trades) to a documented zero instead of failing, and
//!   malformed trades are skipped rather than rejected. The read side never
//!   errors.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The main struct that contains the calculation logic.
//! - `Metrics`: The standardized struct holding the dashboard statistics.
//! - `EquityPoint`: One point of the chronological balance reconstruction.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use report::{EquityPoint, Metrics};
