//! Sentiment core: metrics accumulators, the exposition renderer, wire DTOs,
//! and the shared error type.
//!
//! Nothing in here performs I/O or suspends. Every accumulator is its own
//! synchronization unit so request handlers can update and scrape
//! concurrently without a global lock.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Poisoned locks are recovered rather than propagated, since every
//! critical section leaves its accumulator in a valid state.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod protocol;

/// Shared result type.
pub use error::{Result, SentimentError};
pub use metrics::MetricsRegistry;
