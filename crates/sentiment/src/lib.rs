//! Top-level facade crate for the sentiment service.
//!
//! Re-exports the metrics core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use sentiment_core::*;
}

pub mod gateway {
    pub use sentiment_gateway::*;
}
