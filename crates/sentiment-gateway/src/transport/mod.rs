//! HTTP request handlers for prediction and feedback.

pub mod error;
pub mod feedback;
pub mod predict;

pub use error::ApiError;
