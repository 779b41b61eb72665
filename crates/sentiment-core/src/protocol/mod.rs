//! JSON bodies of the HTTP API.
//!
//! These are the request/response contracts of `POST /` and
//! `POST /feedback`, plus the error body every rejected request carries.
//! Unknown request fields are ignored.

pub mod api;

pub use api::{ErrorBody, FeedbackRequest, FeedbackResponse, PredictRequest, PredictResponse};
