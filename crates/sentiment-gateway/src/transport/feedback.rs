//! `POST /feedback` : record whether a prediction was right.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use sentiment_core::error::SentimentError;
use sentiment_core::protocol::{FeedbackRequest, FeedbackResponse};

use crate::app_state::AppState;
use crate::transport::ApiError;

pub async fn feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(req) = payload?;

    // Each distinct feedback value becomes a permanent series, so bound it too.
    let limit = state.cfg().server.max_msg_bytes;
    if req.msg.len() > limit || req.feedback.len() > limit {
        return Err(SentimentError::PayloadTooLarge.into());
    }

    let accuracy = state.metrics().record_feedback(&req.feedback)?;

    tracing::debug!(
        feedback = %req.feedback,
        msg_len = req.msg.len(),
        accuracy,
        "feedback recorded"
    );
    Ok(Json(FeedbackResponse::submitted()))
}
