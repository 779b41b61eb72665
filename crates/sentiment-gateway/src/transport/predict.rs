//! `POST /` : classify a message.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use sentiment_core::error::SentimentError;
use sentiment_core::protocol::{PredictRequest, PredictResponse};

use crate::app_state::AppState;
use crate::transport::ApiError;

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(req) = payload?;

    if req.msg.len() > state.cfg().server.max_msg_bytes {
        return Err(SentimentError::PayloadTooLarge.into());
    }

    let predictions = state.classifier().predict(&req.msg).await?;

    // Character count, not bytes: sizes are about text length.
    let input_len = req.msg.chars().count() as u64;
    state.metrics().record_prediction(input_len, &predictions)?;

    tracing::debug!(input_len, predictions = ?predictions, "prediction served");
    Ok(Json(PredictResponse { predictions }))
}
