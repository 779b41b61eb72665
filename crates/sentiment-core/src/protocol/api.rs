use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Body of `POST /`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictRequest {
    /// Text to classify.
    pub msg: String,
}

/// Reply of `POST /`: one label in `{0, 1}` per classified document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PredictResponse {
    pub predictions: Vec<u8>,
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedbackRequest {
    /// The message the feedback refers to. Required but not interpreted.
    pub msg: String,
    /// Free-form label; `"correct"` counts towards accuracy.
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
}

impl FeedbackResponse {
    pub fn submitted() -> Self {
        Self {
            message: "Feedback submitted successfully".into(),
        }
    }
}

/// Error body: `{ "code": "MALFORMED_INPUT", "msg": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub msg: String,
}

impl From<&SentimentError> for ErrorBody {
    fn from(e: &SentimentError) -> Self {
        Self {
            code: e.client_code().as_str().to_string(),
            msg: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn feedback_request_requires_both_fields() {
        let ok: FeedbackRequest =
            serde_json::from_str(r#"{"msg":"nice","feedback":"correct","extra":1}"#).unwrap();
        assert_eq!(ok.feedback, "correct");
        assert!(serde_json::from_str::<FeedbackRequest>(r#"{"msg":"nice"}"#).is_err());
    }

    #[test]
    fn error_body_carries_client_code() {
        let body = ErrorBody::from(&SentimentError::PayloadTooLarge);
        assert_eq!(body.code, "PAYLOAD_TOO_LARGE");
        assert_eq!(
            serde_json::to_string(&FeedbackResponse::submitted()).unwrap(),
            r#"{"message":"Feedback submitted successfully"}"#
        );
    }
}
