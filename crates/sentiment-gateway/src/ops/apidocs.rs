//! OpenAPI 2.0 description of the prediction API, served at
//! `/apispec_1.json` so existing Swagger UIs pointed at the service keep working.

use axum::Json;
use serde_json::{json, Value};

pub const APISPEC_PATH: &str = "/apispec_1.json";

pub async fn apispec() -> Json<Value> {
    Json(document())
}

pub fn document() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": "sentiment-gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Sentiment predictions with feedback-driven accuracy metrics."
        },
        "consumes": ["application/json"],
        "produces": ["application/json"],
        "paths": {
            "/": {
                "post": {
                    "summary": "Make a prediction",
                    "parameters": [{
                        "name": "input_data",
                        "in": "body",
                        "description": "message to be classified.",
                        "required": true,
                        "schema": { "$ref": "#/definitions/PredictRequest" }
                    }],
                    "responses": {
                        "200": {
                            "description": "One label per document: 1 positive, 0 negative",
                            "schema": { "$ref": "#/definitions/PredictResponse" }
                        },
                        "400": { "description": "Malformed input", "schema": { "$ref": "#/definitions/ErrorBody" } },
                        "413": { "description": "Message too large", "schema": { "$ref": "#/definitions/ErrorBody" } }
                    }
                }
            },
            "/feedback": {
                "post": {
                    "summary": "Submit feedback on a prediction",
                    "parameters": [{
                        "name": "feedback",
                        "in": "body",
                        "required": true,
                        "schema": { "$ref": "#/definitions/FeedbackRequest" }
                    }],
                    "responses": {
                        "200": {
                            "description": "Feedback recorded",
                            "schema": { "$ref": "#/definitions/FeedbackResponse" }
                        },
                        "400": { "description": "Malformed input", "schema": { "$ref": "#/definitions/ErrorBody" } },
                        "413": { "description": "Field too large", "schema": { "$ref": "#/definitions/ErrorBody" } }
                    }
                }
            },
            "/metrics": {
                "get": {
                    "summary": "Prometheus text exposition",
                    "produces": ["text/plain"],
                    "responses": { "200": { "description": "Current metrics" } }
                }
            }
        },
        "definitions": {
            "PredictRequest": {
                "type": "object",
                "required": ["msg"],
                "properties": {
                    "msg": { "type": "string", "example": "We are so glad we found this place." }
                }
            },
            "PredictResponse": {
                "type": "object",
                "properties": {
                    "predictions": { "type": "array", "items": { "type": "integer", "enum": [0, 1] } }
                }
            },
            "FeedbackRequest": {
                "type": "object",
                "required": ["msg", "feedback"],
                "properties": {
                    "msg": { "type": "string" },
                    "feedback": { "type": "string", "example": "correct" }
                }
            },
            "FeedbackResponse": {
                "type": "object",
                "properties": {
                    "message": { "type": "string", "example": "Feedback submitted successfully" }
                }
            },
            "ErrorBody": {
                "type": "object",
                "properties": {
                    "code": { "type": "string" },
                    "msg": { "type": "string" }
                }
            }
        }
    })
}
