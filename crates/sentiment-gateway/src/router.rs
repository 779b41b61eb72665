//! Axum router wiring.
//!
//! `POST /` and `POST /feedback` feed the metrics registry; `GET /metrics`
//! renders it. Health probes live next to the scrape endpoint.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let cors = state.cfg().server.cors;

    let router = Router::new()
        .route("/", post(transport::predict::predict))
        .route("/feedback", post(transport::feedback::feedback))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route(ops::apidocs::APISPEC_PATH, get(ops::apidocs::apispec))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
