use std::sync::Arc;

use axum::{
    extract::{Extension, Json},
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use log::error;
use tower_http::cors::{Any, CorsLayer};

use crate::models::{ErrorBody, LeaderboardEntry, PREVIOUS_LEADERBOARD_ERROR};
use crate::service::LeaderboardService;

pub struct AppState {
    pub service: LeaderboardService,
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/leaderboard/top14", get(get_current_leaderboard))
        .route("/leaderboard/prev", get(get_previous_leaderboard))
        .layer(Extension(state))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn get_current_leaderboard(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<LeaderboardEntry>> {
    let snapshot = state.service.get_current();
    Json(snapshot.entries.clone())
}

async fn get_previous_leaderboard(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>, (StatusCode, Json<ErrorBody>)> {
    state.service.get_previous().await.map(Json).map_err(|e| {
        error!("failed to fetch previous leaderboard: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(PREVIOUS_LEADERBOARD_ERROR)),
        )
    })
}
