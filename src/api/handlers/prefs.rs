use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::domain::{CatalogTier, RatingMode, ShowMetadata};
use crate::prefs::Preferences;

#[derive(Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Deserialize)]
pub struct TierRequest {
    pub tier: CatalogTier,
}

#[derive(Deserialize)]
pub struct ModeRequest {
    pub mode: RatingMode,
}

pub async fn get_prefs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.prefs.load())
}

pub async fn toggle_star(
    State(state): State<Arc<AppState>>,
    Json(show): Json<ShowMetadata>,
) -> impl IntoResponse {
    respond(state.prefs.toggle_star(&show))
}

pub async fn reorder_starred(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReorderRequest>,
) -> impl IntoResponse {
    respond(state.prefs.reorder_starred(request.from, request.to))
}

pub async fn record_view(
    State(state): State<Arc<AppState>>,
    Json(show): Json<ShowMetadata>,
) -> impl IntoResponse {
    respond(state.prefs.record_view(&show))
}

pub async fn set_tier(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TierRequest>,
) -> impl IntoResponse {
    respond(state.prefs.set_tier(request.tier))
}

pub async fn set_mode(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ModeRequest>,
) -> impl IntoResponse {
    respond(state.prefs.set_mode(request.mode))
}

fn respond(result: anyhow::Result<Preferences>) -> axum::response::Response {
    match result {
        Ok(prefs) => Json(prefs).into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Preferences Error: {}", e))
                .into_response()
        }
    }
}
