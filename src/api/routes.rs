use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    prefs::{get_prefs, record_view, reorder_starred, set_mode, set_tier, toggle_star},
    shows::{get_show_heatmap, get_show_stats, get_show_trend, get_shows},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/shows", get(get_shows))
        .route("/api/show/:id", get(get_show_heatmap))
        .route("/api/show/:id/stats", get(get_show_stats))
        .route("/api/show/:id/trend", get(get_show_trend))
        .route("/api/prefs", get(get_prefs))
        .route("/api/prefs/star", post(toggle_star))
        .route("/api/prefs/star/reorder", post(reorder_starred))
        .route("/api/prefs/view", post(record_view))
        .route("/api/prefs/tier", post(set_tier))
        .route("/api/prefs/mode", post(set_mode))
        .with_state(state)
}
