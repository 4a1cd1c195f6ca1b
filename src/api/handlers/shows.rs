use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, HeatmapParams, ShowParams};
use crate::api::models::{
    EpisodeCell, HeatmapResponse, PaginatedResponse, SeasonRow, SeasonStatsRow, SeasonTrendRow,
    ShowListItem, TrendResponse,
};
use crate::database::{self, models::{ShowFilter, SortColumn, SortOrder}};
use crate::domain::{CompactShowData, Episode, Rating, RatingMode, ShowData, decode_show};
use crate::rating::{
    adjusted_rating, color_for_rating, color_for_value, season_stats, season_trend,
    vote_heat_color, vote_heat_scale,
};

pub async fn get_shows(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShowParams>,
) -> impl IntoResponse {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(100).clamp(1, 1000);
    let offset = (page - 1) * page_size;

    let sort_by = match params.sort_by.as_deref() {
        Some("title") => SortColumn::Title,
        Some("rating") => SortColumn::Rating,
        _ => SortColumn::Votes,
    };

    let sort_order = match params.order.as_deref() {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response();
        }
    };

    let filter = ShowFilter {
        title_contains: params.filter,
        sort_by,
        sort_order,
        limit: page_size,
        offset,
    };

    let (rows, total) = match database::shows::search_shows(&mut conn, &filter) {
        Ok(result) => result,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response();
        }
    };

    let prefs = state.prefs.load();
    let items: Vec<ShowListItem> = rows
        .into_iter()
        .map(|row| ShowListItem {
            starred: prefs.is_starred(&row.id),
            id: row.id,
            title: row.title,
            rating: row.rating,
            votes: row.votes,
            season_count: row.season_count,
        })
        .collect();

    Json(PaginatedResponse {
        items,
        total,
        page,
        page_size,
    })
    .into_response()
}

pub async fn get_show_heatmap(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<String>,
    Query(params): Query<HeatmapParams>,
) -> impl IntoResponse {
    let show_data = match load_cached_show(&state, &show_id) {
        Ok(Some(data)) => data,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, "Show data not ingested").into_response();
        }
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Cache Error: {}", e))
                .into_response();
        }
    };

    let mode = resolve_mode(&state, params.mode.as_deref());
    let title = lookup_title(&state, &show_id);

    let seasons: Vec<SeasonRow> = show_data
        .iter()
        .enumerate()
        .map(|(index, season)| SeasonRow {
            season: (index + 1) as u32,
            episodes: season
                .iter()
                .map(|episode| build_cell(&state, episode, mode))
                .collect(),
        })
        .collect();

    let stats = build_stats_rows(&state, &show_data);

    Json(HeatmapResponse {
        id: show_id,
        title,
        mode: mode.as_str().to_string(),
        seasons,
        stats,
    })
    .into_response()
}

pub async fn get_show_stats(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<String>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response();
        }
    };

    match database::shows::get_show(&mut conn, &show_id) {
        Ok(Some(_)) => {}
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response();
        }
    }

    let rows = match database::season_stats::list_for_show(&mut conn, &show_id) {
        Ok(rows) => rows,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response();
        }
    };

    let stats: Vec<SeasonStatsRow> = rows
        .into_iter()
        .map(|row| SeasonStatsRow {
            season: row.season_number as u32,
            mean: row.mean,
            weighted_mean: row.weighted_mean,
            median: row.median,
            stddev: row.stddev,
            total_votes: row.total_votes as u64,
            rated_count: row.rated_count as u64,
            has_data: row.rated_count > 0,
            mean_color: color_for_value(row.mean, &state.config.color),
            vote_heat: row.vote_heat,
            vote_heat_color: vote_heat_color(row.vote_heat),
        })
        .collect();

    Json(stats).into_response()
}

pub async fn get_show_trend(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<String>,
) -> impl IntoResponse {
    let show_data = match load_cached_show(&state, &show_id) {
        Ok(Some(data)) => data,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, "Show data not ingested").into_response();
        }
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Cache Error: {}", e))
                .into_response();
        }
    };

    let seasons: Vec<SeasonTrendRow> = show_data
        .iter()
        .enumerate()
        .map(|(index, season)| {
            let trend = season_trend(season);
            SeasonTrendRow {
                season: (index + 1) as u32,
                slope: trend.as_ref().map(|line| line.slope),
                intercept: trend.as_ref().map(|line| line.intercept),
            }
        })
        .collect();

    Json(TrendResponse {
        id: show_id,
        seasons,
    })
    .into_response()
}

// --- Helper Functions ---

fn load_cached_show(state: &AppState, show_id: &str) -> anyhow::Result<Option<ShowData>> {
    let Some(value) = state.cache.load_raw(show_id)? else {
        return Ok(None);
    };

    let compact: CompactShowData = serde_json::from_value(value)?;
    Ok(Some(decode_show(compact)))
}

fn resolve_mode(state: &AppState, requested: Option<&str>) -> RatingMode {
    match requested {
        Some("adjusted") => RatingMode::Adjusted,
        Some("raw") => RatingMode::Raw,
        _ => state.prefs.load().rating_mode,
    }
}

fn lookup_title(state: &AppState, show_id: &str) -> String {
    state
        .pool
        .get()
        .ok()
        .and_then(|mut conn| database::shows::get_show(&mut conn, show_id).ok().flatten())
        .map(|show| show.title)
        .unwrap_or_else(|| show_id.to_string())
}

fn build_cell(state: &AppState, episode: &Episode, mode: RatingMode) -> EpisodeCell {
    let raw = episode.rating.value();
    let adjusted = adjusted_rating(&episode.rating, episode.votes, &state.config.adjust);

    let display = match mode {
        RatingMode::Adjusted => adjusted.or(raw),
        RatingMode::Raw => raw,
    };

    let color = match display {
        Some(value) => color_for_value(value, &state.config.color),
        None => color_for_rating(&episode.rating, &state.config.color),
    };

    EpisodeCell {
        episode: episode.number,
        rating: raw,
        adjusted_rating: adjusted,
        display_rating: display,
        votes: episode.votes,
        imdb_url: episode
            .external_id
            .as_ref()
            .map(|id| format!("{}{}/", state.config.dataset.imdb_title_url, id)),
        missing: episode.rating == Rating::Missing,
        placeholder: episode.rating == Rating::Placeholder,
        color,
    }
}

fn build_stats_rows(state: &AppState, show_data: &ShowData) -> Vec<SeasonStatsRow> {
    let per_season: Vec<_> = show_data.iter().map(|season| season_stats(season)).collect();

    let totals: Vec<u64> = per_season.iter().map(|stats| stats.total_votes).collect();
    let heat = vote_heat_scale(&totals);

    per_season
        .into_iter()
        .zip(heat)
        .enumerate()
        .map(|(index, (stats, vote_heat))| SeasonStatsRow {
            season: (index + 1) as u32,
            mean: stats.mean,
            weighted_mean: stats.weighted_mean,
            median: stats.median,
            stddev: stats.stddev,
            total_votes: stats.total_votes,
            rated_count: stats.rated_count as u64,
            has_data: stats.has_data(),
            mean_color: color_for_value(stats.mean, &state.config.color),
            vote_heat,
            vote_heat_color: vote_heat_color(vote_heat),
        })
        .collect()
}
