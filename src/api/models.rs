use serde::Serialize;

use crate::rating::ColorResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowListItem {
    pub id: String,
    pub title: String,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub season_count: i64,
    pub starred: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeCell {
    pub episode: u32,
    pub rating: Option<f64>,
    pub adjusted_rating: Option<f64>,
    /// The value the cell renders under the active mode (adjusted falls back
    /// to raw when no adjustment is defined)
    pub display_rating: Option<f64>,
    pub votes: Option<u32>,
    pub imdb_url: Option<String>,
    pub missing: bool,
    pub placeholder: bool,
    #[serde(flatten)]
    pub color: ColorResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRow {
    pub season: u32,
    pub episodes: Vec<EpisodeCell>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatsRow {
    pub season: u32,
    pub mean: f64,
    pub weighted_mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub total_votes: u64,
    pub rated_count: u64,
    pub has_data: bool,
    pub mean_color: ColorResult,
    pub vote_heat: f64,
    pub vote_heat_color: ColorResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    pub id: String,
    pub title: String,
    pub mode: String,
    pub seasons: Vec<SeasonRow>,
    pub stats: Vec<SeasonStatsRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTrendRow {
    pub season: u32,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub id: String,
    pub seasons: Vec<SeasonTrendRow>,
}
