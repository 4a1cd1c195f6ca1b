use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct DbShow {
    pub id: String,
    pub title: String,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub season_count: i64,
    pub fetched_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct DbSeasonStats {
    pub show_id: String,
    pub season_number: i64,
    pub mean: f64,
    pub weighted_mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub total_votes: i64,
    pub rated_count: i64,
    pub vote_heat: f64,
}

#[derive(Debug, Clone)]
pub enum SortColumn {
    Title,
    Rating,
    Votes,
}

#[derive(Debug, Clone)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct ShowFilter {
    pub title_contains: Option<String>,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
    pub limit: usize,
    pub offset: usize,
}
