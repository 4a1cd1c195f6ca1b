use serde::Deserialize;

use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::database::DbPool;
use crate::prefs::PreferencesStore;

pub mod prefs;
pub mod shows;

pub struct AppState {
    pub pool: DbPool,
    pub cache: Cache,
    pub prefs: PreferencesStore,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct ShowParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
}

#[derive(Deserialize)]
pub struct HeatmapParams {
    pub mode: Option<String>,
}
