/// Tuning for the confidence adjustment formula.
///
/// The defaults were chosen empirically: at 0 votes the uncertainty factor is
/// exactly 1 (full pull to baseline) and it decays slowly enough that only
/// episodes with thousands of votes keep their raw rating nearly unchanged.
#[derive(Debug, Clone)]
pub struct AdjustSettings {
    pub baseline: f64,
    pub log_base: f64,
    pub halving_factor: f64,
}

impl Default for AdjustSettings {
    fn default() -> Self {
        Self {
            baseline: 7.0,
            log_base: 8.0,
            halving_factor: 2.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColorSettings {
    pub rating_cutoff: f64,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            rating_cutoff: 6.0,
            min_rating: 0.0,
            max_rating: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetSettings {
    pub data_base_url: &'static str,
    pub imdb_title_url: &'static str,
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            data_base_url: "https://amterp.github.io/imdb-ratings/data",
            imdb_title_url: "https://www.imdb.com/title/",
            rate_limit_ms: 100, // 10 req/sec
            user_agent: "SeriesHeatmap/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub adjust: AdjustSettings,
    pub color: ColorSettings,
    pub dataset: DatasetSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            adjust: AdjustSettings::default(),
            color: ColorSettings::default(),
            dataset: DatasetSettings::default(),
        }
    }
}
