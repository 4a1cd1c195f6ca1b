use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::cache::Cache;
use crate::database::{self, DbConn, DbSeasonStats};
use crate::domain::{CatalogTier, CompactShowData, ShowData, ShowMetadata, decode_show};
use crate::rating::{season_stats, vote_heat_scale};

pub struct ProcessingService {
    cache: Cache,
}

impl ProcessingService {
    pub fn new() -> Result<Self> {
        Ok(Self {
            cache: Cache::new("cache")?,
        })
    }

    pub fn run(&self) -> Result<()> {
        let db_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "series_heatmap.db".to_string());
        let temp_db_path = format!("{}.tmp", db_path);

        info!("=== Starting Data Processing (Atomic) ===\n");
        info!("Target DB: {}, Temp DB: {}", db_path, temp_db_path);

        // Clean up previous temp file if exists
        if std::path::Path::new(&temp_db_path).exists() {
            std::fs::remove_file(&temp_db_path)?;
        }

        // Process to temp DB
        self.process_to_db(&temp_db_path)?;

        // Atomic swap
        std::fs::rename(&temp_db_path, &db_path)?;
        info!("Successfully swapped database to {}", db_path);

        info!("=== Processing Complete ===");
        Ok(())
    }

    fn process_to_db(&self, db_path: &str) -> Result<()> {
        let pool = database::create_pool(db_path)?;
        let mut conn = database::get_connection(&pool)?;

        database::setup::reset_database(&mut conn)?;
        info!("  → Database schema reset\n");

        let catalog = self.load_catalog_from_cache()?;
        info!("  → Loaded catalog with {} shows from cache\n", catalog.len());

        let (processed, skipped) = self.process_shows(&mut conn, &catalog)?;
        info!(
            "  → Aggregated {} shows ({} without cached episode data)\n",
            processed, skipped
        );

        Ok(())
    }

    fn load_catalog_from_cache(&self) -> Result<Vec<ShowMetadata>> {
        // Whichever tier was ingested last wins; expanded supersedes lite
        for tier in [CatalogTier::Expanded, CatalogTier::Lite] {
            let key = format!("catalog-{}", tier.as_str());
            if let Some(catalog) = self.cache.load_parsed(&key)? {
                return Ok(catalog);
            }
        }

        anyhow::bail!("No catalog found in cache; run ingest first")
    }

    fn process_shows(
        &self,
        conn: &mut DbConn,
        catalog: &[ShowMetadata],
    ) -> Result<(usize, usize)> {
        let fetched_at = Utc::now().naive_utc();
        let mut processed = 0;
        let mut skipped = 0;

        for (idx, show) in catalog.iter().enumerate() {
            if (idx + 1) % 100 == 0 || idx + 1 == catalog.len() {
                info!("  Processing show {}/{}", idx + 1, catalog.len());
            }

            let Some(show_data) = self.load_show_from_cache(&show.id)? else {
                skipped += 1;
                continue;
            };

            database::shows::upsert_show(
                conn,
                &show.id,
                &show.title,
                show.rating,
                show.votes.map(|votes| votes as i64),
                show_data.len() as i64,
                fetched_at,
            )?;

            let stats_rows = build_season_rows(&show.id, &show_data);
            database::season_stats::replace_for_show(conn, &show.id, &stats_rows)?;

            processed += 1;
        }

        Ok((processed, skipped))
    }

    fn load_show_from_cache(&self, show_id: &str) -> Result<Option<ShowData>> {
        let Some(value) = self.cache.load_raw(show_id)? else {
            return Ok(None);
        };

        let compact: CompactShowData = serde_json::from_value(value)
            .with_context(|| format!("Failed to map compact episode JSON for {}", show_id))?;

        Ok(Some(decode_show(compact)))
    }
}

fn build_season_rows(show_id: &str, show_data: &ShowData) -> Vec<DbSeasonStats> {
    let per_season: Vec<_> = show_data.iter().map(|season| season_stats(season)).collect();

    let totals: Vec<u64> = per_season.iter().map(|stats| stats.total_votes).collect();
    let heat = vote_heat_scale(&totals);

    per_season
        .into_iter()
        .zip(heat)
        .enumerate()
        .map(|(index, (stats, vote_heat))| DbSeasonStats {
            show_id: show_id.to_string(),
            season_number: (index + 1) as i64,
            mean: stats.mean,
            weighted_mean: stats.weighted_mean,
            median: stats.median,
            stddev: stats.stddev,
            total_votes: stats.total_votes as i64,
            rated_count: stats.rated_count as i64,
            vote_heat,
        })
        .collect()
}
