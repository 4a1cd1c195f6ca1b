use anyhow::Result;
use log::{info, warn};

use crate::api::DatasetClient;
use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::domain::{CatalogTier, FetchProgress, ShowMetadata};

pub struct IngestionService {
    cache: Cache,
    client: DatasetClient,
}

impl IngestionService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::new("cache")?,
            client: DatasetClient::new(config.dataset)?,
        })
    }

    pub async fn run(
        &mut self,
        tier: CatalogTier,
        num_shows: usize,
        explicit_shows: &[String],
    ) -> Result<()> {
        info!("=== Starting Data Ingestion ===\n");

        // Step 1: Fetch the catalog
        let catalog = self.fetch_catalog(tier).await?;
        info!("  → Catalog lists {} shows\n", catalog.len());

        // Step 2: Pick the shows to download
        let targets = select_targets(&catalog, num_shows, explicit_shows);
        info!("  → Downloading data for {} shows\n", targets.len());

        // Step 3: Fetch per-show episode data into the raw cache
        let failed = self.fetch_shows(&targets).await?;

        // Step 4: Save the parsed catalog for processing
        self.save_parsed_catalog(tier, &catalog)?;
        info!("  → Saved parsed catalog\n");

        if failed > 0 {
            warn!("{} shows failed to download and were skipped", failed);
        }
        info!("=== Ingestion Complete ===");
        Ok(())
    }

    async fn fetch_catalog(&mut self, tier: CatalogTier) -> Result<Vec<ShowMetadata>> {
        info!("Step 1: Fetching {} catalog...", tier.as_str());
        self.client.fetch_catalog(tier, &self.cache).await
    }

    async fn fetch_shows(&mut self, targets: &[String]) -> Result<usize> {
        info!("Step 3: Fetching episode data...");

        let mut progress = FetchProgress::new(targets.len());

        for show_id in targets {
            let was_cached = self.cache.has_raw(show_id);

            match self.client.fetch_show(show_id, &self.cache).await? {
                Some(_) if was_cached => progress.increment_cached(),
                Some(_) => progress.increment_fetched(),
                None => progress.increment_failed(),
            }
        }

        Ok(progress.failed_count())
    }

    fn save_parsed_catalog(&self, tier: CatalogTier, catalog: &[ShowMetadata]) -> Result<()> {
        let key = format!("catalog-{}", tier.as_str());
        self.cache.save_parsed(&key, &catalog)
    }
}

fn select_targets(
    catalog: &[ShowMetadata],
    num_shows: usize,
    explicit_shows: &[String],
) -> Vec<String> {
    if !explicit_shows.is_empty() {
        return explicit_shows.to_vec();
    }

    // The catalog is published in descending vote order, so the first N are
    // the most-voted shows
    catalog
        .iter()
        .take(num_shows)
        .map(|show| show.id.clone())
        .collect()
}
