use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Timelike, Utc};
use log::{info, warn};
use serde_json::Value;

use crate::cache::Cache;
use crate::config::settings::DatasetSettings;
use crate::domain::{CatalogTier, CompactShowData, ShowData, ShowMetadata, decode_show};
use crate::http::RateLimitedClient;

/// Client for the published ratings dataset: the per-tier catalog files and
/// one compact JSON file per show.
pub struct DatasetClient {
    client: RateLimitedClient,
    settings: DatasetSettings,
}

impl DatasetClient {
    pub fn new(settings: DatasetSettings) -> Result<Self> {
        let client = RateLimitedClient::new(&settings)?;
        Ok(Self { client, settings })
    }

    /// Fetch the show catalog for a tier, going through the raw cache
    pub async fn fetch_catalog(
        &mut self,
        tier: CatalogTier,
        cache: &Cache,
    ) -> Result<Vec<ShowMetadata>> {
        let key = format!("catalog-{}", tier.as_str());

        let json_value = if let Some(value) = cache.load_raw(&key)? {
            value
        } else {
            let url = self.build_catalog_url(tier);
            info!("Fetching {} catalog from {}", tier.as_str(), url);
            let value = self.fetch_json(&url).await?;

            if let Err(e) = cache.save_raw(&key, &value) {
                warn!("Failed to cache {} catalog: {:?}", tier.as_str(), e);
            }

            value
        };

        serde_json::from_value(json_value)
            .with_context(|| format!("Failed to map {} catalog JSON", tier.as_str()))
    }

    /// Fetch one show's episode data with cache integration.
    ///
    /// The raw compact JSON is cached exactly as received; decoding happens
    /// on every load so the cached file stays schema-agnostic. A failed
    /// download is logged and skipped rather than aborting a whole ingest
    /// run.
    pub async fn fetch_show(&mut self, show_id: &str, cache: &Cache) -> Result<Option<ShowData>> {
        let cached_value = cache.load_raw(show_id)?;

        let json_value = if let Some(value) = cached_value {
            value
        } else {
            let url = self.build_show_url(show_id);
            let value = match self.fetch_json(&url).await {
                Ok(value) => value,
                Err(e) => {
                    log::error!("Failed to fetch show {}: {:?}", show_id, e);
                    return Ok(None);
                }
            };

            if let Err(e) = cache.save_raw(show_id, &value) {
                warn!("Failed to cache show {}: {:?}", show_id, e);
            }

            value
        };

        let compact: CompactShowData = serde_json::from_value(json_value)
            .with_context(|| format!("Failed to map compact episode JSON for {}", show_id))?;

        Ok(Some(decode_show(compact)))
    }

    // --- Helper Methods ---

    async fn fetch_json(&mut self, url: &str) -> Result<Value> {
        let text = self.client.get_text(url).await?;
        serde_json::from_str(&text).with_context(|| format!("Invalid JSON from {}", url))
    }

    fn build_catalog_url(&self, tier: CatalogTier) -> String {
        format!(
            "{}/{}{}",
            self.settings.data_base_url,
            tier.file_name(),
            cache_busting_suffix(Utc::now())
        )
    }

    fn build_show_url(&self, show_id: &str) -> String {
        format!(
            "{}/{}.json{}",
            self.settings.data_base_url,
            show_id,
            cache_busting_suffix(Utc::now())
        )
    }
}

/// Daily cache-busting token, lagging 8 hours behind midnight UTC so the
/// upstream publisher has time to finish its refresh before clients start
/// requesting the new day's files.
fn cache_busting_suffix(now: DateTime<Utc>) -> String {
    let mut day = now.day() as i64;
    if now.hour() < 8 {
        day -= 1;
    }

    format!("?nocache={}{}{}", now.year(), now.month0(), day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_suffix_is_stable_within_a_day() {
        let morning = Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 5, 20, 23, 59, 0).unwrap();

        assert_eq!(cache_busting_suffix(morning), cache_busting_suffix(evening));
        assert_eq!(cache_busting_suffix(morning), "?nocache=2024420");
    }

    #[test]
    fn test_suffix_holds_previous_day_before_the_grace_hour() {
        let late = Utc.with_ymd_and_hms(2024, 5, 19, 22, 0, 0).unwrap();
        let early_next = Utc.with_ymd_and_hms(2024, 5, 20, 3, 0, 0).unwrap();
        let after_grace = Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();

        assert_eq!(cache_busting_suffix(late), cache_busting_suffix(early_next));
        assert_ne!(cache_busting_suffix(late), cache_busting_suffix(after_grace));
    }
}
