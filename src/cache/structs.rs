use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache for dataset downloads, in two tiers: `raw` holds the
/// upstream JSON exactly as fetched (per-show files keyed by show id, plus
/// the catalog files), `parsed` holds data already mapped into domain
/// structures. Keeping the raw tier means a schema change never forces a
/// re-download.
pub struct Cache {
    cache_dir: PathBuf,
    raw_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        let raw_dir = cache_dir.join("raw");
        let parsed_dir = cache_dir.join("parsed");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;
        fs::create_dir_all(&parsed_dir).context("Failed to create parsed cache directory")?;

        Ok(Self {
            cache_dir,
            raw_dir,
            parsed_dir,
        })
    }

    /// Save an upstream JSON payload under its key (show id or catalog name)
    pub fn save_raw(&self, key: &str, data: &Value) -> Result<()> {
        let file_path = self.build_raw_path(key);
        self.write_json(&file_path, data)?;
        info!("Saved raw data to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        self.read_json_opt(&self.build_raw_path(key))
    }

    pub fn has_raw(&self, key: &str) -> bool {
        self.build_raw_path(key).exists()
    }

    pub fn save_parsed<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_parsed_path(key);
        self.write_json(&file_path, data)?;
        info!("Saved parsed data to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        self.read_json_opt(&self.build_parsed_path(key))
    }

    /// Drop everything, both tiers
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.cache_dir).context("Failed to clear cache")?;
        fs::create_dir_all(&self.raw_dir).context("Failed to recreate raw cache directory")?;
        fs::create_dir_all(&self.parsed_dir)
            .context("Failed to recreate parsed cache directory")?;

        info!("Cleared cache directory");
        Ok(())
    }

    // --- Helper Methods ---

    fn build_raw_path(&self, key: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.json", key))
    }

    fn build_parsed_path(&self, key: &str) -> PathBuf {
        self.parsed_dir.join(format!("{}.json", key))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                &json[..json.len().min(200)]
            )
        })?;
        Ok(Some(data))
    }
}
