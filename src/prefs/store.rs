use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CatalogTier, RatingMode, ShowMetadata};

const MAX_RECENTLY_VIEWED: usize = 10;

/// User preferences: starred shows, recently viewed history, and the catalog
/// tier / rating mode toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub starred: Vec<ShowMetadata>,
    pub recently_viewed: Vec<ShowMetadata>,
    pub catalog_tier: CatalogTier,
    pub rating_mode: RatingMode,
}

impl Preferences {
    pub fn is_starred(&self, id: &str) -> bool {
        self.starred.iter().any(|show| show.id == id)
    }
}

/// JSON-file-backed store for [`Preferences`].
///
/// Every mutation is load-modify-save; a missing or unreadable file loads as
/// defaults so a corrupt preferences file never takes the app down.
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Preferences {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Preferences::default();
        };

        match serde_json::from_str(&json) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(
                    "Discarding unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                );
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create preferences directory")?;
        }

        let json = serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        fs::write(&self.path, json).context("Failed to write preferences file")?;
        Ok(())
    }

    /// Star the show if it isn't starred, unstar it if it is
    pub fn toggle_star(&self, show: &ShowMetadata) -> Result<Preferences> {
        let mut prefs = self.load();

        if prefs.is_starred(&show.id) {
            prefs.starred.retain(|starred| starred.id != show.id);
        } else {
            prefs.starred.push(show.clone());
        }

        self.save(&prefs)?;
        Ok(prefs)
    }

    /// Move a starred show from one list position to another
    pub fn reorder_starred(&self, from: usize, to: usize) -> Result<Preferences> {
        let mut prefs = self.load();

        if from < prefs.starred.len() && to < prefs.starred.len() {
            let show = prefs.starred.remove(from);
            prefs.starred.insert(to, show);
            self.save(&prefs)?;
        }

        Ok(prefs)
    }

    /// Push a show to the front of the recently-viewed list, deduplicated
    /// and capped at the history limit
    pub fn record_view(&self, show: &ShowMetadata) -> Result<Preferences> {
        let mut prefs = self.load();

        prefs.recently_viewed.retain(|viewed| viewed.id != show.id);
        prefs.recently_viewed.insert(0, show.clone());
        prefs.recently_viewed.truncate(MAX_RECENTLY_VIEWED);

        self.save(&prefs)?;
        Ok(prefs)
    }

    pub fn set_tier(&self, tier: CatalogTier) -> Result<Preferences> {
        let mut prefs = self.load();
        prefs.catalog_tier = tier;
        self.save(&prefs)?;
        Ok(prefs)
    }

    pub fn set_mode(&self, mode: RatingMode) -> Result<Preferences> {
        let mut prefs = self.load();
        prefs.rating_mode = mode;
        self.save(&prefs)?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> PreferencesStore {
        let path = std::env::temp_dir()
            .join(format!("series-heatmap-prefs-{}-{}", std::process::id(), name));
        let _ = fs::remove_file(&path);
        PreferencesStore::new(path)
    }

    fn show(id: &str) -> ShowMetadata {
        ShowMetadata {
            id: id.to_string(),
            title: format!("Show {}", id),
            rating: None,
            votes: None,
        }
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let store = temp_store("defaults");
        let prefs = store.load();

        assert!(prefs.starred.is_empty());
        assert!(prefs.recently_viewed.is_empty());
        assert_eq!(prefs.catalog_tier, CatalogTier::Lite);
        assert_eq!(prefs.rating_mode, RatingMode::Raw);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "not json {").unwrap();

        let prefs = store.load();
        assert!(prefs.starred.is_empty());
    }

    #[test]
    fn test_toggle_star_round_trip() {
        let store = temp_store("star");

        let prefs = store.toggle_star(&show("tt1")).unwrap();
        assert!(prefs.is_starred("tt1"));

        let prefs = store.toggle_star(&show("tt1")).unwrap();
        assert!(!prefs.is_starred("tt1"));
        assert!(store.load().starred.is_empty());
    }

    #[test]
    fn test_reorder_starred_moves_entries() {
        let store = temp_store("reorder");
        store.toggle_star(&show("tt1")).unwrap();
        store.toggle_star(&show("tt2")).unwrap();
        store.toggle_star(&show("tt3")).unwrap();

        let prefs = store.reorder_starred(0, 2).unwrap();
        let order: Vec<&str> = prefs.starred.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["tt2", "tt3", "tt1"]);
    }

    #[test]
    fn test_reorder_out_of_bounds_is_a_no_op() {
        let store = temp_store("reorder-oob");
        store.toggle_star(&show("tt1")).unwrap();

        let prefs = store.reorder_starred(0, 5).unwrap();
        assert_eq!(prefs.starred.len(), 1);
    }

    #[test]
    fn test_recently_viewed_dedupes_and_caps() {
        let store = temp_store("recent");

        for i in 0..12 {
            store.record_view(&show(&format!("tt{}", i))).unwrap();
        }
        let prefs = store.record_view(&show("tt5")).unwrap();

        assert_eq!(prefs.recently_viewed.len(), MAX_RECENTLY_VIEWED);
        assert_eq!(prefs.recently_viewed[0].id, "tt5");
        // tt5 was moved to the front, not duplicated
        let count = prefs
            .recently_viewed
            .iter()
            .filter(|s| s.id == "tt5")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_tier_and_mode_persist() {
        let store = temp_store("toggles");

        store.set_tier(CatalogTier::Expanded).unwrap();
        store.set_mode(RatingMode::Adjusted).unwrap();

        let prefs = store.load();
        assert_eq!(prefs.catalog_tier, CatalogTier::Expanded);
        assert_eq!(prefs.rating_mode, RatingMode::Adjusted);
    }
}
