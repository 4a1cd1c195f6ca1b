use serde::{Deserialize, Serialize};

/// Per-episode rating state.
///
/// The upstream data conflates two kinds of "no rating": an episode that is
/// absent from the dataset entirely (unaired or unscraped) and an episode
/// carried as a placeholder with the value 0. IMDb never displays a rating of
/// exactly 0 for a rated title, so 0 is safe to reserve as the placeholder
/// marker; `from_raw` relies on that.
#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    Missing,
    Placeholder,
    Rated(f64),
}

impl Rating {
    pub fn from_raw(raw: Option<f64>) -> Self {
        match raw {
            None => Rating::Missing,
            Some(value) if value <= 0.0 => Rating::Placeholder,
            Some(value) => Rating::Rated(value),
        }
    }

    /// The rating value, if this episode actually has one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Rating::Rated(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_rated(&self) -> bool {
        matches!(self, Rating::Rated(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// 1-based episode number. Authoritative: positions in a season list may
    /// have gaps, the number is what identifies the episode.
    pub number: u32,
    pub rating: Rating,
    pub votes: Option<u32>,
    pub external_id: Option<String>,
}

impl Episode {
    pub fn missing(number: u32) -> Self {
        Self {
            number,
            rating: Rating::Missing,
            votes: None,
            external_id: None,
        }
    }
}

pub type Season = Vec<Episode>;
pub type ShowData = Vec<Season>;

/// Catalog entry for one show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowMetadata {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTier {
    Lite,
    Expanded,
}

impl CatalogTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogTier::Lite => "lite",
            CatalogTier::Expanded => "expanded",
        }
    }

    /// Catalog file name published for this tier
    pub fn file_name(&self) -> &'static str {
        match self {
            CatalogTier::Lite => "titleId-lite.json",
            CatalogTier::Expanded => "titleId-expanded.json",
        }
    }
}

impl Default for CatalogTier {
    fn default() -> Self {
        CatalogTier::Lite
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingMode {
    Raw,
    Adjusted,
}

impl RatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingMode::Raw => "raw",
            RatingMode::Adjusted => "adjusted",
        }
    }
}

impl Default for RatingMode {
    fn default() -> Self {
        RatingMode::Raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_distinguishes_missing_and_placeholder() {
        assert_eq!(Rating::from_raw(None), Rating::Missing);
        assert_eq!(Rating::from_raw(Some(0.0)), Rating::Placeholder);
        assert_eq!(Rating::from_raw(Some(8.3)), Rating::Rated(8.3));
    }

    #[test]
    fn test_only_rated_carries_a_value() {
        assert_eq!(Rating::Missing.value(), None);
        assert_eq!(Rating::Placeholder.value(), None);
        assert_eq!(Rating::Rated(7.1).value(), Some(7.1));
    }
}
