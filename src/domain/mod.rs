pub mod compact;
pub mod models;
pub mod progress;

pub use compact::{CompactShowData, decode_show};
pub use models::{CatalogTier, Episode, Rating, RatingMode, Season, ShowData, ShowMetadata};
pub use progress::FetchProgress;
