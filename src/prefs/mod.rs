pub mod store;

pub use store::{Preferences, PreferencesStore};
