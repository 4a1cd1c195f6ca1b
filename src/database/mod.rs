pub mod connection;
pub mod models;
pub mod season_stats;
pub mod setup;
pub mod shows;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use models::*;
