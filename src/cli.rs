use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::CatalogTier;

#[derive(Parser, Debug)]
#[command(author, version, about = "series-heatmap backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch the show catalog and episode data into the cache
    Ingest {
        /// Fetch specific show IDs only (e.g. tt0903747)
        #[arg(long = "show")]
        shows: Vec<String>,
        /// Number of catalog shows to fetch when no explicit IDs are given
        #[arg(short = 'n', long, default_value_t = 2500)]
        num_shows: usize,
        /// Catalog tier to ingest
        #[arg(long, value_enum, default_value = "lite")]
        tier: TierArg,
    },
    /// Aggregate cached episode data into season statistics
    Process,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum TierArg {
    Lite,
    Expanded,
}

impl TierArg {
    pub fn to_tier(self) -> CatalogTier {
        match self {
            TierArg::Lite => CatalogTier::Lite,
            TierArg::Expanded => CatalogTier::Expanded,
        }
    }
}
