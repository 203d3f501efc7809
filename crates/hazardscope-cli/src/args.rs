use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for hazardscope
#[derive(Debug, Parser)]
#[command(
    name = "hazardscope",
    version,
    about = "CLI for querying the hazardscope disaster datasets"
)]
pub struct CliArgs {
    /// Directory containing the dataset files (cities.csv, risk_events.csv, ...)
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Emit JSON instead of the human-readable listing, where supported
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded datasets
    Stats,

    /// List all countries with recorded events
    Countries,

    /// List the years with events for a country
    Years {
        /// Country name as it appears in the event table
        country: String,
    },

    /// Key metrics and rankings for a country-year
    Summary {
        country: String,
        year: i32,
    },

    /// Resolve a free-text location against a country's reference places
    Resolve {
        country: String,
        /// Location description, e.g. "Near Pune District, Maharashtra"
        location: Vec<String>,
        /// Minimum fuzzy-similarity score (0-100) to accept a match
        #[arg(short, long, default_value_t = hazardscope_core::DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Hotspot-map marker table for a country-year
    Map {
        country: String,
        year: i32,
        /// Only include events with at least this many deaths
        #[arg(long = "min-deaths", default_value_t = 1.0)]
        min_deaths: f64,
    },

    /// Disaster-type breakdown for a country, optionally one year
    Breakdown {
        country: String,
        #[arg(short, long)]
        year: Option<i32>,
    },
}
