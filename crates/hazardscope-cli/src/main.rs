//! hazardscope — Command-line interface for hazardscope-core
//!
//! This binary provides a simple way to inspect the disaster datasets from
//! your terminal: overall statistics, the country/year selector lists, the
//! per-selection metrics card, the hotspot-map marker table, and direct
//! access to the location resolver.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ hazardscope stats
//!
//! - List countries / years (the dashboard dropdowns)
//!   $ hazardscope countries
//!   $ hazardscope years India
//!
//! - Key metrics for a selection
//!   $ hazardscope summary India 2010
//!
//! - Resolve a free-text location
//!   $ hazardscope resolve India "Near Pune District, Maharashtra"
//!
//! - Marker table for the hotspot map
//!   $ hazardscope map India 2010 --min-deaths 5
//!
//! Data source
//! -----------
//!
//! All commands read the CSV datasets from `--data-dir` (default `data/`)
//! and keep a binary cache next to them for fast subsequent runs. Set
//! `RUST_LOG=hazardscope_core=debug` to watch the loader work.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use hazardscope_core::charts::{self, ChartData};
use hazardscope_core::{CountryGazetteer, DisasterStore};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let store = DisasterStore::load_from_dir(&args.data_dir)
        .with_context(|| format!("loading datasets from {}", args.data_dir.display()))?;

    match args.command {
        Commands::Stats => {
            let stats = store.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Events: {}", stats.events);
                println!("  Reference points: {}", stats.reference_points);
                println!("  Ranking rows: {}", stats.rankings);
                println!("  Annual impact rows: {}", stats.annual_rows);
            }
        }

        Commands::Countries => {
            let countries = store.countries();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&countries)?);
            } else {
                for country in countries {
                    println!("{country}");
                }
            }
        }

        Commands::Years { country } => {
            let years = store.years_for(&country);
            if years.is_empty() {
                eprintln!("No events recorded for: {country}");
            } else if args.json {
                println!("{}", serde_json::to_string_pretty(&years)?);
            } else {
                for year in years {
                    println!("{year}");
                }
            }
        }

        Commands::Summary { country, year } => {
            match charts::metrics_card(&store, &country, year) {
                ChartData::Insufficient(reason) => eprintln!("{reason}"),
                ChartData::Ready(card) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&card)?);
                    } else {
                        print_summary(&card);
                    }
                }
            }
        }

        Commands::Resolve {
            country,
            location,
            threshold,
        } => {
            let gazetteer = CountryGazetteer::build(&store.reference, &country);
            if gazetteer.is_empty() {
                eprintln!("No reference places found for: {country}");
                return Ok(());
            }
            let text = location.join(" ");
            match gazetteer.resolve_with_threshold(Some(&text), threshold) {
                Some(place) if args.json => {
                    println!("{}", serde_json::to_string_pretty(&place)?)
                }
                Some(place) => println!(
                    "{} — {:.4}, {:.4}",
                    place.name, place.latitude, place.longitude
                ),
                None => println!("No match for: {text}"),
            }
        }

        Commands::Map {
            country,
            year,
            min_deaths,
        } => {
            let gazetteer = CountryGazetteer::build(&store.reference, &country);
            match charts::hotspot_map(&store, &gazetteer, &country, year, min_deaths) {
                ChartData::Insufficient(reason) => eprintln!("{reason}"),
                ChartData::Ready(map) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&map)?);
                    } else {
                        print_map(&map);
                    }
                }
            }
        }

        Commands::Breakdown { country, year } => {
            match charts::type_breakdown(&store, &country, year) {
                ChartData::Insufficient(reason) => eprintln!("{reason}"),
                ChartData::Ready(counts) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&counts)?);
                    } else {
                        for entry in counts.iter().rev() {
                            println!("{:>5}  {}", entry.count, entry.disaster_type);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_summary(card: &charts::MetricsCard) {
    println!("{} — {}", card.country, card.year);
    println!("  Events: {}", card.events);
    if let Some(v) = card.world_risk_index {
        println!("  World Risk Index: {v:.2}");
    }
    if let Some(v) = card.total_deaths {
        println!("  Total deaths: {v:.0}");
    }
    if let Some(v) = card.total_damage_thousands_usd {
        println!("  Total damage: {v:.0} ('000 US$)");
    }
    if let Some(v) = card.total_affected {
        println!("  Total affected: {v:.0}");
    }
    if let Some(v) = card.average_risk_index {
        println!("  Average Risk Index: {v:.2}");
    }
    if let Some(ranks) = &card.ranks {
        let mut parts = Vec::new();
        if let Some(r) = ranks.rank_damages {
            parts.push(format!("damages #{r:.0}"));
        }
        if let Some(r) = ranks.rank_risk {
            parts.push(format!("risk #{r:.0}"));
        }
        if let Some(r) = ranks.rank_gdp {
            parts.push(format!("gdp #{r:.0}"));
        }
        if let Some(r) = ranks.rank_hdi {
            parts.push(format!("hdi #{r:.0}"));
        }
        if let Some(r) = ranks.rank_vulnerability {
            parts.push(format!("vulnerability #{r:.0}"));
        }
        if !parts.is_empty() {
            println!("  Ranks: {}", parts.join(", "));
        }
    }
}

fn print_map(map: &charts::HotspotMap) {
    println!("Natural disasters in {} ({})", map.country, map.year);
    println!(
        "Plotted: {}  Unresolved: {}  Total deaths: {:.0}",
        map.markers.len(),
        map.unresolved,
        map.total_deaths
    );
    println!(
        "Center: {:.2}, {:.2}  Zoom: {}",
        map.center.0, map.center.1, map.zoom
    );
    for marker in &map.markers {
        let source = match &marker.source {
            charts::MarkerSource::Direct => "direct".to_string(),
            charts::MarkerSource::Resolved { name } => format!("≈ {name}"),
        };
        println!(
            "{:<18} {:>8.0} deaths  {:>9.4}, {:>9.4}  {}",
            marker.disaster_type, marker.deaths, marker.latitude, marker.longitude, source
        );
    }
}
