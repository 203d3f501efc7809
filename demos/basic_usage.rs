//! Basic usage example for hazardscope
//!
//! This example demonstrates how to:
//! - Load the disaster datasets
//! - Walk the country/year selectors
//! - Build the per-selection metrics card
//! - Resolve free-text locations to coordinates
//! - Use the caching mechanism
//!
//! Pass the data directory as the first argument (default: `data`).

use hazardscope::prelude::*;

fn main() -> Result<()> {
    println!("=== hazardscope Basic Usage Example ===\n");

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());

    // Load the datasets
    println!("Loading datasets from {data_dir}...");
    let store = DisasterStore::load_from_dir(&data_dir)?;
    let stats = store.stats();
    println!(
        "✓ Loaded {} events, {} reference points\n",
        stats.events, stats.reference_points
    );

    // Example 1: The country dropdown
    println!("--- Example 1: List countries ---");
    let countries = store.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, country);
    }
    if countries.len() > 5 {
        println!("... and {} more", countries.len() - 5);
    }
    println!();

    // Example 2: The year dropdown and its default
    println!("--- Example 2: Years for the default country ---");
    if let Some(country) = store.default_country() {
        let years = store.years_for(country);
        println!("{country}: {} years with events", years.len());
        if let Some(year) = store.default_year(country) {
            println!("Default selection: {country} / {year}");
        }
    }
    println!();

    // Example 3: Metrics card for the default selection
    println!("--- Example 3: Metrics card ---");
    if let Some((country, year)) = store
        .default_country()
        .map(str::to_string)
        .and_then(|c| store.default_year(&c).map(|y| (c, y)))
    {
        match charts::metrics_card(&store, &country, year) {
            ChartData::Ready(card) => {
                println!("{} — {}", card.country, card.year);
                println!("  Events: {}", card.events);
                if let Some(deaths) = card.total_deaths {
                    println!("  Total deaths: {deaths:.0}");
                }
                if let Some(damage) = card.total_damage_thousands_usd {
                    println!("  Total damage: {damage:.0} ('000 US$)");
                }
            }
            ChartData::Insufficient(reason) => println!("Nothing to show: {reason}"),
        }
    }
    println!();

    // Example 4: Resolving free-text locations
    println!("--- Example 4: Location resolution ---");
    if let Some(country) = store.default_country() {
        let gazetteer = CountryGazetteer::build(&store.reference, country);
        println!(
            "Gazetteer for {country}: {} cities, {} states",
            gazetteer.city_count(),
            gazetteer.state_count()
        );
        for text in ["Near the capital district", "Nowhere That Exists"] {
            match gazetteer.resolve(Some(text)) {
                Some(place) => println!(
                    "  {text:?} → {} ({:.3}, {:.3})",
                    place.name, place.latitude, place.longitude
                ),
                None => println!("  {text:?} → no match"),
            }
        }
    }
    println!();

    // Example 5: The binary cache
    println!("--- Example 5: Cache usage ---");
    println!("Second load (from cache):");
    let start = std::time::Instant::now();
    let _again = DisasterStore::load_from_dir(&data_dir)?;
    println!("Time: {:?}", start.elapsed());

    Ok(())
}
