//! Error handling example for hazardscope
//!
//! This example demonstrates proper error handling and edge cases.

use hazardscope::prelude::*;

fn main() -> Result<()> {
    println!("=== hazardscope Error Handling Example ===\n");

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());

    // Example 1: Loading from a directory that doesn't exist
    println!("--- Example 1: Missing data directory ---");
    match DisasterStore::load_from_dir("definitely/not/here") {
        Ok(_) => println!("  Unexpectedly loaded something"),
        Err(HazardError::DatasetMissing { name, path }) => {
            println!("  ✗ Dataset `{name}` missing (looked for {})", path.display());
        }
        Err(e) => println!("  ✗ Failed differently: {e}"),
    }
    println!();

    // Example 2: Loading the real datasets with error handling
    println!("--- Example 2: Loading with error handling ---");
    let store = match DisasterStore::load_from_dir(&data_dir) {
        Ok(store) => {
            println!("  ✓ Datasets loaded successfully");
            println!("  Events: {}", store.stats().events);
            store
        }
        Err(e) => {
            eprintln!("  ✗ Failed to load datasets: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 3: Selections that match nothing are outcomes, not errors
    println!("--- Example 3: Empty selections ---");
    match charts::metrics_card(&store, "Atlantis", 1900) {
        ChartData::Ready(_) => println!("  Unexpectedly found data"),
        ChartData::Insufficient(reason) => println!("  Placeholder: {reason}"),
    }
    println!();

    // Example 4: The resolver never fails, it just declines
    println!("--- Example 4: Resolver edge cases ---");
    let gazetteer = CountryGazetteer::build(&store.reference, "Atlantis");
    println!("  Gazetteer empty: {}", gazetteer.is_empty());
    for text in [None, Some(""), Some("(only an aside)"), Some("Somewhere")] {
        match gazetteer.resolve(text) {
            Some(place) => println!("  {text:?} → {}", place.name),
            None => println!("  {text:?} → no match"),
        }
    }

    Ok(())
}
