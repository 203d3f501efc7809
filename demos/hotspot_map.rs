//! Hotspot map example for hazardscope
//!
//! Builds the map layer for one country-year and prints the markers the
//! way a map front end would consume them.
//!
//! Usage: `cargo run --example hotspot_map -- [data-dir] [country] [year]`

use hazardscope::prelude::*;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "data".to_string());

    let store = DisasterStore::load_from_dir(&data_dir)?;

    let country = args
        .next()
        .or_else(|| store.default_country().map(str::to_string))
        .unwrap_or_else(|| "India".to_string());
    let year = args
        .next()
        .and_then(|y| y.parse().ok())
        .or_else(|| store.default_year(&country))
        .unwrap_or(2010);

    let gazetteer = CountryGazetteer::build(&store.reference, &country);
    println!(
        "Gazetteer for {country}: {} cities, {} states",
        gazetteer.city_count(),
        gazetteer.state_count()
    );

    match charts::hotspot_map(&store, &gazetteer, &country, year, 1.0) {
        ChartData::Insufficient(reason) => println!("Nothing to plot: {reason}"),
        ChartData::Ready(map) => {
            println!(
                "\nNatural disasters in {} ({}) — {} plotted, {} unresolved",
                map.country,
                map.year,
                map.markers.len(),
                map.unresolved
            );
            println!(
                "Center {:.2}, {:.2} at zoom {}",
                map.center.0, map.center.1, map.zoom
            );
            for marker in &map.markers {
                let source = match &marker.source {
                    charts::MarkerSource::Direct => "direct coordinates".to_string(),
                    charts::MarkerSource::Resolved { name } => format!("matched {name}"),
                };
                println!(
                    "  {:<16} {:>7.0} deaths  size {:>5.1}  ({:.3}, {:.3})  {}",
                    marker.disaster_type,
                    marker.deaths,
                    marker.size,
                    marker.latitude,
                    marker.longitude,
                    source
                );
            }
        }
    }

    Ok(())
}
