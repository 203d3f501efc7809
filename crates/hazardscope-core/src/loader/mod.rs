// crates/hazardscope-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, CSV parsing, binary
//! cache) and delegates row conversion to [`convert`].
//!
//! Loading is an explicit, one-shot operation: the application startup
//! sequence calls [`DisasterStore::load_from_dir`] once and passes the
//! store by reference to whatever needs it. There are no module-level
//! globals and no "first CSV that fits" fallbacks — every dataset in the
//! [catalog](crate::catalog) must be present or loading fails with a
//! descriptive error.

use crate::catalog::{self, DatasetSpec};
use crate::error::{HazardError, Result};
use crate::model::DisasterStore;
use crate::raw::{AnnualRow, CityRow, EventRow, RankRow};
use bincode::Options;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

mod convert;

/// Binary cache written next to the CSVs after a successful parse.
pub const CACHE_FILENAME: &str = "hazardscope.store.bin";

/// Deserialization cap for the cache; a corrupt file must not become an
/// allocation bomb.
const CACHE_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

impl DisasterStore {
    /// Load every catalog dataset from `dir` and materialize the store.
    ///
    /// A binary cache is consulted first and used when it is newer than
    /// every source file; otherwise the CSVs are parsed and the cache is
    /// rewritten best-effort (a failed cache write never fails the load).
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        if let Some(store) = try_cache(dir) {
            tracing::debug!(path = %cache_path(dir).display(), "store loaded from cache");
            return Ok(store);
        }

        let started = Instant::now();

        let cities: Vec<CityRow> = read_rows(&catalog::CITIES, dir)?;
        let events: Vec<EventRow> = read_rows(&catalog::RISK_EVENTS, dir)?;
        let ranks: Vec<RankRow> = read_rows(&catalog::RANKINGS, dir)?;
        let annual: Vec<AnnualRow> = read_rows(&catalog::ANNUAL_IMPACTS, dir)?;

        let store = DisasterStore {
            reference: convert::reference_points(cities),
            events: convert::events(events),
            rankings: convert::rankings(ranks),
            annual: convert::annual_impacts(annual),
        };

        let stats = store.stats();
        tracing::debug!(
            events = stats.events,
            reference_points = stats.reference_points,
            rankings = stats.rankings,
            annual_rows = stats.annual_rows,
            elapsed = ?started.elapsed(),
            "datasets materialized"
        );

        if let Err(err) = store.write_cache(dir) {
            tracing::debug!(error = %err, "cache write skipped");
        }

        Ok(store)
    }

    /// Serialize the store to the binary cache inside `dir`.
    pub fn write_cache(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = cache_path(dir.as_ref());
        let file = File::create(&path)?;
        bincode_options().serialize_into(file, self)?;
        Ok(())
    }
}

fn cache_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILENAME)
}

fn bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_SIZE_LIMIT)
        .allow_trailing_bytes()
}

/// Use the cache only when it is newer than every located source file.
/// Any structural problem (missing sources, stale mtime, decode failure)
/// silently falls back to the CSVs.
fn try_cache(dir: &Path) -> Option<DisasterStore> {
    let path = cache_path(dir);
    let cache_mtime = mtime(&path)?;

    for spec in &catalog::CATALOG {
        let source = spec.locate(dir).ok()?;
        if mtime(&source)? >= cache_mtime {
            return None;
        }
    }

    let file = File::open(&path).ok()?;
    bincode_options()
        .deserialize_from(BufReader::new(file))
        .ok()
}

fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Open a dataset file, buffered, transparently gunzipping `.gz` files.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// Read one dataset: locate the file, verify the header against the
/// catalog, then deserialize every row.
fn read_rows<T: DeserializeOwned>(spec: &DatasetSpec, dir: &Path) -> Result<Vec<T>> {
    let path = spec.locate(dir)?;
    let stream = open_stream(&path)?;
    let mut reader = csv::Reader::from_reader(stream);

    spec.verify_header(reader.headers()?)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: T = row.map_err(|source| HazardError::MalformedRow {
            dataset: spec.name,
            source,
        })?;
        rows.push(row);
    }
    tracing::debug!(dataset = spec.name, rows = rows.len(), path = %path.display(), "dataset read");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CITIES_CSV: &str = "\
name,state_name,latitude,longitude,country_name
Pune,Maharashtra,18.52,73.86,India
Broken,Maharashtra,not-a-number,73.86,India
Mumbai,Maharashtra,19.08,72.88,India
";

    const EVENTS_CSV: &str = "\
DisNo.,Country_x,Start Year,Disaster Type,Location,Latitude,Longitude,Total Deaths,Total Affected,Total Damage ('000 US$)
2010-0001-IND,India,2010.0,Flood,\"Near Pune District\",,,120,5000,250
2010-0002-IND,India,2010,Earthquake,,19.0,73.0,30,,
";

    const RANKS_CSV: &str = "\
Country_x,Start Year,rank_damages,rank_risk_y,rank_gdp,rank_hdi_y,rank_vulnerability
India,2010,3,12,5,101,44
";

    const ANNUAL_CSV: &str = "\
Country name,Year,Disaster Type,Deaths,Injuries,Assistance,Damages,Affected,Rendered homeless
India,2010,Flood,120,40,1000,250,5000,75
India,2010,Earthquake,30,,,,,
";

    fn write_data_dir(dir: &Path) {
        for (file, content) in [
            ("cities.csv", CITIES_CSV),
            ("risk_events.csv", EVENTS_CSV),
            ("ranked_data.csv", RANKS_CSV),
            ("annual_impacts.csv", ANNUAL_CSV),
        ] {
            let mut f = File::create(dir.join(file)).unwrap();
            f.write_all(content.as_bytes()).unwrap();
        }
    }

    #[test]
    fn loads_a_complete_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write_data_dir(tmp.path());

        let store = DisasterStore::load_from_dir(tmp.path()).unwrap();
        let stats = store.stats();
        assert_eq!(stats.events, 2);
        assert_eq!(stats.reference_points, 3);
        assert_eq!(stats.rankings, 1);
        assert_eq!(stats.annual_rows, 2);

        // Pandas float years normalize to integers.
        assert_eq!(store.events[0].year, Some(2010));
        // Unparseable coordinates survive as None, not as an error.
        let broken = store
            .reference
            .iter()
            .find(|p| p.name == "Broken")
            .unwrap();
        assert_eq!(broken.latitude, None);
        assert_eq!(broken.longitude, Some(73.86));
    }

    #[test]
    fn missing_dataset_fails_fast_with_its_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_data_dir(tmp.path());
        std::fs::remove_file(tmp.path().join("ranked_data.csv")).unwrap();

        let err = DisasterStore::load_from_dir(tmp.path()).unwrap_err();
        match err {
            HazardError::DatasetMissing { name, .. } => assert_eq!(name, "ranked_data"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_fails_fast_with_its_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_data_dir(tmp.path());
        let mut f = File::create(tmp.path().join("cities.csv")).unwrap();
        f.write_all(b"name,latitude,longitude,country_name\nPune,18.5,73.9,India\n")
            .unwrap();

        let err = DisasterStore::load_from_dir(tmp.path()).unwrap_err();
        match err {
            HazardError::MissingColumn { dataset, column } => {
                assert_eq!(dataset, "cities");
                assert_eq!(column, "state_name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gzip_datasets_load_transparently() {
        let tmp = tempfile::tempdir().unwrap();
        write_data_dir(tmp.path());

        // Replace one dataset with its gzip twin.
        std::fs::remove_file(tmp.path().join("cities.csv")).unwrap();
        let gz_file = File::create(tmp.path().join("cities.csv.gz")).unwrap();
        let mut encoder =
            flate2::write::GzEncoder::new(gz_file, flate2::Compression::default());
        encoder.write_all(CITIES_CSV.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let store = DisasterStore::load_from_dir(tmp.path()).unwrap();
        assert_eq!(store.stats().reference_points, 3);
    }

    #[test]
    fn cache_round_trips_the_store() {
        let tmp = tempfile::tempdir().unwrap();
        write_data_dir(tmp.path());

        let first = DisasterStore::load_from_dir(tmp.path()).unwrap();
        assert!(tmp.path().join(CACHE_FILENAME).exists());

        // Freshness check may or may not accept the cache depending on
        // filesystem timestamp granularity; when it does, the contents
        // must round-trip exactly.
        if let Some(cached) = try_cache(tmp.path()) {
            assert_eq!(cached.stats().events, first.stats().events);
        }

        let second = DisasterStore::load_from_dir(tmp.path()).unwrap();
        assert_eq!(second.stats().events, first.stats().events);
        assert_eq!(second.events[0].id, first.events[0].id);
    }
}
