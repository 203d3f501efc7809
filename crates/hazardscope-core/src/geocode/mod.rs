// crates/hazardscope-core/src/geocode/mod.rs

//! # Location Resolver
//!
//! Maps an unstructured location description ("Near Pune District,
//! Maharashtra (west)") to a single best-matching known place, for disaster
//! records that lack explicit coordinates.
//!
//! The pipeline is: build a per-country [`CountryGazetteer`] once from the
//! reference points, then [`CountryGazetteer::resolve`] per record —
//! tokenize the text, try exact key hits first, and fall back to a fuzzy
//! scan scored with a normalized edit-distance ratio.

mod gazetteer;
mod normalize;
mod resolver;
mod similarity;

pub use gazetteer::CountryGazetteer;
pub use normalize::location_tokens;
pub use resolver::{ResolvedPlace, DEFAULT_THRESHOLD};
pub use similarity::ratio;
