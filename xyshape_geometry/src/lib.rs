//! The 2D shape vocabulary of the indexing engine and the GeoJSON feature
//! decoder sitting in front of it.

mod geo;
pub mod geojson;

pub use geo::*;
