//! Decoding of raw GeoJSON feature documents.
//!
//! A document arrives as a generic key/value map; [`decode`] validates the
//! top-level type tag and lifts geometry, properties and id into a typed
//! [`Feature`]. Parsing the geometry object itself happens elsewhere.

mod decode;
mod error;
mod feature;

pub use decode::*;
pub use error::*;
pub use feature::*;
