//! Converts 2D geometries into flat, indexable form for a tree-structured
//! spatial index.
//!
//! The pipeline is two-phase: [`ShapeIndexer::prepare`] fails fast on shape
//! kinds that can never be indexed, [`ShapeIndexer::index_shape`] recursively
//! encodes everything else into [`IndexableField`] values via the pure
//! projection functions in [`convert`]. All of it is synchronous, CPU-only
//! and free of shared mutable state.

pub mod convert;
mod error;
mod field;
mod indexer;
mod query;

pub use error::*;
pub use field::*;
pub use indexer::*;
pub use query::*;
