use super::PolygonGeometry;
use std::fmt::Debug;

/// An ordered collection of polygons, each with its own outer ring and holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	#[must_use]
	pub fn new(polygons: Vec<PolygonGeometry>) -> Self {
		Self(polygons)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PolygonGeometry> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
