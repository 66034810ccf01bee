use super::PointGeometry;
use std::fmt::Debug;

/// An ordered collection of points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl MultiPointGeometry {
	#[must_use]
	pub fn new(points: Vec<PointGeometry>) -> Self {
		Self(points)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PointGeometry> {
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

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
