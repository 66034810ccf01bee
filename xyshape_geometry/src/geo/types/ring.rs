use super::Coordinates;
use std::fmt::Debug;

/// A closed line, used both as the standalone linear-ring shape kind and as
/// the building block of polygons.
///
/// A standalone ring is never indexable; only rings embedded in a polygon
/// reach the index. No closure or winding validation is performed here, the
/// point order is kept exactly as given.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn new(coordinates: Vec<Coordinates>) -> Self {
		Self(coordinates)
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Coordinates] {
		&self.0
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
