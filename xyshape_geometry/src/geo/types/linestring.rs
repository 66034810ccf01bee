use super::Coordinates;
use std::fmt::Debug;

/// A sequence of connected coordinates forming an open line.
///
/// The x and y ordinate sequences always have equal length because every
/// vertex is stored as one [`Coordinates`] pair.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
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

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
