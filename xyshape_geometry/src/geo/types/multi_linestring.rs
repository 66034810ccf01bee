use super::LineStringGeometry;
use std::fmt::Debug;

/// An ordered collection of line strings.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	#[must_use]
	pub fn new(lines: Vec<LineStringGeometry>) -> Self {
		Self(lines)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, LineStringGeometry> {
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

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
