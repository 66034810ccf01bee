use super::Geometry;
use std::fmt::Debug;

/// A heterogeneous, arbitrarily nested collection of geometries.
///
/// Element order is significant: it fixes the depth-first order of the
/// indexable output.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self(geometries)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
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

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(value: Vec<Geometry>) -> Self {
		Self(value)
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preserves_element_order() {
		let collection = GeometryCollection::new(vec![
			Geometry::new_point(&[1, 1]),
			Geometry::new_line_string(&[[0, 0], [1, 1]]),
		]);
		assert_eq!(collection.len(), 2);
		assert_eq!(collection.iter().next().unwrap().type_name(), "POINT");
	}

	#[test]
	fn empty_collection() {
		let collection = GeometryCollection::new(vec![]);
		assert!(collection.is_empty());
	}
}
