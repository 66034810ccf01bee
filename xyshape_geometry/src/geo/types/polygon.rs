use super::RingGeometry;
use std::fmt::Debug;

/// A polygon made of rings: the first ring is the outer boundary, every
/// further ring is a hole.
///
/// Hole order and each hole's own point order are preserved verbatim; no
/// re-winding or containment checks happen at this layer.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn new(rings: Vec<RingGeometry>) -> Self {
		Self(rings)
	}

	/// The outer boundary ring, if the polygon has any rings at all.
	#[must_use]
	pub fn outer(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// All hole rings, in input order.
	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		if self.0.is_empty() { &[] } else { &self.0[1..] }
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[2, 2], [2, 4], [4, 4], [4, 2], [2, 2]],
		])
	}

	#[test]
	fn outer_and_holes() {
		let polygon = with_hole();
		assert_eq!(polygon.outer().unwrap().len(), 5);
		assert_eq!(polygon.holes().len(), 1);
	}

	#[test]
	fn hole_order_is_preserved() {
		let polygon = with_hole();
		let hole = &polygon.holes()[0];
		assert_eq!(hole.coordinates()[1].x(), 2.0);
		assert_eq!(hole.coordinates()[1].y(), 4.0);
	}

	#[test]
	fn empty_polygon_has_no_outer() {
		let polygon = PolygonGeometry::new(vec![]);
		assert!(polygon.outer().is_none());
		assert!(polygon.holes().is_empty());
	}
}
