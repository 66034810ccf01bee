use super::Coordinates;

/// A circle given by center and radius.
///
/// Circles are part of the shape vocabulary but can never be indexed; both
/// indexing phases reject them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGeometry {
	pub center: Coordinates,
	pub radius: f64,
}

impl CircleGeometry {
	#[must_use]
	pub fn new(center: Coordinates, radius: f64) -> Self {
		Self { center, radius }
	}
}
