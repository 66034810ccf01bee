/// An axis-aligned bounding box.
///
/// Always convertible to a closed 5-point polygon at index time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleGeometry {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl RectangleGeometry {
	#[must_use]
	pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		Self {
			min_x,
			min_y,
			max_x,
			max_y,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_keeps_bounds() {
		let r = RectangleGeometry::new(0.0, 1.0, 10.0, 5.0);
		assert_eq!(r.min_x, 0.0);
		assert_eq!(r.min_y, 1.0);
		assert_eq!(r.max_x, 10.0);
		assert_eq!(r.max_y, 5.0);
	}
}
