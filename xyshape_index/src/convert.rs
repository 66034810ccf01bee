use xyshape_geometry::{Coordinates, LineStringGeometry, PolygonGeometry, RectangleGeometry, RingGeometry};

/// A line narrowed to the single-precision coordinates the index stores.
#[derive(Clone, Debug, PartialEq)]
pub struct XYLine {
	pub x: Vec<f32>,
	pub y: Vec<f32>,
}

/// A polygon narrowed to single precision: outer boundary plus hole lines.
#[derive(Clone, Debug, PartialEq)]
pub struct XYPolygon {
	pub line: XYLine,
	pub holes: Vec<XYLine>,
}

fn narrow(coordinates: &[Coordinates]) -> XYLine {
	// IEEE round-to-nearest, no range checks; overflow becomes infinity.
	let x = coordinates.iter().map(|c| c.x() as f32).collect();
	let y = coordinates.iter().map(|c| c.y() as f32).collect();
	XYLine { x, y }
}

/// Narrows a line string to single precision, preserving order and length.
#[must_use]
pub fn to_xy_line(line: &LineStringGeometry) -> XYLine {
	narrow(line.coordinates())
}

/// Narrows a ring to single precision, preserving order and length.
#[must_use]
pub fn ring_to_xy_line(ring: &RingGeometry) -> XYLine {
	narrow(ring.coordinates())
}

/// Expands a rectangle into a closed 5-point polygon.
///
/// Points are assigned counter-clockwise, the default ring orientation, and
/// end where they start so the boundary forms a linear ring:
/// (minX,minY) -> (maxX,minY) -> (maxX,maxY) -> (minX,maxY) -> (minX,minY).
#[must_use]
pub fn rectangle_to_xy_polygon(r: &RectangleGeometry) -> XYPolygon {
	let x = [r.min_x, r.max_x, r.max_x, r.min_x, r.min_x];
	let y = [r.min_y, r.min_y, r.max_y, r.max_y, r.min_y];
	XYPolygon {
		line: XYLine {
			x: x.iter().map(|v| *v as f32).collect(),
			y: y.iter().map(|v| *v as f32).collect(),
		},
		holes: Vec::new(),
	}
}

/// Narrows a polygon: the outer ring via the line path, each hole
/// independently via the line path, hole order and point order untouched.
///
/// Returns `None` when the polygon has no rings at all.
#[must_use]
pub fn polygon_to_xy_polygon(polygon: &PolygonGeometry) -> Option<XYPolygon> {
	let outer = polygon.outer()?;
	let holes = polygon.holes().iter().map(ring_to_xy_line).collect();
	Some(XYPolygon {
		line: ring_to_xy_line(outer),
		holes,
	})
}
