use super::*;
use std::fmt::Debug;

/// The closed set of shape kinds the indexing engine understands.
///
/// Adding a kind means touching every match site; the compiler enforces that
/// no case is silently unhandled.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	LinearRing(RingGeometry),
	Polygon(PolygonGeometry),
	Rectangle(RectangleGeometry),
	Circle(CircleGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_linear_ring<T>(value: T) -> Self
	where
		RingGeometry: From<T>,
	{
		Self::LinearRing(RingGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	#[must_use]
	pub fn new_rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		Self::Rectangle(RectangleGeometry::new(min_x, min_y, max_x, max_y))
	}
	#[must_use]
	pub fn new_circle(center: Coordinates, radius: f64) -> Self {
		Self::Circle(CircleGeometry::new(center, radius))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	#[must_use]
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollection::new(geometries))
	}

	/// The uppercase shape-type tag used in user-visible messages.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "POINT",
			Geometry::LineString(_) => "LINESTRING",
			Geometry::LinearRing(_) => "LINEARRING",
			Geometry::Polygon(_) => "POLYGON",
			Geometry::Rectangle(_) => "ENVELOPE",
			Geometry::Circle(_) => "CIRCLE",
			Geometry::MultiPoint(_) => "MULTIPOINT",
			Geometry::MultiLineString(_) => "MULTILINESTRING",
			Geometry::MultiPolygon(_) => "MULTIPOLYGON",
			Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::LinearRing(g) => ("LinearRing", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::Rectangle(g) => ("Rectangle", g),
			Geometry::Circle(g) => ("Circle", g),
			Geometry::MultiPoint(g) => ("MultiPoint", g),
			Geometry::MultiLineString(g) => ("MultiLineString", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
			Geometry::GeometryCollection(g) => ("GeometryCollection", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Geometry::new_point(&[1, 2]), "POINT")]
	#[case(Geometry::new_line_string(&[[0, 0], [1, 1]]), "LINESTRING")]
	#[case(Geometry::new_linear_ring(&[[0, 0], [1, 0], [1, 1], [0, 0]]), "LINEARRING")]
	#[case(Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]), "POLYGON")]
	#[case(Geometry::new_rectangle(0.0, 0.0, 1.0, 1.0), "ENVELOPE")]
	#[case(Geometry::new_circle(Coordinates::new(0.0, 0.0), 1.0), "CIRCLE")]
	#[case(Geometry::new_multi_point(&[[1, 1]]), "MULTIPOINT")]
	#[case(Geometry::new_multi_line_string(&[[[0, 0], [1, 1]]]), "MULTILINESTRING")]
	#[case(Geometry::new_multi_polygon(&[[[[0, 0], [1, 0], [1, 1], [0, 0]]]]), "MULTIPOLYGON")]
	#[case(Geometry::new_collection(vec![]), "GEOMETRYCOLLECTION")]
	fn type_names(#[case] geometry: Geometry, #[case] expected: &str) {
		assert_eq!(geometry.type_name(), expected);
	}

	#[test]
	fn debug_format() {
		let geometry = Geometry::new_point(&[1, 2]);
		assert_eq!(format!("{geometry:?}"), "Point([1.0, 2.0])");
	}

	#[test]
	fn structural_equality() {
		let a = Geometry::new_line_string(&[[0, 0], [1, 1]]);
		let b = Geometry::new_line_string(&[[0, 0], [1, 1]]);
		assert_eq!(a, b);
	}
}
