use crate::{
	IndexableField, Result, ShapeError,
	convert::{XYLine, XYPolygon, polygon_to_xy_polygon, rectangle_to_xy_polygon, to_xy_line},
};
use log::trace;
use xyshape_geometry::{Geometry, LineStringGeometry, PointGeometry, PolygonGeometry};

/// Turns geometries into indexable fields for one shape field.
///
/// An indexer is bound to its output field name at construction and carries
/// no other state, so a single instance can encode many documents
/// concurrently. Indexing runs in two phases: [`prepare`](Self::prepare)
/// fails fast on shape kinds that can never be indexed, and
/// [`index_shape`](Self::index_shape) recursively encodes everything else.
#[derive(Clone, Debug)]
pub struct ShapeIndexer {
	field_name: String,
}

impl ShapeIndexer {
	pub fn new(field_name: impl Into<String>) -> Self {
		Self {
			field_name: field_name.into(),
		}
	}

	#[must_use]
	pub fn field_name(&self) -> &str {
		&self.field_name
	}

	/// Phase A: rejects statically unindexable shape kinds before any storage
	/// commitment is made; everything else passes through unchanged.
	///
	/// Collections are not recursed into here, their leaves are only checked
	/// at encode time.
	pub fn prepare(&self, geometry: Geometry) -> Result<Geometry> {
		match &geometry {
			Geometry::Circle(_) => Err(ShapeError::Unsupported("CIRCLE")),
			Geometry::LinearRing(ring) => Err(ShapeError::CannotIndexDirectly(
				"LINEARRING",
				format!("{ring:?}"),
			)),
			_ => Ok(geometry),
		}
	}

	/// Phase B: encodes a geometry into zero or more indexable fields,
	/// depth-first and left-to-right.
	///
	/// The output is empty only for an empty collection, never for a single
	/// leaf shape. The input geometry is not mutated or retained.
	pub fn index_shape(&self, geometry: &Geometry) -> Result<Vec<IndexableField>> {
		trace!(
			"indexing {} into field '{}'",
			geometry.type_name(),
			self.field_name
		);
		self.visit(geometry)
	}

	fn visit(&self, geometry: &Geometry) -> Result<Vec<IndexableField>> {
		match geometry {
			Geometry::Point(point) => Ok(self.point_fields(point)),
			Geometry::LineString(line) => self.line_fields(line),
			Geometry::Polygon(polygon) => self.polygon_fields(polygon),
			Geometry::Rectangle(rectangle) => {
				Ok(self.xy_polygon_fields(&rectangle_to_xy_polygon(rectangle)))
			}
			Geometry::Circle(_) => Err(ShapeError::InvalidShapeType("CIRCLE")),
			Geometry::LinearRing(_) => Err(ShapeError::InvalidShapeType("LINEARRING")),
			Geometry::MultiPoint(multi) => {
				Ok(multi.iter().flat_map(|p| self.point_fields(p)).collect())
			}
			Geometry::MultiLineString(multi) => {
				let mut fields = Vec::new();
				for line in multi.iter() {
					fields.extend(self.line_fields(line)?);
				}
				Ok(fields)
			}
			Geometry::MultiPolygon(multi) => {
				let mut fields = Vec::new();
				for polygon in multi.iter() {
					fields.extend(self.polygon_fields(polygon)?);
				}
				Ok(fields)
			}
			Geometry::GeometryCollection(collection) => {
				let mut fields = Vec::new();
				for element in collection.iter() {
					fields.extend(self.visit(element)?);
				}
				Ok(fields)
			}
		}
	}

	fn point_fields(&self, point: &PointGeometry) -> Vec<IndexableField> {
		vec![IndexableField::point(
			&self.field_name,
			point.x() as f32,
			point.y() as f32,
		)]
	}

	fn line_fields(&self, line: &LineStringGeometry) -> Result<Vec<IndexableField>> {
		if line.len() < 2 {
			return Err(ShapeError::NullArgument("LINESTRING"));
		}
		let xy = to_xy_line(line);
		// one field per segment, N points -> N-1 fields
		let mut fields = Vec::with_capacity(xy.x.len() - 1);
		for i in 0..xy.x.len() - 1 {
			let segment = XYLine {
				x: xy.x[i..=i + 1].to_vec(),
				y: xy.y[i..=i + 1].to_vec(),
			};
			fields.push(IndexableField::line(&self.field_name, &segment));
		}
		Ok(fields)
	}

	fn polygon_fields(&self, polygon: &PolygonGeometry) -> Result<Vec<IndexableField>> {
		let xy = polygon_to_xy_polygon(polygon).ok_or(ShapeError::NullArgument("POLYGON"))?;
		Ok(self.xy_polygon_fields(&xy))
	}

	fn xy_polygon_fields(&self, xy: &XYPolygon) -> Vec<IndexableField> {
		let mut fields = Vec::with_capacity(1 + xy.holes.len());
		fields.push(IndexableField::ring(&self.field_name, &xy.line));
		for hole in &xy.holes {
			fields.push(IndexableField::ring(&self.field_name, hole));
		}
		fields
	}
}
