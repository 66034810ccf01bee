use log::debug;
use std::fmt::Display;
use xyshape_geometry::Geometry;

/// The spatial predicate evaluated between an indexed shape and a query shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeRelation {
	Intersects,
	Disjoint,
	Within,
	Contains,
}

impl ShapeRelation {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			ShapeRelation::Intersects => "intersects",
			ShapeRelation::Disjoint => "disjoint",
			ShapeRelation::Within => "within",
			ShapeRelation::Contains => "contains",
		}
	}

	/// Looks a relation up by its lowercase name, case-insensitively.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		match name.to_ascii_lowercase().as_str() {
			"intersects" => Some(ShapeRelation::Intersects),
			"disjoint" => Some(ShapeRelation::Disjoint),
			"within" => Some(ShapeRelation::Within),
			"contains" => Some(ShapeRelation::Contains),
			_ => None,
		}
	}
}

impl Display for ShapeRelation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A search predicate produced by a shape query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
	/// Matches every document.
	MatchAll,
}

/// The seam between shape-typed fields and the query layer.
pub trait ShapeQueryable {
	fn shape_query(&self, shape: &Geometry, field_name: &str, relation: ShapeRelation) -> Query;
}

/// Translates a geometry plus relation into a search predicate.
///
/// Not implemented yet: every query currently matches all documents
/// regardless of shape and relation. Callers must not rely on any filtering
/// happening here.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeQueryProcessor;

impl ShapeQueryProcessor {
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

impl ShapeQueryable for ShapeQueryProcessor {
	fn shape_query(&self, shape: &Geometry, field_name: &str, relation: ShapeRelation) -> Query {
		debug!(
			"shape query on field '{field_name}': {relation} {}",
			shape.type_name()
		);
		// TODO: return only docs that match the relation
		Query::MatchAll
	}
}
