use serde_json::{Map, Value};

/// A raw GeoJSON object, i.e. the value of one `{...}` node.
pub type JsonObject = Map<String, Value>;

/// A decoded GeoJSON feature: one geometry, a property bag and an optional id.
///
/// The geometry is kept as the raw, unparsed object; turning it into a
/// [`crate::Geometry`] value is the job of a separate geometry parser.
/// Features are transient, they live exactly as long as the document that
/// produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	geometry: Option<JsonObject>,
	properties: JsonObject,
	id: Option<String>,
}

impl Feature {
	/// The only GeoJSON type tag accepted by the decoder.
	pub const TYPE: &str = "Feature";

	#[must_use]
	pub fn builder(geometry: Option<JsonObject>) -> FeatureBuilder {
		FeatureBuilder {
			feature: Feature {
				geometry,
				properties: JsonObject::new(),
				id: None,
			},
		}
	}

	#[must_use]
	pub fn geometry(&self) -> Option<&JsonObject> {
		self.geometry.as_ref()
	}

	#[must_use]
	pub fn properties(&self) -> &JsonObject {
		&self.properties
	}

	#[must_use]
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}
}

/// Builds a [`Feature`] in one pass; the result is immutable afterwards.
#[derive(Debug)]
pub struct FeatureBuilder {
	feature: Feature,
}

impl FeatureBuilder {
	#[must_use]
	pub fn id(mut self, id: String) -> Self {
		self.feature.id = Some(id);
		self
	}

	#[must_use]
	pub fn properties(mut self, properties: JsonObject) -> Self {
		self.feature.properties = properties;
		self
	}

	#[must_use]
	pub fn build(self) -> Feature {
		self.feature
	}
}
