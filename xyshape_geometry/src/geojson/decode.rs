use super::{Feature, GeoJsonError, JsonObject};
use serde_json::Value;

pub const TYPE_KEY: &str = "type";
pub const GEOMETRY_KEY: &str = "geometry";
pub const PROPERTIES_KEY: &str = "properties";
pub const ID_KEY: &str = "id";

/// Decodes a raw key/value document into a [`Feature`].
///
/// Only the four well-known keys are inspected; everything else is ignored.
/// The geometry object is copied through unparsed. The input is never
/// mutated.
pub fn decode(input: &JsonObject) -> Result<Feature, GeoJsonError> {
	let type_tag = input
		.get(TYPE_KEY)
		.and_then(Value::as_str)
		.ok_or(GeoJsonError::TypeMissing)?;

	if !type_tag.eq_ignore_ascii_case(Feature::TYPE) {
		return Err(GeoJsonError::UnsupportedType(type_tag.to_string()));
	}

	let geometry = input.get(GEOMETRY_KEY).and_then(Value::as_object).cloned();
	let mut builder = Feature::builder(geometry);

	if let Some(id) = input.get(ID_KEY).and_then(Value::as_str) {
		builder = builder.id(id.to_string());
	}
	if let Some(properties) = input.get(PROPERTIES_KEY).and_then(Value::as_object) {
		builder = builder.properties(properties.clone());
	}

	Ok(builder.build())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn as_object(value: Value) -> JsonObject {
		value.as_object().unwrap().clone()
	}

	#[test]
	fn decode_full_feature() -> anyhow::Result<()> {
		let input = as_object(json!({
			"type": "Feature",
			"geometry": {"type": "Point", "coordinates": [1, 2]},
			"properties": {"name": "x"},
			"id": "abc"
		}));

		let feature = decode(&input)?;
		assert_eq!(feature.id(), Some("abc"));
		assert_eq!(feature.properties(), &as_object(json!({"name": "x"})));
		assert_eq!(
			feature.geometry(),
			Some(&as_object(json!({"type": "Point", "coordinates": [1, 2]})))
		);
		Ok(())
	}

	#[test]
	fn decode_defaults() {
		let input = as_object(json!({"type": "Feature"}));
		let feature = decode(&input).unwrap();
		assert!(feature.geometry().is_none());
		assert!(feature.properties().is_empty());
		assert!(feature.id().is_none());
	}

	#[test]
	fn type_tag_is_case_insensitive() {
		let input = as_object(json!({"type": "feature"}));
		assert!(decode(&input).is_ok());
		let input = as_object(json!({"type": "FEATURE"}));
		assert!(decode(&input).is_ok());
	}

	#[test]
	fn missing_type_fails() {
		let input = JsonObject::new();
		let error = decode(&input).unwrap_err();
		assert_eq!(error.to_string(), "type cannot be null");
	}

	#[test]
	fn non_string_type_fails() {
		let input = as_object(json!({"type": 42}));
		assert_eq!(decode(&input).unwrap_err(), GeoJsonError::TypeMissing);
	}

	#[test]
	fn unsupported_type_fails() {
		let input = as_object(json!({"type": "FeatureCollection"}));
		let error = decode(&input).unwrap_err();
		assert!(
			error
				.to_string()
				.contains("FeatureCollection is not supported. Only type Feature is supported")
		);
	}

	#[test]
	fn unknown_keys_are_ignored() {
		let input = as_object(json!({"type": "Feature", "bbox": [0, 0, 1, 1]}));
		assert!(decode(&input).is_ok());
	}

	#[test]
	fn input_is_not_mutated() {
		let input = as_object(json!({
			"type": "Feature",
			"geometry": {"type": "Point", "coordinates": [1, 2]}
		}));
		let copy = input.clone();
		let _ = decode(&input).unwrap();
		assert_eq!(input, copy);
	}
}
