use thiserror::Error;

/// Errors raised while decoding a raw document into a [`crate::geojson::Feature`].
///
/// The message strings are an observable contract; conformance tests assert
/// on the exact wording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoJsonError {
	/// The `type` key is missing or its value is not a string.
	#[error("type cannot be null")]
	TypeMissing,

	/// The `type` value is a string, but not `Feature`.
	#[error("{0} is not supported. Only type Feature is supported")]
	UnsupportedType(String),
}
