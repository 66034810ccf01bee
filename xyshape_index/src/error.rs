use thiserror::Error;

/// Errors raised by the shape indexing pipeline.
///
/// The prepare phase and the encode phase reject the same unindexable shape
/// kinds with deliberately different wordings; both wordings are part of the
/// observable contract and must not be unified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
	/// Prepare-phase rejection of a statically unindexable shape kind.
	#[error("{0} is not supported")]
	Unsupported(&'static str),

	/// Prepare-phase rejection of a standalone linear ring.
	#[error("cannot index {0} [ {1} ] directly")]
	CannotIndexDirectly(&'static str, String),

	/// Encode-phase rejection of an unindexable shape kind.
	#[error("invalid shape type found [ {0} ] while indexing shape")]
	InvalidShapeType(&'static str),

	/// A required geometry value was missing where a leaf shape was expected.
	#[error("{0} cannot be null")]
	NullArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_wording() {
		assert_eq!(
			ShapeError::Unsupported("CIRCLE").to_string(),
			"CIRCLE is not supported"
		);
		assert_eq!(
			ShapeError::CannotIndexDirectly("LINEARRING", "[[0.0, 0.0]]".to_string()).to_string(),
			"cannot index LINEARRING [ [[0.0, 0.0]] ] directly"
		);
		assert_eq!(
			ShapeError::InvalidShapeType("CIRCLE").to_string(),
			"invalid shape type found [ CIRCLE ] while indexing shape"
		);
		assert_eq!(
			ShapeError::NullArgument("POLYGON").to_string(),
			"POLYGON cannot be null"
		);
	}
}
