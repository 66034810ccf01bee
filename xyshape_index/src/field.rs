use crate::convert::XYLine;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt::Debug;

const TAG_POINT: u8 = 1;
const TAG_LINE: u8 = 2;
const TAG_RING: u8 = 3;

/// One opaque unit of encoded spatial data, consumed by the tree-structured
/// spatial index.
///
/// The payload is a tagged little-endian coordinate encoding. It is
/// deterministic (structurally equal geometry encodes to identical bytes) but
/// its layout is not a public contract.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexableField {
	field_name: String,
	bytes: Vec<u8>,
}

impl IndexableField {
	#[must_use]
	pub fn field_name(&self) -> &str {
		&self.field_name
	}

	#[must_use]
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub(crate) fn point(field_name: &str, x: f32, y: f32) -> Self {
		let mut bytes = vec![TAG_POINT];
		push_f32(&mut bytes, x);
		push_f32(&mut bytes, y);
		Self {
			field_name: field_name.to_string(),
			bytes,
		}
	}

	pub(crate) fn line(field_name: &str, line: &XYLine) -> Self {
		Self::from_xy_line(field_name, TAG_LINE, line)
	}

	pub(crate) fn ring(field_name: &str, ring: &XYLine) -> Self {
		Self::from_xy_line(field_name, TAG_RING, ring)
	}

	fn from_xy_line(field_name: &str, tag: u8, line: &XYLine) -> Self {
		let mut bytes = vec![tag];
		push_u32(&mut bytes, line.x.len() as u32);
		for (x, y) in line.x.iter().zip(&line.y) {
			push_f32(&mut bytes, *x);
			push_f32(&mut bytes, *y);
		}
		Self {
			field_name: field_name.to_string(),
			bytes,
		}
	}
}

fn push_f32(bytes: &mut Vec<u8>, value: f32) {
	let mut buf = [0u8; 4];
	LittleEndian::write_f32(&mut buf, value);
	bytes.extend_from_slice(&buf);
}

fn push_u32(bytes: &mut Vec<u8>, value: u32) {
	let mut buf = [0u8; 4];
	LittleEndian::write_u32(&mut buf, value);
	bytes.extend_from_slice(&buf);
}

impl Debug for IndexableField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("IndexableField")
			.field("field_name", &self.field_name)
			.field("bytes", &self.bytes.len())
			.finish()
	}
}
