// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// All column types a table may declare
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 1-byte signed integer
	Int8,
	/// A 2-byte signed integer
	Int16,
	/// A 4-byte signed integer
	Int32,
	/// An 8-byte signed integer
	Int64,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// Variable-length binary or text data
	String,
}

impl Type {
	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Bool)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int8 | Type::Int16 | Type::Int32 | Type::Int64)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float | Type::Double)
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Type::String)
	}

	/// Whether the column's value fits entirely in its fixed-width slot.
	pub fn is_fixed_width(&self) -> bool {
		!self.is_string()
	}
}

impl Type {
	/// Width of the column's slot in the row buffer.
	pub fn size(&self) -> usize {
		match self {
			Type::Bool => 1,
			Type::Int8 => 1,
			Type::Int16 => 2,
			Type::Int32 => 4,
			Type::Int64 => 8,
			Type::Float => 4,
			Type::Double => 8,
			Type::String => 8, // length: u64
		}
	}

	pub fn alignment(&self) -> usize {
		match self {
			Type::Bool => 1,
			Type::Int8 => 1,
			Type::Int16 => 2,
			Type::Int32 => 4,
			Type::Int64 => 8,
			Type::Float => 4,
			Type::Double => 8,
			Type::String => 8,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("bool"),
			Type::Int8 => f.write_str("int8"),
			Type::Int16 => f.write_str("int16"),
			Type::Int32 => f.write_str("int32"),
			Type::Int64 => f.write_str("int64"),
			Type::Float => f.write_str("float"),
			Type::Double => f.write_str("double"),
			Type::String => f.write_str("string"),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::value::Type;

	#[test]
	fn test_size_matches_alignment_for_scalars() {
		for ty in [Type::Bool, Type::Int8, Type::Int16, Type::Int32, Type::Int64, Type::Float, Type::Double] {
			assert_eq!(ty.size(), ty.alignment(), "{ty}");
			assert!(ty.is_fixed_width());
		}
		assert!(!Type::String.is_fixed_width());
	}

	#[test]
	fn test_display() {
		assert_eq!(Type::Int32.to_string(), "int32");
		assert_eq!(Type::String.to_string(), "string");
		assert_eq!(Type::Double.to_string(), "double");
	}

	#[test]
	fn test_serde() {
		let json = serde_json::to_string(&Type::Int64).unwrap();
		assert_eq!(json, "\"Int64\"");
		assert_eq!(serde_json::from_str::<Type>(&json).unwrap(), Type::Int64);
	}
}
