// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::Type;
use serde::{Deserialize, Serialize};

/// A column within a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
	pub name: String,
	pub r#type: Type,
	/// Whether the column may hold NULL
	#[serde(default)]
	pub nullable: bool,
	/// Whether the column is part of the primary key
	#[serde(default)]
	pub is_key: bool,
}

impl ColumnSchema {
	/// A non-nullable, non-key column.
	pub fn new(name: impl Into<String>, r#type: Type) -> Self {
		Self {
			name: name.into(),
			r#type,
			nullable: false,
			is_key: false,
		}
	}

	/// A primary key column. Key columns are never nullable.
	pub fn key(name: impl Into<String>, r#type: Type) -> Self {
		Self::new(name, r#type).with_key(true)
	}

	pub fn with_nullable(mut self, nullable: bool) -> Self {
		self.nullable = nullable;
		self
	}

	pub fn with_key(mut self, is_key: bool) -> Self {
		self.is_key = is_key;
		self
	}

	pub fn get_type(&self) -> Type {
		self.r#type
	}
}

#[cfg(test)]
mod tests {
	use kudu_type::Type;

	use crate::schema::ColumnSchema;

	#[test]
	fn test_constructors() {
		let id = ColumnSchema::key("id", Type::Int32);
		assert!(id.is_key);
		assert!(!id.nullable);

		let note = ColumnSchema::new("note", Type::String).with_nullable(true);
		assert!(!note.is_key);
		assert!(note.nullable);
		assert_eq!(note.get_type(), Type::String);
	}

	#[test]
	fn test_deserialize_defaults_flags() {
		let column: ColumnSchema = serde_json::from_str(r#"{"name":"v","type":"Double"}"#).unwrap();
		assert_eq!(column, ColumnSchema::new("v", Type::Double));
	}
}
