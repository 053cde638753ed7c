// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Table schema consumed by partial rows and the row key encoder.
//!
//! A `Schema` is an ordered list of typed columns, each either nullable or
//! not, plus the subset of columns forming the primary key. Schemas are
//! immutable once built and cheap to clone.

mod builder;
mod column;
pub mod layout;

use std::{fmt::Debug, ops::Deref, sync::Arc};

pub use builder::SchemaBuilder;
pub use column::ColumnSchema;
use indexmap::IndexMap;
use kudu_type::{
	error::diagnostic::row::{column_index_out_of_range, column_not_found},
	return_error,
};
use layout::RowLayout;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeSeq};

pub struct Schema(Arc<Inner>);

#[derive(Debug, PartialEq, Eq)]
pub struct Inner {
	/// Columns in ordinal order, keyed by name
	columns: IndexMap<String, ColumnSchema>,
	/// Ordinals of the key columns, ascending
	key_columns: Vec<usize>,
	layout: RowLayout,
}

impl Deref for Schema {
	type Target = Inner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Clone for Schema {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl Debug for Schema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl PartialEq for Schema {
	fn eq(&self, other: &Self) -> bool {
		self.0.as_ref() == other.0.as_ref()
	}
}

impl Eq for Schema {}

impl Schema {
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::new()
	}

	/// Builds a schema from column definitions, validating them the same way
	/// the builder does.
	pub fn new(columns: impl IntoIterator<Item = ColumnSchema>) -> kudu_type::Result<Self> {
		columns.into_iter().fold(SchemaBuilder::new(), SchemaBuilder::add).build()
	}
}

impl Inner {
	pub fn columns(&self) -> impl ExactSizeIterator<Item = &ColumnSchema> {
		self.columns.values()
	}

	pub fn column(&self, index: usize) -> Option<&ColumnSchema> {
		self.columns.get_index(index).map(|(_, column)| column)
	}

	/// Column at an index already validated by `resolve_index`.
	pub(crate) fn column_at(&self, index: usize) -> &ColumnSchema {
		&self.columns[index]
	}

	pub fn find_column(&self, name: &str) -> Option<usize> {
		self.columns.get_index_of(name)
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn key_columns(&self) -> &[usize] {
		&self.key_columns
	}

	pub fn num_key_columns(&self) -> usize {
		self.key_columns.len()
	}

	pub fn layout(&self) -> &RowLayout {
		&self.layout
	}

	/// Validates an ordinal index.
	pub fn resolve_index(&self, index: usize) -> kudu_type::Result<usize> {
		if index >= self.columns.len() {
			return_error!(column_index_out_of_range(index, self.columns.len()));
		}
		Ok(index)
	}

	/// Maps a column name to its ordinal index.
	pub fn resolve_name(&self, name: &str) -> kudu_type::Result<usize> {
		match self.columns.get_index_of(name) {
			Some(index) => Ok(index),
			None => return_error!(column_not_found(name)),
		}
	}
}

impl Serialize for Schema {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.column_count()))?;
		for column in self.columns() {
			seq.serialize_element(column)?;
		}
		seq.end()
	}
}

impl<'de> Deserialize<'de> for Schema {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let columns = Vec::<ColumnSchema>::deserialize(deserializer)?;
		Schema::new(columns).map_err(de::Error::custom)
	}
}

#[cfg(test)]
pub mod tests {
	use kudu_type::Type;

	use crate::schema::{ColumnSchema, Schema};

	pub fn users() -> Schema {
		Schema::builder()
			.key_column("id", Type::Int32)
			.nullable_column("name", Type::String)
			.column("age", Type::Int8)
			.build()
			.unwrap()
	}

	mod lookup {
		use kudu_type::Type;

		use super::users;

		#[test]
		fn test_find_column() {
			let schema = users();
			assert_eq!(schema.find_column("id"), Some(0));
			assert_eq!(schema.find_column("age"), Some(2));
			assert_eq!(schema.find_column("missing"), None);
			assert_eq!(schema.column(1).map(|c| c.r#type), Some(Type::String));
			assert!(schema.column(3).is_none());
		}

		#[test]
		fn test_resolve_errors() {
			let schema = users();
			assert_eq!(schema.resolve_index(2).unwrap(), 2);
			assert!(schema.resolve_index(3).unwrap_err().is_out_of_range());
			assert!(schema.resolve_name("nope").unwrap_err().is_not_found());
			assert_eq!(schema.resolve_name("name").unwrap(), 1);
		}
	}

	mod equality {
		use super::users;

		#[test]
		fn test_clone_shares_and_compares_equal() {
			let schema = users();
			let other = users();
			assert_eq!(schema.clone(), schema);
			assert_eq!(schema, other);
		}
	}

	mod json {
		use kudu_type::Type;

		use super::{ColumnSchema, Schema, users};

		#[test]
		fn test_json_roundtrip() {
			let schema = users();
			let json = serde_json::to_string(&schema).unwrap();
			let back: Schema = serde_json::from_str(&json).unwrap();
			assert_eq!(back, schema);
			assert_eq!(back.key_columns(), &[0]);
		}

		#[test]
		fn test_deserialize_rejects_invalid_schema() {
			let json = serde_json::to_string(&vec![ColumnSchema::new("v", Type::Int32)]).unwrap();
			let err = serde_json::from_str::<Schema>(&json).unwrap_err();
			assert!(err.to_string().contains("SCHEMA_003"), "{err}");
		}
	}
}
