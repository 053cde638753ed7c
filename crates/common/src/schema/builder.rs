// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use indexmap::{IndexMap, map::Entry};
use kudu_type::{
	Type,
	error::diagnostic::schema::{duplicate_column, empty_schema, no_key_columns, nullable_key_column},
	return_error,
};
use tracing::{debug, instrument};

use super::{ColumnSchema, Inner, Schema, layout::RowLayout};

/// Collects column definitions and validates them into an immutable [`Schema`].
#[derive(Debug, Default, Clone)]
pub struct SchemaBuilder {
	columns: Vec<ColumnSchema>,
}

impl SchemaBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(mut self, column: ColumnSchema) -> Self {
		self.columns.push(column);
		self
	}

	pub fn column(self, name: impl Into<String>, r#type: Type) -> Self {
		self.add(ColumnSchema::new(name, r#type))
	}

	pub fn key_column(self, name: impl Into<String>, r#type: Type) -> Self {
		self.add(ColumnSchema::key(name, r#type))
	}

	pub fn nullable_column(self, name: impl Into<String>, r#type: Type) -> Self {
		self.add(ColumnSchema::new(name, r#type).with_nullable(true))
	}

	#[instrument(name = "schema::build", level = "debug", skip(self), fields(columns = self.columns.len()))]
	pub fn build(self) -> kudu_type::Result<Schema> {
		if self.columns.is_empty() {
			return_error!(empty_schema());
		}

		let mut columns = IndexMap::with_capacity(self.columns.len());
		let mut key_columns = Vec::new();

		for column in self.columns {
			if column.is_key {
				if column.nullable {
					return_error!(nullable_key_column(&column.name, column.r#type));
				}
				key_columns.push(columns.len());
			}

			match columns.entry(column.name.clone()) {
				Entry::Occupied(_) => return_error!(duplicate_column(&column.name)),
				Entry::Vacant(entry) => {
					entry.insert(column);
				}
			}
		}

		if key_columns.is_empty() {
			return_error!(no_key_columns());
		}

		let types: Vec<Type> = columns.values().map(ColumnSchema::get_type).collect();
		let layout = RowLayout::new(&types);

		debug!(key_columns = key_columns.len(), row_size = layout.row_size, "built schema");

		Ok(Schema(Arc::new(Inner {
			columns,
			key_columns,
			layout,
		})))
	}
}
