// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::schema::Schema;

/// Addresses a column either by ordinal index or by name.
///
/// Every row accessor accepts an `impl ColumnRef`: the reference is resolved
/// against the row's schema once, then the index-based implementation runs.
/// Indexes outside the schema fail with OutOfRange, unknown names with
/// NotFound.
pub trait ColumnRef {
	fn resolve(&self, schema: &Schema) -> kudu_type::Result<usize>;
}

impl ColumnRef for usize {
	fn resolve(&self, schema: &Schema) -> kudu_type::Result<usize> {
		schema.resolve_index(*self)
	}
}

impl ColumnRef for &str {
	fn resolve(&self, schema: &Schema) -> kudu_type::Result<usize> {
		schema.resolve_name(self)
	}
}

impl ColumnRef for &String {
	fn resolve(&self, schema: &Schema) -> kudu_type::Result<usize> {
		schema.resolve_name(self)
	}
}
