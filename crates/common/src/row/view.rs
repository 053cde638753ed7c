// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{ColumnState, PartialRow};
use crate::schema::Schema;

/// Read-only access to a row's raw state for wire serializers: the presence
/// bitmap, the null bitmap, the fixed-width row buffer, and per-column string
/// bytes with their ownership.
///
/// Accessors taking an index return the unset answer for indexes outside
/// the schema.
#[derive(Clone, Copy)]
pub struct RowView<'r, 'a> {
	row: &'r PartialRow<'a>,
}

impl<'r, 'a> RowView<'r, 'a> {
	pub(super) fn new(row: &'r PartialRow<'a>) -> Self {
		Self {
			row,
		}
	}

	pub fn schema(&self) -> &'a Schema {
		self.row.schema
	}

	/// One bit per column, set when the column was supplied.
	pub fn isset_bitmap(&self) -> &'r [u8] {
		self.row.isset.as_bytes()
	}

	/// One bit per column, set when the column is NULL. Only meaningful for
	/// columns whose isset bit is set.
	pub fn null_bitmap(&self) -> &'r [u8] {
		&self.row.data[..self.row.schema.layout().null_bitmap_size]
	}

	/// The whole row buffer: null bitmap followed by every column's slot at
	/// its layout offset. String slots hold the little-endian byte length.
	pub fn row_data(&self) -> &'r [u8] {
		&self.row.data
	}

	/// Indexes of the set columns, ascending.
	pub fn set_columns(&self) -> impl Iterator<Item = usize> + 'r {
		self.row.isset.ones()
	}

	pub fn is_set(&self, index: usize) -> bool {
		self.row.isset.try_get(index).unwrap_or(false)
	}

	pub fn state(&self, index: usize) -> ColumnState<'r> {
		if index < self.row.schema.column_count() {
			self.row.state(index)
		} else {
			ColumnState::Unset
		}
	}

	/// Bytes of a set, non-NULL string column.
	pub fn string(&self, index: usize) -> Option<&'r [u8]> {
		let row: &'r PartialRow<'a> = self.row;
		row.strings.get(index)?.as_ref().map(|cell| cell.as_bytes())
	}

	/// Whether the row holds its own copy of a string column's bytes.
	pub fn owns_string(&self, index: usize) -> bool {
		self.row.strings.get(index).and_then(Option::as_ref).is_some_and(|cell| cell.is_owned())
	}
}
