// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A partially specified row bound to a schema.
//!
//! Each column is in one of three states: unset (nothing supplied), NULL, or
//! holding a value. The storage mirrors what a serializer needs: a presence
//! bitmap, a null bitmap at the front of the row buffer, and one fixed-width
//! slot per column at its layout offset. String columns keep their length in
//! the slot and their bytes in a per-column [`StringCell`], which either
//! borrows caller memory for the row's lifetime or owns a private copy.

mod cell;
mod column;
mod display;
mod get;
mod key;
mod set;
mod view;

use cell::{Cell, FixedValue, StringCell};
pub use column::ColumnRef;
use kudu_type::{
	BitVec, Type, ValueRef,
	error::diagnostic::row::{column_is_null, column_not_set, type_mismatch},
	return_error,
};
use tracing::trace;
pub use view::RowView;

use crate::schema::{ColumnSchema, Schema};

/// Read-side view of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnState<'r> {
	Unset,
	Null,
	Value(ValueRef<'r>),
}

impl<'r> ColumnState<'r> {
	pub fn is_set(&self) -> bool {
		!matches!(self, ColumnState::Unset)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, ColumnState::Null)
	}

	pub fn value(&self) -> Option<ValueRef<'r>> {
		match self {
			ColumnState::Value(value) => Some(*value),
			_ => None,
		}
	}
}

/// A row in which any subset of columns has been supplied.
///
/// The row borrows its schema, and any string set with
/// [`set_string`](PartialRow::set_string), for `'a`. It is deliberately not
/// `Clone`: ownership of copied strings belongs to exactly one row.
#[derive(Debug)]
pub struct PartialRow<'a> {
	schema: &'a Schema,
	/// Columns that were explicitly supplied, either a value or NULL.
	isset: BitVec,
	/// Null bitmap followed by the fixed-width slots.
	data: Vec<u8>,
	/// Bytes of every set, non-NULL string column.
	strings: Vec<Option<StringCell<'a>>>,
}

impl<'a> PartialRow<'a> {
	pub fn new(schema: &'a Schema) -> Self {
		let count = schema.column_count();
		let mut strings = Vec::with_capacity(count);
		strings.resize_with(count, || None);

		Self {
			schema,
			isset: BitVec::new(count, false),
			data: schema.layout().allocate(),
			strings,
		}
	}

	pub fn schema(&self) -> &'a Schema {
		self.schema
	}

	/// Number of string columns whose bytes the row owns.
	pub fn owned_string_count(&self) -> usize {
		self.strings.iter().flatten().filter(|cell| cell.is_owned()).count()
	}

	/// Total bytes held in owned string copies.
	pub fn owned_string_bytes(&self) -> usize {
		self.strings.iter().flatten().filter(|cell| cell.is_owned()).map(StringCell::len).sum()
	}

	pub fn view(&self) -> RowView<'_, 'a> {
		RowView::new(self)
	}

	fn column_schema(&self, index: usize) -> &'a ColumnSchema {
		let schema: &'a Schema = self.schema;
		schema.column_at(index)
	}

	fn check_type(&self, index: usize, requested: Type) -> kudu_type::Result<&'a ColumnSchema> {
		let column = self.column_schema(index);
		if column.r#type != requested {
			return_error!(type_mismatch(&column.name, column.r#type, requested));
		}
		Ok(column)
	}

	/// Fails unless the column holds a value: NotFound when unset,
	/// InvalidArgument when NULL.
	fn check_readable(&self, index: usize, column: &ColumnSchema) -> kudu_type::Result<()> {
		if !self.isset.get(index) {
			return_error!(column_not_set(&column.name, column.r#type));
		}
		if self.null_bit(index) {
			return_error!(column_is_null(&column.name, column.r#type));
		}
		Ok(())
	}

	fn null_bit(&self, index: usize) -> bool {
		(self.data[index / 8] & (1 << (index % 8))) != 0
	}

	fn set_null_bit(&mut self, index: usize, null: bool) {
		let byte = index / 8;
		let bit = index % 8;
		if null {
			self.data[byte] |= 1 << bit;
		} else {
			self.data[byte] &= !(1 << bit);
		}
	}

	fn string_bytes(&self, index: usize) -> &[u8] {
		self.strings[index].as_ref().map(StringCell::as_bytes).unwrap_or_default()
	}

	/// The only path that mutates column state. Any owned string held by the
	/// column is released before the new state is recorded.
	fn store(&mut self, index: usize, cell: Cell<'a>) {
		if let Some(StringCell::Owned(previous)) = self.strings[index].take() {
			trace!(column = index, bytes = previous.len(), "released owned string");
		}

		let schema = self.schema;
		let layout = schema.layout();
		match cell {
			Cell::Unset => {
				self.isset.set(index, false);
				self.set_null_bit(index, false);
			}
			Cell::Null => {
				self.isset.set(index, true);
				self.set_null_bit(index, true);
			}
			Cell::Fixed(slot) => {
				let bytes = slot.as_slice();
				layout.slot_mut(&mut self.data, index)[..bytes.len()].copy_from_slice(bytes);
				self.isset.set(index, true);
				self.set_null_bit(index, false);
			}
			Cell::String(string) => {
				let len = string.len() as u64;
				layout.slot_mut(&mut self.data, index).copy_from_slice(&len.to_le_bytes());
				if string.is_owned() {
					trace!(column = index, bytes = string.len(), "took ownership of string copy");
				}
				self.strings[index] = Some(string);
				self.isset.set(index, true);
				self.set_null_bit(index, false);
			}
		}
	}

	/// State of a column at a validated index.
	fn state(&self, index: usize) -> ColumnState<'_> {
		if !self.isset.get(index) {
			return ColumnState::Unset;
		}
		if self.null_bit(index) {
			return ColumnState::Null;
		}
		ColumnState::Value(self.read_value(index))
	}

	fn read_value(&self, index: usize) -> ValueRef<'_> {
		let slot = self.schema.layout().slot(&self.data, index);
		match self.column_schema(index).r#type {
			Type::Bool => bool::from_slot(slot).into_value_ref(),
			Type::Int8 => i8::from_slot(slot).into_value_ref(),
			Type::Int16 => i16::from_slot(slot).into_value_ref(),
			Type::Int32 => i32::from_slot(slot).into_value_ref(),
			Type::Int64 => i64::from_slot(slot).into_value_ref(),
			Type::Float => f32::from_slot(slot).into_value_ref(),
			Type::Double => f64::from_slot(slot).into_value_ref(),
			Type::String => ValueRef::String(self.string_bytes(index)),
		}
	}
}
