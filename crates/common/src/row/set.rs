// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::{Type, Value, error::diagnostic::row::column_not_nullable, return_error};

use super::{
	Cell, ColumnRef, PartialRow, StringCell,
	cell::FixedValue,
};

impl<'a> PartialRow<'a> {
	pub fn set_bool(&mut self, column: impl ColumnRef, value: bool) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	pub fn set_i8(&mut self, column: impl ColumnRef, value: i8) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	pub fn set_i16(&mut self, column: impl ColumnRef, value: i16) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	pub fn set_i32(&mut self, column: impl ColumnRef, value: i32) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	pub fn set_i64(&mut self, column: impl ColumnRef, value: i64) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	pub fn set_f32(&mut self, column: impl ColumnRef, value: f32) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	pub fn set_f64(&mut self, column: impl ColumnRef, value: f64) -> kudu_type::Result<()> {
		self.set_fixed(column, value)
	}

	/// Sets a string column to a view of `value` without copying. The bytes
	/// must stay alive, and unchanged, for as long as the row.
	pub fn set_string<V>(&mut self, column: impl ColumnRef, value: &'a V) -> kudu_type::Result<()>
	where
		V: AsRef<[u8]> + ?Sized,
	{
		let index = column.resolve(self.schema)?;
		self.check_type(index, Type::String)?;
		self.store(index, Cell::String(StringCell::Borrowed(value.as_ref())));
		Ok(())
	}

	/// Sets a string column to a private copy of `value`.
	pub fn set_string_copy(&mut self, column: impl ColumnRef, value: impl AsRef<[u8]>) -> kudu_type::Result<()> {
		let index = column.resolve(self.schema)?;
		self.check_type(index, Type::String)?;
		self.store(index, Cell::String(StringCell::Owned(Box::from(value.as_ref()))));
		Ok(())
	}

	/// Marks the column NULL. Fails with InvalidArgument if the column is not
	/// nullable, leaving the row unchanged.
	pub fn set_null(&mut self, column: impl ColumnRef) -> kudu_type::Result<()> {
		let index = column.resolve(self.schema)?;
		let target = self.column_schema(index);
		if !target.nullable {
			return_error!(column_not_nullable(&target.name, target.r#type));
		}
		self.store(index, Cell::Null);
		Ok(())
	}

	/// Returns the column to the unspecified state.
	pub fn unset(&mut self, column: impl ColumnRef) -> kudu_type::Result<()> {
		let index = column.resolve(self.schema)?;
		self.store(index, Cell::Unset);
		Ok(())
	}

	/// Sets a column from a dynamically typed value. The value's type must
	/// match the column's declared type; strings are moved into the row.
	pub fn set_value(&mut self, column: impl ColumnRef, value: Value) -> kudu_type::Result<()> {
		let index = column.resolve(self.schema)?;
		match value {
			Value::Bool(v) => self.set_fixed(index, v),
			Value::Int8(v) => self.set_fixed(index, v),
			Value::Int16(v) => self.set_fixed(index, v),
			Value::Int32(v) => self.set_fixed(index, v),
			Value::Int64(v) => self.set_fixed(index, v),
			Value::Float(v) => self.set_fixed(index, v),
			Value::Double(v) => self.set_fixed(index, v),
			Value::String(bytes) => {
				self.check_type(index, Type::String)?;
				self.store(index, Cell::String(StringCell::Owned(bytes.into_boxed_slice())));
				Ok(())
			}
		}
	}

	fn set_fixed<T: FixedValue>(&mut self, column: impl ColumnRef, value: T) -> kudu_type::Result<()> {
		let index = column.resolve(self.schema)?;
		self.check_type(index, T::get_type())?;
		self.store(index, Cell::Fixed(value.to_slot()));
		Ok(())
	}
}
