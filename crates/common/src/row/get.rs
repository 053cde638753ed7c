// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::{Type, Value};

use super::{ColumnRef, ColumnState, PartialRow, cell::FixedValue};

impl<'a> PartialRow<'a> {
	pub fn get_bool(&self, column: impl ColumnRef) -> kudu_type::Result<bool> {
		self.get_fixed(column)
	}

	pub fn get_i8(&self, column: impl ColumnRef) -> kudu_type::Result<i8> {
		self.get_fixed(column)
	}

	pub fn get_i16(&self, column: impl ColumnRef) -> kudu_type::Result<i16> {
		self.get_fixed(column)
	}

	pub fn get_i32(&self, column: impl ColumnRef) -> kudu_type::Result<i32> {
		self.get_fixed(column)
	}

	pub fn get_i64(&self, column: impl ColumnRef) -> kudu_type::Result<i64> {
		self.get_fixed(column)
	}

	pub fn get_f32(&self, column: impl ColumnRef) -> kudu_type::Result<f32> {
		self.get_fixed(column)
	}

	pub fn get_f64(&self, column: impl ColumnRef) -> kudu_type::Result<f64> {
		self.get_fixed(column)
	}

	/// Borrows the bytes of a string column, whether the row owns them or
	/// not.
	pub fn get_string(&self, column: impl ColumnRef) -> kudu_type::Result<&[u8]> {
		let index = column.resolve(self.schema)?;
		let target = self.check_type(index, Type::String)?;
		self.check_readable(index, target)?;
		Ok(self.string_bytes(index))
	}

	/// Reads any column as an owned value. Fails like the typed getters when
	/// the column is unset or NULL.
	pub fn get_value(&self, column: impl ColumnRef) -> kudu_type::Result<Value> {
		let index = column.resolve(self.schema)?;
		self.check_readable(index, self.column_schema(index))?;
		Ok(self.read_value(index).to_value())
	}

	/// Unset, NULL, or the borrowed value of a column.
	pub fn column(&self, column: impl ColumnRef) -> kudu_type::Result<ColumnState<'_>> {
		let index = column.resolve(self.schema)?;
		Ok(self.state(index))
	}

	/// Whether a value or NULL was explicitly supplied.
	pub fn is_column_set(&self, column: impl ColumnRef) -> kudu_type::Result<bool> {
		let index = column.resolve(self.schema)?;
		Ok(self.isset.get(index))
	}

	/// Whether the column is set to NULL. False for unset columns.
	pub fn is_null(&self, column: impl ColumnRef) -> kudu_type::Result<bool> {
		let index = column.resolve(self.schema)?;
		Ok(self.isset.get(index) && self.null_bit(index))
	}

	/// Whether every primary key column has been set.
	pub fn is_key_set(&self) -> bool {
		self.schema.key_columns().iter().all(|&index| self.isset.get(index))
	}

	pub fn all_columns_set(&self) -> bool {
		self.isset.all_set()
	}

	fn get_fixed<T: FixedValue>(&self, column: impl ColumnRef) -> kudu_type::Result<T> {
		let index = column.resolve(self.schema)?;
		let target = self.check_type(index, T::get_type())?;
		self.check_readable(index, target)?;
		Ok(T::from_slot(self.schema.layout().slot(&self.data, index)))
	}
}

#[cfg(test)]
pub mod tests {
	mod get_fixed {
		use crate::{row::PartialRow, schema::tests::users};

		#[test]
		fn test_unset_is_not_found() {
			let schema = users();
			let row = PartialRow::new(&schema);
			let err = row.get_i32("id").unwrap_err();
			assert!(err.is_not_found());
			assert_eq!(err.code, "ROW_005");
		}

		#[test]
		fn test_type_mismatch_is_invalid_argument() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_i32("id", 1).unwrap();
			let err = row.get_i64("id").unwrap_err();
			assert!(err.is_invalid_argument());
			assert_eq!(err.code, "ROW_003");
			assert!(row.get_string("id").unwrap_err().is_invalid_argument());
		}

		#[test]
		fn test_by_index_matches_by_name() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_i8(2, -3).unwrap();
			assert_eq!(row.get_i8("age").unwrap(), row.get_i8(2).unwrap());
		}

		#[test]
		fn test_resolution_errors() {
			let schema = users();
			let row = PartialRow::new(&schema);
			assert!(row.get_i32("missing").unwrap_err().is_not_found());
			assert!(row.get_i32(3).unwrap_err().is_out_of_range());
			assert!(row.is_column_set(3).unwrap_err().is_out_of_range());
			assert!(row.is_null("missing").unwrap_err().is_not_found());
		}
	}

	mod get_string {
		use crate::{row::PartialRow, schema::tests::users};

		#[test]
		fn test_null_is_invalid_argument() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_null("name").unwrap();
			let err = row.get_string("name").unwrap_err();
			assert!(err.is_invalid_argument());
			assert_eq!(err.code, "ROW_006");
		}

		#[test]
		fn test_borrowed_view_points_at_caller_bytes() {
			let schema = users();
			let source = b"borrowed".to_vec();
			let mut row = PartialRow::new(&schema);
			row.set_string("name", &source).unwrap();
			assert!(std::ptr::eq(row.get_string("name").unwrap().as_ptr(), source.as_ptr()));
			assert_eq!(row.owned_string_count(), 0);
		}

		#[test]
		fn test_empty_string() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_string_copy("name", "").unwrap();
			assert!(row.is_column_set("name").unwrap());
			assert_eq!(row.get_string("name").unwrap(), b"");
		}
	}

	mod column {
		use kudu_type::{Value, ValueRef};

		use crate::{
			row::{ColumnState, PartialRow},
			schema::tests::users,
		};

		#[test]
		fn test_three_states() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_i32("id", 4).unwrap();
			row.set_null("name").unwrap();

			assert_eq!(row.column("id").unwrap(), ColumnState::Value(ValueRef::Int32(4)));
			assert_eq!(row.column("name").unwrap(), ColumnState::Null);
			assert_eq!(row.column("age").unwrap(), ColumnState::Unset);
			assert!(row.column("name").unwrap().is_set());
			assert!(!row.column("age").unwrap().is_set());
		}

		#[test]
		fn test_get_value() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_string("name", "ann").unwrap();
			assert_eq!(row.get_value("name").unwrap(), Value::from("ann"));
			assert!(row.get_value("age").unwrap_err().is_not_found());
			row.set_null("name").unwrap();
			assert!(row.get_value("name").unwrap_err().is_invalid_argument());
		}
	}

	mod predicates {
		use kudu_type::Type;

		use crate::{
			row::PartialRow,
			schema::{Schema, tests::users},
		};

		#[test]
		fn test_key_set_ignores_value_columns() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_string("name", "x").unwrap();
			assert!(!row.is_key_set());
			row.set_i32("id", 1).unwrap();
			assert!(row.is_key_set());
			assert!(!row.all_columns_set());
			row.set_i8("age", 1).unwrap();
			assert!(row.all_columns_set());
		}

		#[test]
		fn test_composite_key_set() {
			let schema = Schema::builder()
				.key_column("a", Type::String)
				.key_column("b", Type::Int16)
				.build()
				.unwrap();
			let mut row = PartialRow::new(&schema);
			row.set_string("a", "x").unwrap();
			assert!(!row.is_key_set());
			row.set_i16("b", 1).unwrap();
			assert!(row.is_key_set());
			row.unset("a").unwrap();
			assert!(!row.is_key_set());
		}

		#[test]
		fn test_all_columns_set_counts_null() {
			let schema = users();
			let mut row = PartialRow::new(&schema);
			row.set_i32("id", 1).unwrap();
			row.set_null("name").unwrap();
			row.set_i8("age", 2).unwrap();
			assert!(row.all_columns_set());
		}
	}
}
