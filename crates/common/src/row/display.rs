// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use super::{ColumnState, PartialRow};

/// Lists the set columns in ordinal order as `<type> <name>=<value>`,
/// separated by `, `. NULL columns print as `NULL`.
impl Display for PartialRow<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for (position, index) in self.isset.ones().enumerate() {
			if position > 0 {
				f.write_str(", ")?;
			}

			let column = self.column_schema(index);
			write!(f, "{} {}=", column.r#type, column.name)?;

			match self.state(index) {
				ColumnState::Value(value) => write!(f, "{}", value)?,
				ColumnState::Null => f.write_str("NULL")?,
				ColumnState::Unset => {}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use kudu_type::Type;

	use crate::{
		row::PartialRow,
		schema::{Schema, tests::users},
	};

	#[test]
	fn test_set_columns_only() {
		let schema = users();
		let mut row = PartialRow::new(&schema);
		row.set_i32("id", 7).unwrap();
		row.set_string("name", "alice").unwrap();
		assert_eq!(row.to_string(), r#"int32 id=7, string name="alice""#);
	}

	#[test]
	fn test_null_and_gaps() {
		let schema = users();
		let mut row = PartialRow::new(&schema);
		row.set_null("name").unwrap();
		row.set_i8("age", -1).unwrap();
		assert_eq!(row.to_string(), "string name=NULL, int8 age=-1");
	}

	#[test]
	fn test_escapes_string_bytes() {
		let schema = Schema::builder().key_column("k", Type::String).build().unwrap();
		let mut row = PartialRow::new(&schema);
		row.set_string("k", b"a\x00b").unwrap();
		assert_eq!(row.to_string(), r#"string k="a\x00b""#);
	}
}
