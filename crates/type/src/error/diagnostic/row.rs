// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, DiagnosticColumn};
use crate::value::Type;

pub const COLUMN_NOT_FOUND: &str = "ROW_001";
pub const COLUMN_OUT_OF_RANGE: &str = "ROW_002";
pub const TYPE_MISMATCH: &str = "ROW_003";
pub const COLUMN_NOT_NULLABLE: &str = "ROW_004";
pub const COLUMN_NOT_SET: &str = "ROW_005";
pub const COLUMN_IS_NULL: &str = "ROW_006";

pub fn column_not_found(name: &str) -> Diagnostic {
	Diagnostic {
		code: COLUMN_NOT_FOUND.to_string(),
		message: format!("column `{}` not found in schema", name),
		column: None,
		label: Some("unknown column name".to_string()),
		help: Some("check for typos or resolve the column by index".to_string()),
		notes: vec![],
	}
}

pub fn column_index_out_of_range(index: usize, column_count: usize) -> Diagnostic {
	Diagnostic {
		code: COLUMN_OUT_OF_RANGE.to_string(),
		message: format!("column index {} out of range, schema has {} columns", index, column_count),
		column: None,
		label: Some("invalid column index".to_string()),
		help: Some(format!("valid column indexes are 0..{}", column_count)),
		notes: vec![],
	}
}

pub fn type_mismatch(name: &str, declared: Type, requested: Type) -> Diagnostic {
	Diagnostic {
		code: TYPE_MISMATCH.to_string(),
		message: format!("invalid type {} provided for column `{}` (expected {})", requested, name, declared),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("type mismatch".to_string()),
		help: Some(format!("use the {} accessor for this column", declared)),
		notes: vec![],
	}
}

pub fn column_not_nullable(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: COLUMN_NOT_NULLABLE.to_string(),
		message: format!("column `{}` is not nullable", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("NULL not allowed".to_string()),
		help: Some("use unset to revert the column to its default instead".to_string()),
		notes: vec![],
	}
}

pub fn column_not_set(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: COLUMN_NOT_SET.to_string(),
		message: format!("column `{}` is not set", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("no value was supplied".to_string()),
		help: None,
		notes: vec!["an unset column takes the server-side default".to_string()],
	}
}

pub fn column_is_null(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: COLUMN_IS_NULL.to_string(),
		message: format!("column `{}` is NULL", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("NULL has no value".to_string()),
		help: Some("check is_null before reading the column".to_string()),
		notes: vec![],
	}
}
