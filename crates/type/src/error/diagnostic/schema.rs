// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, DiagnosticColumn};
use crate::value::Type;

pub fn empty_schema() -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_001".to_string(),
		message: "schema must contain at least one column".to_string(),
		column: None,
		label: None,
		help: None,
		notes: vec![],
	}
}

pub fn duplicate_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_002".to_string(),
		message: format!("duplicate column name `{}`", name),
		column: None,
		label: Some("column already exists".to_string()),
		help: Some("column names must be unique within a schema".to_string()),
		notes: vec![],
	}
}

pub fn no_key_columns() -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_003".to_string(),
		message: "schema must declare at least one key column".to_string(),
		column: None,
		label: None,
		help: Some("mark the primary key columns with ColumnSchema::key".to_string()),
		notes: vec![],
	}
}

pub fn nullable_key_column(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_004".to_string(),
		message: format!("key column `{}` must not be nullable", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("nullable key".to_string()),
		help: None,
		notes: vec![],
	}
}
