// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, DiagnosticColumn};
use crate::value::Type;

pub fn key_column_not_set(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: "KEY_001".to_string(),
		message: format!("all key columns must be set: column `{}` is not set", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("missing key column".to_string()),
		help: Some("set every key column before encoding the row key".to_string()),
		notes: vec![],
	}
}

pub fn key_column_null(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: "KEY_002".to_string(),
		message: format!("key column `{}` is NULL", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("NULL key".to_string()),
		help: None,
		notes: vec!["key columns must carry a non-NULL value".to_string()],
	}
}

pub fn float_key_not_supported(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: "KEY_003".to_string(),
		message: format!("key column `{}` of type {} cannot be encoded", name, declared),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("floating point key".to_string()),
		help: Some("configure the encoder with FloatKeyEncoding::TotalOrder to allow floating point keys"
			.to_string()),
		notes: vec![],
	}
}

pub fn float_key_nan(name: &str, declared: Type) -> Diagnostic {
	Diagnostic {
		code: "KEY_004".to_string(),
		message: format!("key column `{}` holds NaN", name),
		column: Some(DiagnosticColumn::new(name, declared)),
		label: Some("NaN has no position in the key order".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn malformed_key(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "KEY_005".to_string(),
		message: format!("malformed row key: {}", reason.into()),
		column: None,
		label: None,
		help: None,
		notes: vec![],
	}
}

pub fn trailing_key_bytes(remaining: &[u8]) -> Diagnostic {
	Diagnostic {
		code: "KEY_006".to_string(),
		message: format!("unexpected trailing bytes {:x?} at end of row key", remaining),
		column: None,
		label: None,
		help: None,
		notes: vec![],
	}
}
