// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticColumn, render::DefaultRenderer};

/// Coarse classification callers can branch on without parsing codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Unknown column name, or a read of a column that was never set.
	NotFound,
	/// Column index outside the schema.
	OutOfRange,
	/// Type mismatch, NULL where a value is required, or an invalid request.
	InvalidArgument,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.trim_end())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		match self.0.code.as_str() {
			diagnostic::row::COLUMN_NOT_FOUND | diagnostic::row::COLUMN_NOT_SET => ErrorKind::NotFound,
			diagnostic::row::COLUMN_OUT_OF_RANGE => ErrorKind::OutOfRange,
			_ => ErrorKind::InvalidArgument,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.kind() == ErrorKind::NotFound
	}

	pub fn is_out_of_range(&self) -> bool {
		self.kind() == ErrorKind::OutOfRange
	}

	pub fn is_invalid_argument(&self) -> bool {
		self.kind() == ErrorKind::InvalidArgument
	}
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}
