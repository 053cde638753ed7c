// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::{GetType, ValueRef};

/// The bytes of a string column: either a view of caller memory that must
/// outlive the row, or a private copy the row frees on overwrite, unset,
/// set-null, or drop.
#[derive(Debug, PartialEq, Eq)]
pub enum StringCell<'a> {
	Borrowed(&'a [u8]),
	Owned(Box<[u8]>),
}

impl StringCell<'_> {
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			StringCell::Borrowed(bytes) => bytes,
			StringCell::Owned(bytes) => bytes,
		}
	}

	pub fn is_owned(&self) -> bool {
		matches!(self, StringCell::Owned(_))
	}

	pub fn len(&self) -> usize {
		self.as_bytes().len()
	}
}

/// Target state of a column mutation.
pub(crate) enum Cell<'a> {
	Unset,
	Null,
	Fixed(Slot),
	String(StringCell<'a>),
}

/// Little-endian bytes of a fixed-width value, at most eight.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
	bytes: [u8; 8],
	len: usize,
}

impl Slot {
	fn new(src: &[u8]) -> Self {
		let mut bytes = [0u8; 8];
		bytes[..src.len()].copy_from_slice(src);
		Self {
			bytes,
			len: src.len(),
		}
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.bytes[..self.len]
	}
}

/// A native scalar stored in a fixed-width column slot.
pub(crate) trait FixedValue: GetType + Copy {
	fn to_slot(self) -> Slot;

	fn from_slot(slot: &[u8]) -> Self;

	fn into_value_ref(self) -> ValueRef<'static>;
}

impl FixedValue for bool {
	fn to_slot(self) -> Slot {
		Slot::new(&[self as u8])
	}

	fn from_slot(slot: &[u8]) -> Self {
		slot[0] != 0
	}

	fn into_value_ref(self) -> ValueRef<'static> {
		ValueRef::Bool(self)
	}
}

macro_rules! impl_fixed_value {
	($($native:ty => $variant:ident),* $(,)?) => {
		$(
			impl FixedValue for $native {
				fn to_slot(self) -> Slot {
					Slot::new(&self.to_le_bytes())
				}

				fn from_slot(slot: &[u8]) -> Self {
					let mut bytes = [0u8; size_of::<$native>()];
					bytes.copy_from_slice(&slot[..size_of::<$native>()]);
					<$native>::from_le_bytes(bytes)
				}

				fn into_value_ref(self) -> ValueRef<'static> {
					ValueRef::$variant(self)
				}
			}
		)*
	};
}

impl_fixed_value! {
	i8 => Int8,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	f32 => Float,
	f64 => Double,
}
