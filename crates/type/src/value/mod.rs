// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod r#type;

pub use r#type::{GetType, Type};

/// A column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// A boolean: true or false.
	Bool(bool),
	/// A 1-byte signed integer
	Int8(i8),
	/// A 2-byte signed integer
	Int16(i16),
	/// A 4-byte signed integer
	Int32(i32),
	/// An 8-byte signed integer
	Int64(i64),
	/// A 4-byte floating point
	Float(f32),
	/// An 8-byte floating point
	Double(f64),
	/// Variable-length binary or text data
	String(Vec<u8>),
}

/// A borrowed view of a column value. String bytes point into the row that
/// produced the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
	Bool(bool),
	Int8(i8),
	Int16(i16),
	Int32(i32),
	Int64(i64),
	Float(f32),
	Double(f64),
	String(&'a [u8]),
}

impl Value {
	pub fn get_type(&self) -> Type {
		self.as_ref().get_type()
	}

	pub fn as_ref(&self) -> ValueRef<'_> {
		match self {
			Value::Bool(v) => ValueRef::Bool(*v),
			Value::Int8(v) => ValueRef::Int8(*v),
			Value::Int16(v) => ValueRef::Int16(*v),
			Value::Int32(v) => ValueRef::Int32(*v),
			Value::Int64(v) => ValueRef::Int64(*v),
			Value::Float(v) => ValueRef::Float(*v),
			Value::Double(v) => ValueRef::Double(*v),
			Value::String(v) => ValueRef::String(v),
		}
	}

	pub fn string(value: impl Into<Vec<u8>>) -> Self {
		Value::String(value.into())
	}
}

impl ValueRef<'_> {
	pub fn get_type(&self) -> Type {
		match self {
			ValueRef::Bool(_) => Type::Bool,
			ValueRef::Int8(_) => Type::Int8,
			ValueRef::Int16(_) => Type::Int16,
			ValueRef::Int32(_) => Type::Int32,
			ValueRef::Int64(_) => Type::Int64,
			ValueRef::Float(_) => Type::Float,
			ValueRef::Double(_) => Type::Double,
			ValueRef::String(_) => Type::String,
		}
	}

	pub fn to_value(&self) -> Value {
		match *self {
			ValueRef::Bool(v) => Value::Bool(v),
			ValueRef::Int8(v) => Value::Int8(v),
			ValueRef::Int16(v) => Value::Int16(v),
			ValueRef::Int32(v) => Value::Int32(v),
			ValueRef::Int64(v) => Value::Int64(v),
			ValueRef::Float(v) => Value::Float(v),
			ValueRef::Double(v) => Value::Double(v),
			ValueRef::String(v) => Value::String(v.to_vec()),
		}
	}
}

impl Display for ValueRef<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ValueRef::Bool(v) => Display::fmt(v, f),
			ValueRef::Int8(v) => Display::fmt(v, f),
			ValueRef::Int16(v) => Display::fmt(v, f),
			ValueRef::Int32(v) => Display::fmt(v, f),
			ValueRef::Int64(v) => Display::fmt(v, f),
			ValueRef::Float(v) => Display::fmt(v, f),
			ValueRef::Double(v) => Display::fmt(v, f),
			ValueRef::String(v) => write!(f, "\"{}\"", v.escape_ascii()),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.as_ref(), f)
	}
}

macro_rules! impl_from_scalar {
	($($native:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$native> for Value {
				fn from(value: $native) -> Self {
					Value::$variant(value)
				}
			}
		)*
	};
}

impl_from_scalar! {
	bool => Bool,
	i8 => Int8,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	f32 => Float,
	f64 => Double,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.as_bytes().to_vec())
	}
}

impl From<&[u8]> for Value {
	fn from(value: &[u8]) -> Self {
		Value::String(value.to_vec())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Value::String(value)
	}
}
