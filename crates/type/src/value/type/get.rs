// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

/// Maps a native scalar to the column type that stores it.
pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for bool {
	fn get_type() -> Type {
		Type::Bool
	}
}

impl GetType for i8 {
	fn get_type() -> Type {
		Type::Int8
	}
}

impl GetType for i16 {
	fn get_type() -> Type {
		Type::Int16
	}
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int32
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int64
	}
}

impl GetType for f32 {
	fn get_type() -> Type {
		Type::Float
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Double
	}
}
