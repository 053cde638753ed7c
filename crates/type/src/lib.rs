// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod util;
pub mod value;

pub use error::{Error, ErrorKind};
pub use util::BitVec;
pub use value::{GetType, Type, Value, ValueRef};

pub type Result<T> = std::result::Result<T, Error>;
