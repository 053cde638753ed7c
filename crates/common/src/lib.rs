// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
pub mod encoding;
pub mod row;
pub mod schema;

pub use config::{FloatKeyEncoding, KeyEncoderConfig};
pub use encoding::{EncodedKey, RowKeyEncoder};
pub use kudu_type::{Error, ErrorKind, Result, Type, Value, ValueRef};
pub use row::{ColumnRef, ColumnState, PartialRow, RowView};
pub use schema::{ColumnSchema, Schema, SchemaBuilder};
