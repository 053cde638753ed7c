// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::{
	Type, ValueRef,
	error::diagnostic::key::{
		float_key_nan, float_key_not_supported, key_column_not_set, key_column_null, trailing_key_bytes,
	},
	return_error,
};
use tracing::instrument;

use super::{
	EncodedKey,
	keycode::{KeyDeserializer, KeySerializer},
};
use crate::{
	config::{FloatKeyEncoding, KeyEncoderConfig},
	row::{ColumnState, PartialRow},
	schema::{ColumnSchema, Schema},
};

/// Encodes the primary key columns of a row, in key order, into a byte string
/// whose unsigned lexicographic order matches the order of the key tuples.
#[derive(Debug, Clone, Default)]
pub struct RowKeyEncoder {
	config: KeyEncoderConfig,
}

impl RowKeyEncoder {
	pub fn new(config: KeyEncoderConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &KeyEncoderConfig {
		&self.config
	}

	/// Fails with InvalidArgument unless every key column is set to a
	/// non-NULL value.
	#[instrument(name = "row_key::encode", level = "trace", skip(self, row))]
	pub fn encode(&self, row: &PartialRow<'_>) -> kudu_type::Result<EncodedKey> {
		let schema = row.schema();
		let key_columns = schema.key_columns();
		let mut serializer = KeySerializer::with_capacity(self.config.initial_capacity);

		for (position, &index) in key_columns.iter().enumerate() {
			let column = schema.column_at(index);
			let last = position + 1 == key_columns.len();

			match row.column(index)? {
				ColumnState::Unset => return_error!(key_column_not_set(&column.name, column.r#type)),
				ColumnState::Null => return_error!(key_column_null(&column.name, column.r#type)),
				ColumnState::Value(value) => self.encode_value(&mut serializer, column, value, last)?,
			}
		}

		Ok(serializer.to_encoded_key())
	}

	fn encode_value(
		&self,
		serializer: &mut KeySerializer,
		column: &ColumnSchema,
		value: ValueRef<'_>,
		last: bool,
	) -> kudu_type::Result<()> {
		match value {
			ValueRef::Bool(v) => {
				serializer.extend_bool(v);
			}
			ValueRef::Int8(v) => {
				serializer.extend_i8(v);
			}
			ValueRef::Int16(v) => {
				serializer.extend_i16(v);
			}
			ValueRef::Int32(v) => {
				serializer.extend_i32(v);
			}
			ValueRef::Int64(v) => {
				serializer.extend_i64(v);
			}
			ValueRef::Float(v) => {
				self.check_float(column, v.is_nan())?;
				serializer.extend_f32(v);
			}
			ValueRef::Double(v) => {
				self.check_float(column, v.is_nan())?;
				serializer.extend_f64(v);
			}
			ValueRef::String(bytes) if last => {
				serializer.extend_raw_bytes(bytes);
			}
			ValueRef::String(bytes) => {
				serializer.extend_escaped_bytes(bytes);
			}
		}
		Ok(())
	}

	fn check_float(&self, column: &ColumnSchema, nan: bool) -> kudu_type::Result<()> {
		match self.config.float_keys {
			FloatKeyEncoding::Reject => return_error!(float_key_not_supported(&column.name, column.r#type)),
			FloatKeyEncoding::TotalOrder if nan => return_error!(float_key_nan(&column.name, column.r#type)),
			FloatKeyEncoding::TotalOrder => Ok(()),
		}
	}

	/// Rebuilds a row holding every key column of `schema` from an encoded
	/// key. Strings are copied into the row. Malformed or trailing bytes fail
	/// with InvalidArgument.
	#[instrument(name = "row_key::decode", level = "trace", skip(self, schema, key), fields(key_hex = %hex::encode(key)))]
	pub fn decode<'a>(&self, schema: &'a Schema, key: &[u8]) -> kudu_type::Result<PartialRow<'a>> {
		let key_columns = schema.key_columns();
		let mut row = PartialRow::new(schema);
		let mut de = KeyDeserializer::from_bytes(key);

		for (position, &index) in key_columns.iter().enumerate() {
			let column = schema.column_at(index);
			let last = position + 1 == key_columns.len();

			match column.r#type {
				Type::Bool => row.set_bool(index, de.read_bool()?)?,
				Type::Int8 => row.set_i8(index, de.read_i8()?)?,
				Type::Int16 => row.set_i16(index, de.read_i16()?)?,
				Type::Int32 => row.set_i32(index, de.read_i32()?)?,
				Type::Int64 => row.set_i64(index, de.read_i64()?)?,
				Type::Float => {
					self.check_float(column, false)?;
					let value = de.read_f32()?;
					self.check_float(column, value.is_nan())?;
					row.set_f32(index, value)?
				}
				Type::Double => {
					self.check_float(column, false)?;
					let value = de.read_f64()?;
					self.check_float(column, value.is_nan())?;
					row.set_f64(index, value)?
				}
				Type::String if last => row.set_string_copy(index, de.read_raw_bytes())?,
				Type::String => row.set_string_copy(index, de.read_escaped_bytes()?)?,
			}
		}

		if !de.is_empty() {
			return_error!(trailing_key_bytes(de.remaining()));
		}

		Ok(row)
	}
}
