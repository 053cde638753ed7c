// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::PartialRow;
use crate::{
	encoding::{EncodedKey, RowKeyEncoder},
	schema::Schema,
};

impl<'a> PartialRow<'a> {
	/// Encodes the primary key with the default encoder configuration.
	pub fn encode_row_key(&self) -> kudu_type::Result<EncodedKey> {
		RowKeyEncoder::default().encode(self)
	}

	pub fn encode_row_key_with(&self, encoder: &RowKeyEncoder) -> kudu_type::Result<EncodedKey> {
		encoder.encode(self)
	}

	/// Like [`encode_row_key`](Self::encode_row_key), but panics when the key
	/// cannot be encoded.
	pub fn to_encoded_row_key_or_die(&self) -> EncodedKey {
		match self.encode_row_key() {
			Ok(key) => key,
			Err(err) => {
				tracing::error!(row = %self, "failed to encode row key: {}", err);
				panic!("failed to encode row key: {}", err)
			}
		}
	}

	/// Rebuilds a row with every key column set from a key produced by
	/// [`encode_row_key`](Self::encode_row_key).
	pub fn decode_row_key(schema: &'a Schema, key: &[u8]) -> kudu_type::Result<Self> {
		RowKeyEncoder::default().decode(schema, key)
	}
}
