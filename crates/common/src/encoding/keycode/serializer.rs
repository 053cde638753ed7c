// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::encoding::EncodedKey;

/// Appends order-preserving encodings of primitive values to a byte buffer.
#[derive(Debug, Default)]
pub struct KeySerializer {
	buffer: Vec<u8>,
}

impl KeySerializer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn extend_bool(&mut self, value: bool) -> &mut Self {
		self.buffer.push(value as u8);
		self
	}

	pub fn extend_i8(&mut self, value: i8) -> &mut Self {
		self.buffer.push((value as u8) ^ 0x80);
		self
	}

	pub fn extend_i16(&mut self, value: i16) -> &mut Self {
		self.buffer.extend_from_slice(&((value as u16) ^ (1 << 15)).to_be_bytes());
		self
	}

	pub fn extend_i32(&mut self, value: i32) -> &mut Self {
		self.buffer.extend_from_slice(&((value as u32) ^ (1 << 31)).to_be_bytes());
		self
	}

	pub fn extend_i64(&mut self, value: i64) -> &mut Self {
		self.buffer.extend_from_slice(&((value as u64) ^ (1 << 63)).to_be_bytes());
		self
	}

	/// Callers reject NaN before encoding.
	pub fn extend_f32(&mut self, value: f32) -> &mut Self {
		let mut bits = value.to_bits();
		match bits >> 31 {
			0 => bits ^= 1 << 31,
			_ => bits = !bits,
		}
		self.buffer.extend_from_slice(&bits.to_be_bytes());
		self
	}

	/// Callers reject NaN before encoding.
	pub fn extend_f64(&mut self, value: f64) -> &mut Self {
		let mut bits = value.to_bits();
		match bits >> 63 {
			0 => bits ^= 1 << 63,
			_ => bits = !bits,
		}
		self.buffer.extend_from_slice(&bits.to_be_bytes());
		self
	}

	/// Bytes followed by more key material: every `0x00` becomes `0x00 0x01`
	/// and the value ends with `0x00 0x00`, so a shorter value sorts before
	/// any value it prefixes.
	pub fn extend_escaped_bytes(&mut self, bytes: &[u8]) -> &mut Self {
		for &byte in bytes {
			match byte {
				0x00 => self.buffer.extend_from_slice(&[0x00, 0x01]),
				b => self.buffer.push(b),
			}
		}
		self.buffer.extend_from_slice(&[0x00, 0x00]);
		self
	}

	/// Bytes at the end of the key, copied verbatim.
	pub fn extend_raw_bytes(&mut self, bytes: &[u8]) -> &mut Self {
		self.buffer.extend_from_slice(bytes);
		self
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	pub fn finish(self) -> Vec<u8> {
		self.buffer
	}

	pub fn to_encoded_key(self) -> EncodedKey {
		EncodedKey::new(self.buffer)
	}
}
