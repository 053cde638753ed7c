// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::{error::diagnostic::key::malformed_key, return_error};

/// Reads values written by [`KeySerializer`](super::KeySerializer) back out of
/// a key, front to back.
#[derive(Debug)]
pub struct KeyDeserializer<'b> {
	buffer: &'b [u8],
	position: usize,
}

impl<'b> KeyDeserializer<'b> {
	pub fn from_bytes(buffer: &'b [u8]) -> Self {
		Self {
			buffer,
			position: 0,
		}
	}

	pub fn remaining(&self) -> &'b [u8] {
		&self.buffer[self.position..]
	}

	pub fn is_empty(&self) -> bool {
		self.position >= self.buffer.len()
	}

	fn take<const N: usize>(&mut self) -> kudu_type::Result<[u8; N]> {
		let remaining = self.remaining();
		if remaining.len() < N {
			return_error!(malformed_key(format!(
				"expected {} bytes at offset {}, found {}",
				N,
				self.position,
				remaining.len()
			)));
		}
		let mut bytes = [0u8; N];
		bytes.copy_from_slice(&remaining[..N]);
		self.position += N;
		Ok(bytes)
	}

	pub fn read_bool(&mut self) -> kudu_type::Result<bool> {
		let position = self.position;
		match self.take::<1>()? {
			[0x00] => Ok(false),
			[0x01] => Ok(true),
			[b] => return_error!(malformed_key(format!("invalid boolean byte {:#04x} at offset {}", b, position))),
		}
	}

	pub fn read_i8(&mut self) -> kudu_type::Result<i8> {
		let [byte] = self.take::<1>()?;
		Ok((byte ^ 0x80) as i8)
	}

	pub fn read_i16(&mut self) -> kudu_type::Result<i16> {
		let bytes = self.take::<2>()?;
		Ok((u16::from_be_bytes(bytes) ^ (1 << 15)) as i16)
	}

	pub fn read_i32(&mut self) -> kudu_type::Result<i32> {
		let bytes = self.take::<4>()?;
		Ok((u32::from_be_bytes(bytes) ^ (1 << 31)) as i32)
	}

	pub fn read_i64(&mut self) -> kudu_type::Result<i64> {
		let bytes = self.take::<8>()?;
		Ok((u64::from_be_bytes(bytes) ^ (1 << 63)) as i64)
	}

	pub fn read_f32(&mut self) -> kudu_type::Result<f32> {
		let mut bits = u32::from_be_bytes(self.take::<4>()?);
		match bits >> 31 {
			1 => bits ^= 1 << 31,
			_ => bits = !bits,
		}
		Ok(f32::from_bits(bits))
	}

	pub fn read_f64(&mut self) -> kudu_type::Result<f64> {
		let mut bits = u64::from_be_bytes(self.take::<8>()?);
		match bits >> 63 {
			1 => bits ^= 1 << 63,
			_ => bits = !bits,
		}
		Ok(f64::from_bits(bits))
	}

	/// Reads bytes written by `extend_escaped_bytes`, consuming the
	/// `0x00 0x00` terminator.
	pub fn read_escaped_bytes(&mut self) -> kudu_type::Result<Vec<u8>> {
		let start = self.position;
		let mut output = Vec::new();
		let mut iter = self.remaining().iter();

		loop {
			match iter.next() {
				Some(0x00) => match iter.next() {
					Some(0x00) => break,
					Some(0x01) => output.push(0x00),
					Some(b) => {
						return_error!(malformed_key(format!(
							"invalid escape sequence 0x00 {:#04x} in string starting at offset {}",
							b, start
						)))
					}
					None => {
						return_error!(malformed_key(format!(
							"unterminated string starting at offset {}",
							start
						)))
					}
				},
				Some(&b) => output.push(b),
				None => {
					return_error!(malformed_key(format!("unterminated string starting at offset {}", start)))
				}
			}
		}

		self.position = self.buffer.len() - iter.as_slice().len();
		Ok(output)
	}

	/// Consumes the rest of the key verbatim.
	pub fn read_raw_bytes(&mut self) -> &'b [u8] {
		let rest = self.remaining();
		self.position = self.buffer.len();
		rest
	}
}
