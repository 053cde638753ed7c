// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// A fixed-size bitmap, one bit per column.
///
/// Bit `i` lives in byte `i / 8` at position `i % 8`. The length never changes
/// after construction and every accessor panics on an out-of-range index, so
/// callers validate column indexes before touching the bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVec {
	bytes: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bytes: vec![fill; len.div_ceil(8)],
			len,
		};
		result.mask_tail();
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	#[inline]
	pub fn get(&self, index: usize) -> bool {
		self.check(index);
		(self.bytes[index / 8] & (1 << (index % 8))) != 0
	}

	pub fn try_get(&self, index: usize) -> Option<bool> {
		if index < self.len {
			Some(self.get(index))
		} else {
			None
		}
	}

	#[inline]
	pub fn set(&mut self, index: usize, value: bool) {
		self.check(index);
		let byte = index / 8;
		let bit = index % 8;
		if value {
			self.bytes[byte] |= 1 << bit;
		} else {
			self.bytes[byte] &= !(1 << bit);
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bytes.iter().map(|b| b.count_ones() as usize).sum()
	}

	/// True when every bit is set. Vacuously true for an empty bitmap.
	pub fn all_set(&self) -> bool {
		let bits = self.len;
		for (i, &byte) in self.bytes.iter().enumerate() {
			let bits_in_byte = if i == self.bytes.len() - 1 && bits % 8 != 0 {
				bits % 8
			} else {
				8
			};

			let mask = if bits_in_byte == 8 {
				0xFF
			} else {
				(1u8 << bits_in_byte) - 1
			};
			if (byte & mask) != mask {
				return false;
			}
		}

		true
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Indexes of all set bits, ascending.
	pub fn ones(&self) -> BitVecOnes<'_> {
		BitVecOnes {
			bitvec: self,
			next: 0,
		}
	}

	fn check(&self, index: usize) {
		assert!(index < self.len, "bit index {} out of range for bitmap of length {}", index, self.len);
	}

	fn mask_tail(&mut self) {
		let rem = self.len % 8;
		if rem != 0 {
			if let Some(last) = self.bytes.last_mut() {
				*last &= (1u8 << rem) - 1;
			}
		}
	}
}

pub struct BitVecOnes<'a> {
	bitvec: &'a BitVec,
	next: usize,
}

impl Iterator for BitVecOnes<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		while self.next < self.bitvec.len {
			let index = self.next;
			self.next += 1;
			if self.bitvec.get(index) {
				return Some(index);
			}
		}
		None
	}
}
