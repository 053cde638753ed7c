// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// How Float and Double key columns are handled by the row key encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatKeyEncoding {
	/// Floating point key columns fail to encode with InvalidArgument.
	#[default]
	Reject,
	/// Big-endian IEEE bits with the sign bit flipped for non-negative values
	/// and every bit flipped for negative ones. NaN is rejected.
	TotalOrder,
}

/// Configuration for the row key encoder.
#[derive(Debug, Clone)]
pub struct KeyEncoderConfig {
	/// Policy for floating point key columns.
	pub float_keys: FloatKeyEncoding,
	/// Bytes reserved up front for each encoded key.
	pub initial_capacity: usize,
}

impl Default for KeyEncoderConfig {
	fn default() -> Self {
		Self {
			float_keys: FloatKeyEncoding::Reject,
			initial_capacity: 32,
		}
	}
}

impl KeyEncoderConfig {
	pub fn with_float_keys(mut self, float_keys: FloatKeyEncoding) -> Self {
		self.float_keys = float_keys;
		self
	}

	pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
		self.initial_capacity = initial_capacity;
		self
	}
}
