// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Keycode is a lexicographical order-preserving binary encoding for primary
//! key columns. Comparing two encoded keys as unsigned byte strings gives the
//! same answer as comparing the key tuples column by column.
//!
//! The encoding is not self-describing: the schema supplies the column types
//! and the binary key must conform to them.
//!
//! Values are encoded as follows:
//!
//! * `bool`: `0x00` for `false`, `0x01` for `true`.
//! * `i8`, `i16`, `i32`, `i64`: big-endian binary, sign bit flipped.
//! * `f32`, `f64`: big-endian binary, sign bit flipped, all flipped if
//!   negative. Only produced when float keys are enabled.
//! * bytes in a non-final key column: `0x00` escaped as `0x00 0x01`,
//!   terminated with `0x00 0x00`.
//! * bytes in the final key column: verbatim.

mod deserializer;
mod serializer;

pub use deserializer::KeyDeserializer;
pub use serializer::KeySerializer;
