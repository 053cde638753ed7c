// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use kudu_type::Type;

/// Byte layout of a row buffer: a null bitmap (one bit per column) followed
/// by every column's fixed-width slot, each aligned to its natural alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
	pub fields: Vec<Field>,
	/// size of the null bitmap in bytes
	pub null_bitmap_size: usize,
	/// total size of the row buffer in bytes
	pub row_size: usize,
	pub alignment: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	pub offset: usize,
	pub size: usize,
	pub align: usize,
	pub r#type: Type,
}

impl RowLayout {
	pub fn new(types: &[Type]) -> Self {
		let num_fields = types.len();
		let null_bitmap_size = num_fields.div_ceil(8);

		let mut offset = null_bitmap_size;
		let mut fields = Vec::with_capacity(num_fields);
		let mut max_align = 1;

		for &r#type in types {
			let size = r#type.size();
			let align = r#type.alignment();

			offset = align_up(offset, align);
			fields.push(Field {
				offset,
				size,
				align,
				r#type,
			});

			offset += size;
			max_align = max_align.max(align);
		}

		RowLayout {
			fields,
			null_bitmap_size,
			row_size: align_up(offset, max_align),
			alignment: max_align,
		}
	}

	/// A zeroed buffer of `row_size` bytes.
	pub fn allocate(&self) -> Vec<u8> {
		vec![0; self.row_size]
	}

	pub const fn data_offset(&self) -> usize {
		self.null_bitmap_size
	}

	pub fn offset(&self, index: usize) -> usize {
		self.fields[index].offset
	}

	pub fn slot<'b>(&self, data: &'b [u8], index: usize) -> &'b [u8] {
		let field = &self.fields[index];
		&data[field.offset..field.offset + field.size]
	}

	pub fn slot_mut<'b>(&self, data: &'b mut [u8], index: usize) -> &'b mut [u8] {
		let field = &self.fields[index];
		&mut data[field.offset..field.offset + field.size]
	}
}

fn align_up(offset: usize, align: usize) -> usize {
	(offset + align).saturating_sub(1) & !(align.saturating_sub(1))
}

#[cfg(test)]
pub mod tests {
	mod new {
		use kudu_type::Type;

		use crate::schema::layout::RowLayout;

		#[test]
		fn test_single_field_bool() {
			let layout = RowLayout::new(&[Type::Bool]);
			assert_eq!(layout.null_bitmap_size, 1);
			assert_eq!(layout.fields.len(), 1);
			assert_eq!(layout.fields[0].offset, 1);
			assert_eq!(layout.alignment, 1);
			assert_eq!(layout.row_size, 2);
		}

		#[test]
		fn test_multiple_fields() {
			let layout = RowLayout::new(&[Type::Int8, Type::Int16, Type::Int32]);
			assert_eq!(layout.null_bitmap_size, 1);

			assert_eq!(layout.fields[0].offset, 1);
			assert_eq!(layout.fields[1].offset, 2); // aligned to 2
			assert_eq!(layout.fields[2].offset, 4); // aligned to 4

			assert_eq!(layout.alignment, 4);
			assert_eq!(layout.row_size, 8);
		}

		#[test]
		fn test_string_slot_is_eight_bytes() {
			let layout = RowLayout::new(&[Type::Int32, Type::String]);
			assert_eq!(layout.fields[0].offset, 4);
			assert_eq!(layout.fields[1].offset, 8);
			assert_eq!(layout.fields[1].size, 8);
			assert_eq!(layout.row_size, 16);
		}

		#[test]
		fn test_nine_fields_bitmap_size_two() {
			let types = vec![
				Type::Bool,
				Type::Int8,
				Type::Int16,
				Type::Int32,
				Type::Int64,
				Type::Float,
				Type::Double,
				Type::String,
				Type::Int8,
			];

			let layout = RowLayout::new(&types);

			assert_eq!(layout.null_bitmap_size, 2);
			assert_eq!(layout.fields[0].offset, 2);

			for field in &layout.fields {
				assert!(field.offset >= 2);
				assert_eq!(field.offset % field.align, 0);
			}

			assert_eq!(layout.row_size % layout.alignment, 0);
		}
	}

	mod allocate {
		use kudu_type::Type;

		use crate::schema::layout::RowLayout;

		#[test]
		fn test_initial_state() {
			let layout = RowLayout::new(&[Type::Bool, Type::Int8, Type::Int16]);
			let row = layout.allocate();
			assert!(row.iter().all(|b| *b == 0));
			assert_eq!(row.len(), layout.row_size);
		}

		#[test]
		fn test_slot_bounds() {
			let layout = RowLayout::new(&[Type::Int8, Type::Int64]);
			let mut row = layout.allocate();
			layout.slot_mut(&mut row, 1).copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
			assert_eq!(layout.slot(&row, 1), &[1, 2, 3, 4, 5, 6, 7, 8]);
			assert_eq!(layout.slot(&row, 0), &[0]);
		}
	}
}
