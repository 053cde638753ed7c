// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! End-to-end tests for building partial rows and encoding their keys

use kudu_common::{ColumnSchema, ColumnState, PartialRow, Result, Schema, Type, Value, ValueRef};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

fn id_name() -> Schema {
	Schema::builder().key_column("id", Type::Int32).nullable_column("name", Type::String).build().unwrap()
}

#[test]
fn test_insert_row_with_key_and_copied_name() -> Result<()> {
	init_tracing();
	let schema = id_name();
	let mut row = PartialRow::new(&schema);

	row.set_i32("id", 7)?;
	row.set_string_copy("name", "alice")?;

	let key = row.encode_row_key()?;
	assert_eq!(hex::encode(&key), "80000007");

	assert!(row.is_column_set("id")?);
	assert!(row.is_column_set("name")?);
	assert!(!row.is_null("id")?);
	assert!(!row.is_null("name")?);
	assert_eq!(row.to_string(), r#"int32 id=7, string name="alice""#);
	Ok(())
}

#[test]
fn test_null_name_without_id_fails_to_encode() -> Result<()> {
	init_tracing();
	let schema = id_name();
	let mut row = PartialRow::new(&schema);

	row.set_null("name")?;

	let err = row.encode_row_key().unwrap_err();
	assert!(err.is_invalid_argument());
	assert!(err.message.contains("`id`"), "{}", err);
	assert!(!row.is_key_set());
	Ok(())
}

#[test]
fn test_every_type_reads_back() -> Result<()> {
	let schema = Schema::new([
		ColumnSchema::key("k", Type::Int16),
		ColumnSchema::new("b", Type::Bool),
		ColumnSchema::new("i8", Type::Int8),
		ColumnSchema::new("i16", Type::Int16),
		ColumnSchema::new("i32", Type::Int32),
		ColumnSchema::new("i64", Type::Int64),
		ColumnSchema::new("f32", Type::Float),
		ColumnSchema::new("f64", Type::Double),
		ColumnSchema::new("s", Type::String),
	])?;

	let cases: Vec<Vec<Value>> = vec![
		vec![
			Value::Int16(i16::MIN),
			Value::Bool(false),
			Value::Int8(i8::MIN),
			Value::Int16(i16::MIN),
			Value::Int32(i32::MIN),
			Value::Int64(i64::MIN),
			Value::Float(f32::MIN),
			Value::Double(f64::MIN),
			Value::from(""),
		],
		vec![
			Value::Int16(0),
			Value::Bool(true),
			Value::Int8(0),
			Value::Int16(0),
			Value::Int32(0),
			Value::Int64(0),
			Value::Float(-0.0),
			Value::Double(f64::EPSILON),
			Value::String(vec![0x00, 0xff, 0x00]),
		],
		vec![
			Value::Int16(i16::MAX),
			Value::Bool(true),
			Value::Int8(i8::MAX),
			Value::Int16(i16::MAX),
			Value::Int32(i32::MAX),
			Value::Int64(i64::MAX),
			Value::Float(f32::INFINITY),
			Value::Double(f64::MAX),
			Value::from("a longer string value"),
		],
	];

	for values in cases {
		let mut row = PartialRow::new(&schema);
		for (index, value) in values.iter().enumerate() {
			row.set_value(index, value.clone())?;
		}
		assert!(row.all_columns_set());

		for (index, value) in values.iter().enumerate() {
			assert_eq!(&row.get_value(index)?, value);
			assert_eq!(row.column(index)?, ColumnState::Value(value.as_ref()));
		}
	}
	Ok(())
}

#[test]
fn test_name_and_index_access_are_interchangeable() -> Result<()> {
	let schema = id_name();
	let mut by_name = PartialRow::new(&schema);
	let mut by_index = PartialRow::new(&schema);

	by_name.set_i32("id", -40)?;
	by_name.set_string("name", "x")?;
	by_index.set_i32(0, -40)?;
	by_index.set_string(1, "x")?;

	assert_eq!(by_name.to_string(), by_index.to_string());
	assert_eq!(by_name.encode_row_key()?, by_index.encode_row_key()?);
	assert_eq!(by_name.column("name")?, ColumnState::Value(ValueRef::String(b"x")));
	Ok(())
}

#[test]
fn test_row_transitions() -> Result<()> {
	let schema = id_name();
	let mut row = PartialRow::new(&schema);

	assert_eq!(row.column("name")?, ColumnState::Unset);
	row.set_null("name")?;
	assert_eq!(row.column("name")?, ColumnState::Null);
	assert!(row.get_string("name").unwrap_err().is_invalid_argument());

	row.set_string_copy("name", "v")?;
	assert_eq!(row.column("name")?, ColumnState::Value(ValueRef::String(b"v")));

	row.unset("name")?;
	assert_eq!(row.column("name")?, ColumnState::Unset);
	assert!(row.get_string("name").unwrap_err().is_not_found());
	Ok(())
}

#[test]
fn test_decoded_key_reencodes_identically() -> Result<()> {
	let schema = Schema::builder()
		.key_column("tenant", Type::String)
		.key_column("shard", Type::Int8)
		.key_column("path", Type::String)
		.column("size", Type::Int64)
		.build()?;

	let mut row = PartialRow::new(&schema);
	row.set_string("tenant", b"acme\x00corp")?;
	row.set_i8("shard", -2)?;
	row.set_string("path", b"/a/b\x00")?;
	row.set_i64("size", 10)?;

	let key = row.encode_row_key()?;
	let decoded = PartialRow::decode_row_key(&schema, &key)?;

	assert_eq!(decoded.encode_row_key()?, key);
	assert_eq!(decoded.to_string(), r#"string tenant="acme\x00corp", int8 shard=-2, string path="/a/b\x00""#);
	Ok(())
}

#[test]
fn test_schema_json_binds_rows() -> Result<()> {
	let json = r#"[
		{"name": "id", "type": "Int64", "is_key": true},
		{"name": "note", "type": "String", "nullable": true}
	]"#;
	let schema: Schema = serde_json::from_str(json).unwrap();

	let mut row = PartialRow::new(&schema);
	row.set_i64("id", 1)?;
	row.set_null("note")?;
	assert!(row.all_columns_set());
	assert_eq!(hex::encode(row.encode_row_key()?), "8000000000000001");
	Ok(())
}
