// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Serialization of derived schemas (requires the `serde` feature).

#![cfg(feature = "serde")]

use colrec::{derive_schema, NativeType, RawValue, Record, RecordLayout};

struct Reading {
    id: i64,
    level: f64,
}

impl Record for Reading {
    fn layout() -> RecordLayout {
        RecordLayout::builder("Reading")
            .primitive("id", NativeType::I64)
            .primitive("level", NativeType::F64)
            .build()
    }

    fn raw_values(&self) -> Vec<RawValue> {
        vec![self.id.into(), self.level.into()]
    }
}

#[test]
fn schema_serializes_to_json() {
    let schema = derive_schema::<Reading>().expect("derive");
    let json = serde_json::to_value(&schema).expect("serialize");

    let fields = json
        .get("Struct")
        .and_then(|v| v.as_array())
        .expect("struct fields");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["key"], "id");
    assert_eq!(fields[0]["node"]["Primitive"], "Long");
}

#[test]
fn schema_round_trips_through_json() {
    let schema = derive_schema::<Reading>().expect("derive");
    let json = serde_json::to_string(&schema).expect("serialize");
    let back: colrec::SchemaNode = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(schema, back);
}
