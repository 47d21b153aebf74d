// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value materialization: converting record instances into schema-shaped
//! value trees.
//!
//! Materialization re-resolves the record's layout exactly as schema
//! derivation does, then pairs each collected raw value with its schema node
//! and dispatches per node category. The materializer converts only the
//! int/long/double/string primitive kinds; every other schema-legal kind
//! fails here with [`MaterializeError::UnsupportedKind`]. The converted set
//! is a strict subset of what the schema generator can produce (see
//! [`PrimitiveKind::is_materializable`]).

use crate::catalog::PrimitiveKind;
use crate::descriptor::{SchemaField, SchemaNode};
use crate::error::MaterializeError;
use crate::layout::Record;
use crate::raw::RawValue;
use crate::schema;
use crate::value::Value;

/// Materialize `record` into a value tree shaped like its derived schema.
///
/// The result's shape is structurally isomorphic to
/// [`derive_schema::<T>()`](crate::schema::derive_schema): same node
/// categories and nesting, same field count and order at every struct level.
///
/// # Example
///
/// ```rust
/// use colrec::{materialize, NativeType, RawValue, Record, RecordLayout, Value};
///
/// struct Sensor {
///     id: i32,
///     reading: f64,
/// }
///
/// impl Record for Sensor {
///     fn layout() -> RecordLayout {
///         RecordLayout::builder("Sensor")
///             .primitive("id", NativeType::I32)
///             .primitive("reading", NativeType::F64)
///             .build()
///     }
///
///     fn raw_values(&self) -> Vec<RawValue> {
///         vec![self.id.into(), self.reading.into()]
///     }
/// }
///
/// let row = Sensor { id: 7, reading: 21.5 };
/// let value = materialize(&row).unwrap();
/// assert_eq!(value, Value::Struct(vec![Value::Int(7), Value::Double(21.5)]));
/// ```
pub fn materialize<T: Record>(record: &T) -> Result<Value, MaterializeError> {
    let layout = T::layout();
    let fields = schema::struct_fields(&layout)?;
    log::trace!("materializing record [{}]", layout.name());
    struct_value(&fields, record.raw_values())
}

/// Convert one struct level. The collected count must equal the schema field
/// count; a divergence means the layout and the instance disagree.
fn struct_value(fields: &[SchemaField], raw: Vec<RawValue>) -> Result<Value, MaterializeError> {
    if raw.len() != fields.len() {
        return Err(MaterializeError::FieldCountMismatch {
            expected: fields.len(),
            got: raw.len(),
        });
    }
    let mut children = Vec::with_capacity(fields.len());
    for (field, value) in fields.iter().zip(raw) {
        children.push(node_value(&field.node, value)?);
    }
    Ok(Value::Struct(children))
}

fn node_value(node: &SchemaNode, raw: RawValue) -> Result<Value, MaterializeError> {
    match node {
        SchemaNode::Primitive(kind) => primitive_value(*kind, raw),
        SchemaNode::Struct(fields) => match raw {
            RawValue::Record(nested) => struct_value(fields, nested.raw_values()),
            other => Err(mismatch("struct", &other)),
        },
        SchemaNode::List(element) => match raw {
            RawValue::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(node_value(element, item)?);
                }
                Ok(Value::List(out))
            }
            other => Err(mismatch("list", &other)),
        },
        SchemaNode::Map(key_node, value_node) => match raw {
            RawValue::Map(entries) => {
                let mut out: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
                for (raw_key, raw_value) in entries {
                    let key = node_value(key_node, raw_key)?;
                    let value = node_value(value_node, raw_value)?;
                    // Later entries win on converted-key collisions.
                    match out.iter_mut().find(|(existing, _)| *existing == key) {
                        Some(entry) => entry.1 = value,
                        None => out.push((key, value)),
                    }
                }
                Ok(Value::Map(out))
            }
            other => Err(mismatch("map", &other)),
        },
    }
}

/// Per-kind coercion. Exhaustive over the catalog: the four materializable
/// kinds convert, everything else is unsupported.
fn primitive_value(kind: PrimitiveKind, raw: RawValue) -> Result<Value, MaterializeError> {
    match kind {
        PrimitiveKind::Int => cast_int(raw).map(Value::Int),
        PrimitiveKind::Long => cast_long(raw).map(Value::Long),
        PrimitiveKind::Double => match raw {
            RawValue::F64(v) => Ok(Value::Double(v)),
            other => Err(mismatch("double", &other)),
        },
        PrimitiveKind::String => match raw {
            RawValue::Str(v) => Ok(Value::Str(v)),
            other => Err(mismatch("string", &other)),
        },
        other => Err(MaterializeError::UnsupportedKind { kind: other }),
    }
}

/// Conversion to a 32-bit integer: direct, narrowing (low 32 bits) from a
/// wide integer, or truncating toward zero from a double.
fn cast_int(raw: RawValue) -> Result<i32, MaterializeError> {
    match raw {
        RawValue::I32(v) => Ok(v),
        RawValue::I64(v) => Ok(v as i32),
        RawValue::F64(v) => Ok(v as i32),
        other => Err(mismatch("int", &other)),
    }
}

/// Conversion to a 64-bit integer: direct, widening from a narrow integer,
/// or truncating toward zero from a double.
fn cast_long(raw: RawValue) -> Result<i64, MaterializeError> {
    match raw {
        RawValue::I64(v) => Ok(v),
        RawValue::I32(v) => Ok(i64::from(v)),
        RawValue::F64(v) => Ok(v as i64),
        other => Err(mismatch("long", &other)),
    }
}

fn mismatch(expected: &'static str, got: &RawValue) -> MaterializeError {
    MaterializeError::Coercion {
        expected,
        got: got.kind_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NativeType;
    use crate::layout::{FieldSpec, RecordLayout, TypeRef};

    struct Counter {
        hits: i64,
    }

    impl Record for Counter {
        fn layout() -> RecordLayout {
            RecordLayout::builder("Counter")
                .primitive("hits", NativeType::I64)
                .build()
        }

        fn raw_values(&self) -> Vec<RawValue> {
            vec![self.hits.into()]
        }
    }

    #[test]
    fn long_field_accepts_direct_value() {
        let value = materialize(&Counter { hits: 5 }).expect("materialize");
        assert_eq!(value, Value::Struct(vec![Value::Long(5)]));
    }

    #[test]
    fn long_field_widens_narrow_integer() {
        // Layout says i64, the instance hands over an i32 (version skew that
        // the coercion policy absorbs by widening).
        struct Skewed;
        impl Record for Skewed {
            fn layout() -> RecordLayout {
                Counter::layout()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![5i32.into()]
            }
        }

        let value = materialize(&Skewed).expect("materialize");
        assert_eq!(value, Value::Struct(vec![Value::Long(5)]));
    }

    #[test]
    fn long_field_truncates_double_toward_zero() {
        struct Skewed;
        impl Record for Skewed {
            fn layout() -> RecordLayout {
                Counter::layout()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![(-7.9f64).into()]
            }
        }

        let value = materialize(&Skewed).expect("materialize");
        assert_eq!(value, Value::Struct(vec![Value::Long(-7)]));
    }

    #[test]
    fn int_field_narrows_and_truncates() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row")
                    .primitive("a", NativeType::I32)
                    .field(FieldSpec::primitive("b", NativeType::I64).with_kind(PrimitiveKind::Int))
                    .field(FieldSpec::primitive("c", NativeType::F64).with_kind(PrimitiveKind::Int))
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![1i32.into(), ((1i64 << 32) + 2).into(), 3.7f64.into()]
            }
        }

        let value = materialize(&Row).expect("materialize");
        assert_eq!(
            value,
            Value::Struct(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn int_field_rejects_other_raw_kinds() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row").primitive("a", NativeType::I32).build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![1.5f32.into()]
            }
        }

        let err = materialize(&Row).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::Coercion {
                expected: "int",
                got: "f32",
            }
        );
    }

    #[test]
    fn double_field_requires_exact_width() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row").primitive("x", NativeType::F64).build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![1.5f32.into()]
            }
        }

        let err = materialize(&Row).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::Coercion {
                expected: "double",
                got: "f32",
            }
        );
    }

    #[test]
    fn string_field_rejects_non_text() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row").string("name").build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![42i32.into()]
            }
        }

        let err = materialize(&Row).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::Coercion {
                expected: "string",
                got: "i32",
            }
        );
    }

    #[test]
    fn schema_legal_kind_fails_materialization() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row").primitive("active", NativeType::Bool).build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![true.into()]
            }
        }

        // Boolean derives fine but the materializer does not convert it.
        assert!(crate::schema::derive_schema::<Row>().is_ok());
        let err = materialize(&Row).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::UnsupportedKind {
                kind: PrimitiveKind::Boolean,
            }
        );
    }

    #[test]
    fn field_count_mismatch_detected() {
        struct Lying;
        impl Record for Lying {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Lying")
                    .primitive("a", NativeType::I32)
                    .primitive("b", NativeType::I32)
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![1i32.into()]
            }
        }

        let err = materialize(&Lying).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::FieldCountMismatch {
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn list_preserves_order_and_length() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row")
                    .list("tags", TypeRef::Primitive(NativeType::I32))
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![vec![1i32, 2, 3].into()]
            }
        }

        let value = materialize(&Row).expect("materialize");
        assert_eq!(
            value,
            Value::Struct(vec![Value::List(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
            ])])
        );
    }

    #[test]
    fn list_element_fault_propagates() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row")
                    .list("tags", TypeRef::Primitive(NativeType::I32))
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![RawValue::List(vec![1i32.into(), "oops".into()])]
            }
        }

        let err = materialize(&Row).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::Coercion {
                expected: "int",
                got: "str",
            }
        );
    }

    #[test]
    fn map_collision_keeps_later_entry() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row")
                    .map(
                        "scores",
                        TypeRef::Primitive(NativeType::I32),
                        TypeRef::Primitive(NativeType::Str),
                    )
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                // Both keys coerce to Int(1); the second entry must win.
                vec![RawValue::map(vec![
                    (1i32.into(), "first".into()),
                    (1.9f64.into(), "second".into()),
                ])]
            }
        }

        let value = materialize(&Row).expect("materialize");
        let map = &value.as_struct().expect("struct")[0];
        assert_eq!(map.map_len(), Some(1));
        assert_eq!(
            map.map_get(&Value::Int(1)).and_then(Value::as_str),
            Some("second")
        );
    }

    #[test]
    fn category_mismatch_is_a_coercion_fault() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row")
                    .list("tags", TypeRef::Primitive(NativeType::I32))
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec![42i32.into()]
            }
        }

        let err = materialize(&Row).unwrap_err();
        assert_eq!(
            err,
            MaterializeError::Coercion {
                expected: "list",
                got: "i32",
            }
        );
    }

    #[test]
    fn schema_fault_propagates_through_materialize() {
        struct Row;
        impl Record for Row {
            fn layout() -> RecordLayout {
                RecordLayout::builder("Row")
                    .string("id")
                    .field(FieldSpec::primitive("uid", NativeType::I32).renamed("id"))
                    .build()
            }

            fn raw_values(&self) -> Vec<RawValue> {
                vec!["x".into(), 1i32.into()]
            }
        }

        // Materialization re-derives the schema, so layout faults surface
        // here as well, wrapped.
        let err = materialize(&Row).unwrap_err();
        assert!(matches!(err, MaterializeError::Schema(_)));
    }
}
