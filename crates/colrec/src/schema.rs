// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema derivation from registered record layouts.
//!
//! Derivation walks a layout's field directives in declaration order and
//! builds the matching [`SchemaNode`] tree. It is a pure function of the
//! layout: deriving the same type twice yields structurally equal trees, and
//! nothing is cached across calls.
//!
//! Recursion depth equals the nesting depth of the declared record types.
//! There is no cycle guard; a layout that (transitively) references itself
//! recurses until the stack is exhausted. Recursive record types are
//! unsupported.

use crate::catalog::PrimitiveKind;
use crate::descriptor::{SchemaField, SchemaNode};
use crate::error::SchemaError;
use crate::layout::{FieldRole, FieldSpec, Record, RecordLayout, TypeRef};
use std::collections::HashSet;

/// Derive the columnar schema for record type `T`.
///
/// The root node is always [`SchemaNode::Struct`], with one field per
/// registered directive, in declaration order.
///
/// # Example
///
/// ```rust
/// use colrec::{derive_schema, NativeType, RawValue, Record, RecordLayout};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Record for Point {
///     fn layout() -> RecordLayout {
///         RecordLayout::builder("Point")
///             .primitive("x", NativeType::F64)
///             .primitive("y", NativeType::F64)
///             .build()
///     }
///
///     fn raw_values(&self) -> Vec<RawValue> {
///         vec![self.x.into(), self.y.into()]
///     }
/// }
///
/// let schema = derive_schema::<Point>().unwrap();
/// assert_eq!(schema.to_string(), "struct<x:double,y:double>");
/// ```
pub fn derive_schema<T: Record>() -> Result<SchemaNode, SchemaError> {
    let layout = T::layout();
    let fields = struct_fields(&layout)?;
    log::trace!(
        "derived schema for record [{}] ({} fields)",
        layout.name(),
        fields.len()
    );
    Ok(SchemaNode::Struct(fields))
}

/// Resolve one layout level into schema fields, checking key uniqueness
/// incrementally in declaration order.
pub(crate) fn struct_fields(layout: &RecordLayout) -> Result<Vec<SchemaField>, SchemaError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(layout.len());
    let mut fields = Vec::with_capacity(layout.len());
    for spec in layout.fields() {
        let key = spec.key();
        if !seen.insert(key) {
            return Err(SchemaError::DuplicateFieldKey {
                record: layout.name(),
                key: key.to_string(),
            });
        }
        fields.push(SchemaField::new(key, field_node(layout.name(), spec)?));
    }
    Ok(fields)
}

fn field_node(record: &'static str, spec: &FieldSpec) -> Result<SchemaNode, SchemaError> {
    match spec.role() {
        FieldRole::Primitive { declared, kind } => {
            let resolved = match kind {
                Some(kind) => *kind,
                None => match declared {
                    TypeRef::Primitive(native) => PrimitiveKind::from_native(*native),
                    TypeRef::Record(_) => {
                        return Err(SchemaError::NonPrimitiveField {
                            record,
                            key: spec.key().to_string(),
                        })
                    }
                },
            };
            primitive_node(spec.key(), resolved)
        }
        FieldRole::Struct { layout } => Ok(SchemaNode::Struct(struct_fields(&layout())?)),
        FieldRole::List { element } => {
            Ok(SchemaNode::List(Box::new(element_node(spec.key(), element)?)))
        }
        FieldRole::Map { key, value } => Ok(SchemaNode::Map(
            Box::new(element_node(spec.key(), key)?),
            Box::new(element_node(spec.key(), value)?),
        )),
    }
}

/// Element rule for list/map type arguments: primitive when the reference
/// names a native representation, a nested struct otherwise.
fn element_node(key: &str, type_ref: &TypeRef) -> Result<SchemaNode, SchemaError> {
    match type_ref {
        TypeRef::Primitive(native) => primitive_node(key, PrimitiveKind::from_native(*native)),
        TypeRef::Record(layout) => Ok(SchemaNode::Struct(struct_fields(&layout())?)),
    }
}

fn primitive_node(key: &str, kind: PrimitiveKind) -> Result<SchemaNode, SchemaError> {
    if kind.native().is_none() {
        return Err(SchemaError::SchemaGeneration {
            key: key.to_string(),
            kind,
        });
    }
    Ok(SchemaNode::Primitive(kind))
}
