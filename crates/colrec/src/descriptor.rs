// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema node trees describing derived columnar types.

use crate::catalog::PrimitiveKind;
use std::fmt;

/// One named field of a struct schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaField {
    /// Exposed key name.
    pub key: String,
    /// Field schema.
    pub node: SchemaNode,
}

impl SchemaField {
    /// Create a new schema field.
    pub fn new(key: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            key: key.into(),
            node,
        }
    }
}

/// A derived columnar schema tree.
///
/// Trees are acyclic by construction; derivation does not support recursive
/// record types. The root returned by schema derivation is always `Struct`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchemaNode {
    /// Leaf primitive.
    Primitive(PrimitiveKind),
    /// Ordered named fields; keys are unique within one level.
    Struct(Vec<SchemaField>),
    /// Homogeneous element type.
    List(Box<SchemaNode>),
    /// Independently-typed key and value.
    Map(Box<SchemaNode>, Box<SchemaNode>),
}

impl SchemaNode {
    /// Check if this is a primitive node.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Check if this is a struct node.
    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[SchemaField]> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get a struct field by key.
    pub fn field(&self, key: &str) -> Option<&SchemaField> {
        self.fields()?.iter().find(|f| f.key == key)
    }

    /// Get a struct field index by key.
    pub fn field_index(&self, key: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.key == key)
    }

    /// Primitive kind of a leaf node.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Canonical schema text, e.g. `struct<name:string,age:int>`.
impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.type_name()),
            Self::Struct(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", field.key, field.node)?;
                }
                f.write_str(">")
            }
            Self::List(element) => write!(f, "list<{}>", element),
            Self::Map(key, value) => write!(f, "map<{},{}>", key, value),
        }
    }
}
