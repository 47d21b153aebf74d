// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field-metadata registry: ordered directives describing how the fields of a
//! record type map into a columnar schema.
//!
//! A record type registers one [`FieldSpec`] per exposed field; fields the
//! author does not register simply never appear in the schema. Layouts are
//! plain values built through [`RecordLayoutBuilder`], so registration is a
//! pure function of the type with no global state.

use crate::catalog::{NativeType, PrimitiveKind};
use crate::raw::RawValue;

/// Function returning the layout of a nested record type.
pub type LayoutFn = fn() -> RecordLayout;

/// Reference to a field's declared type.
#[derive(Debug, Clone, Copy)]
pub enum TypeRef {
    /// A native primitive representation.
    Primitive(NativeType),
    /// A nested record type, referenced by its layout function.
    Record(LayoutFn),
}

/// Role directive carried by a registered field.
#[derive(Debug, Clone, Copy)]
pub enum FieldRole {
    /// Leaf primitive. `kind` overrides the inferred kind when set.
    Primitive {
        declared: TypeRef,
        kind: Option<PrimitiveKind>,
    },
    /// Nested struct.
    Struct { layout: LayoutFn },
    /// Homogeneous sequence with a reified element type.
    List { element: TypeRef },
    /// Association with independently-typed key and value.
    Map { key: TypeRef, value: TypeRef },
}

/// One registered field directive.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    key: Option<&'static str>,
    role: FieldRole,
}

impl FieldSpec {
    /// Create a field directive with an explicit role.
    pub fn new(name: &'static str, role: FieldRole) -> Self {
        Self {
            name,
            key: None,
            role,
        }
    }

    /// Primitive field over a native representation; kind is inferred.
    pub fn primitive(name: &'static str, native: NativeType) -> Self {
        Self::primitive_of(name, TypeRef::Primitive(native))
    }

    /// Primitive directive with full control over the declared type.
    ///
    /// Declaring a record reference here without a kind override is a
    /// misconfiguration the schema generator rejects.
    pub fn primitive_of(name: &'static str, declared: TypeRef) -> Self {
        Self::new(
            name,
            FieldRole::Primitive {
                declared,
                kind: None,
            },
        )
    }

    /// Nested struct field.
    pub fn nested(name: &'static str, layout: LayoutFn) -> Self {
        Self::new(name, FieldRole::Struct { layout })
    }

    /// List field with a reified element type.
    pub fn list(name: &'static str, element: TypeRef) -> Self {
        Self::new(name, FieldRole::List { element })
    }

    /// Map field with reified key and value types.
    pub fn map(name: &'static str, key: TypeRef, value: TypeRef) -> Self {
        Self::new(name, FieldRole::Map { key, value })
    }

    /// Override the inferred primitive kind. No effect on non-primitive roles.
    pub fn with_kind(mut self, kind: PrimitiveKind) -> Self {
        if let FieldRole::Primitive { kind: slot, .. } = &mut self.role {
            *slot = Some(kind);
        }
        self
    }

    /// Expose the field under a different key.
    pub fn renamed(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    /// Declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolved exposed key: the override if present, else the declared name.
    pub fn key(&self) -> &'static str {
        self.key.unwrap_or(self.name)
    }

    /// Role directive.
    pub fn role(&self) -> &FieldRole {
        &self.role
    }
}

/// Ordered field directives registered for one record type.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    name: &'static str,
    fields: Vec<FieldSpec>,
}

impl RecordLayout {
    /// Start building a layout.
    pub fn builder(name: &'static str) -> RecordLayoutBuilder {
        RecordLayoutBuilder::new(name)
    }

    /// Record type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registered fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fluent builder for [`RecordLayout`].
#[derive(Debug)]
pub struct RecordLayoutBuilder {
    name: &'static str,
    fields: Vec<FieldSpec>,
}

impl RecordLayoutBuilder {
    /// Create a new builder for a record type.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a fully-specified field directive.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Add a primitive field with an inferred kind.
    pub fn primitive(self, name: &'static str, native: NativeType) -> Self {
        self.field(FieldSpec::primitive(name, native))
    }

    /// Add a string field.
    pub fn string(self, name: &'static str) -> Self {
        self.primitive(name, NativeType::Str)
    }

    /// Add a nested struct field.
    pub fn nested(self, name: &'static str, layout: LayoutFn) -> Self {
        self.field(FieldSpec::nested(name, layout))
    }

    /// Add a list field.
    pub fn list(self, name: &'static str, element: TypeRef) -> Self {
        self.field(FieldSpec::list(name, element))
    }

    /// Add a map field.
    pub fn map(self, name: &'static str, key: TypeRef, value: TypeRef) -> Self {
        self.field(FieldSpec::map(name, key, value))
    }

    /// Build the layout.
    pub fn build(self) -> RecordLayout {
        RecordLayout {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// Implemented by record types that can be written in columnar form.
///
/// The two methods must agree: `raw_values` returns exactly one value per
/// registered field, in layout order. A divergence is reported as an
/// internal-consistency fault at materialization time.
pub trait Record {
    /// Ordered field directives for this record type.
    fn layout() -> RecordLayout
    where
        Self: Sized;

    /// Raw values of every registered field, in layout order.
    fn raw_values(&self) -> Vec<RawValue>;
}
