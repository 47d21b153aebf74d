// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for schema derivation and materialization.
//!
//! Every fault here is terminal for the call that raised it: it signals a
//! mis-registered record layout or a layout/instance mismatch, never a
//! transient condition. Nothing is retried internally and no partial schema
//! or value tree is ever returned.

use crate::catalog::PrimitiveKind;
use std::fmt;

/// Failures while deriving a schema from a record layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two directive-bearing fields at one nesting level resolved to the
    /// same exposed key.
    DuplicateFieldKey {
        /// Declaring record type.
        record: &'static str,
        /// Conflicting key.
        key: String,
    },
    /// A primitive directive sits on a field with no primitive mapping.
    NonPrimitiveField {
        /// Declaring record type.
        record: &'static str,
        /// Offending key.
        key: String,
    },
    /// The resolved primitive kind has no native representation in the
    /// catalog.
    SchemaGeneration {
        /// Offending key.
        key: String,
        /// Unmapped kind.
        kind: PrimitiveKind,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldKey { record, key } => {
                write!(f, "key [{}] already exists in record [{}]", key, record)
            }
            Self::NonPrimitiveField { record, key } => {
                write!(f, "key [{}] of record [{}] is non primitive", key, record)
            }
            Self::SchemaGeneration { key, kind } => {
                write!(
                    f,
                    "primitive kind [{}] of key [{}] not supported",
                    kind.type_name(),
                    key
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Failures while materializing an instance into a value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeError {
    /// Internal schema re-derivation failed.
    Schema(SchemaError),
    /// Schema-legal primitive kind the materializer does not convert.
    UnsupportedKind {
        /// Kind outside the materializable subset.
        kind: PrimitiveKind,
    },
    /// A raw value is incompatible with its target schema node.
    Coercion {
        /// Target node or kind name.
        expected: &'static str,
        /// Raw variant name.
        got: &'static str,
    },
    /// Collected raw value count diverged from the schema field count.
    FieldCountMismatch {
        /// Schema field count.
        expected: usize,
        /// Collected value count.
        got: usize,
    },
}

impl fmt::Display for MaterializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(err) => write!(f, "schema derivation failed: {}", err),
            Self::UnsupportedKind { kind } => {
                write!(f, "primitive kind [{}] not supported yet", kind.type_name())
            }
            Self::Coercion { expected, got } => {
                write!(f, "cannot coerce [{}] value to [{}]", got, expected)
            }
            Self::FieldCountMismatch { expected, got } => {
                write!(
                    f,
                    "schema field count {} and collected value count {} do not match",
                    expected, got
                )
            }
        }
    }
}

impl std::error::Error for MaterializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SchemaError> for MaterializeError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err)
    }
}
