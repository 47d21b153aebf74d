// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-erased raw field values taken off record instances.
//!
//! [`RawValue`] is what [`Record::raw_values`](crate::layout::Record::raw_values)
//! hands to the materializer: one entry per registered field, before any
//! coercion has happened. Nested record instances stay behind the [`Record`]
//! trait so the materializer can recurse without knowing the concrete type.

use crate::layout::Record;
use std::collections::HashMap;
use std::fmt;

/// A raw field value prior to coercion.
pub enum RawValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    /// Days since the Unix epoch.
    Date(i32),
    /// Microseconds since the Unix epoch.
    Timestamp(i64),
    /// A nested record instance.
    Record(Box<dyn Record>),
    /// Ordered sequence of element values.
    List(Vec<RawValue>),
    /// Map entries in source order.
    Map(Vec<(RawValue, RawValue)>),
}

impl RawValue {
    /// Wrap a nested record instance.
    pub fn record(value: impl Record + 'static) -> Self {
        Self::Record(Box::new(value))
    }

    /// Wrap a byte buffer.
    pub fn bytes(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }

    /// Wrap map entries, preserving source order.
    pub fn map(entries: Vec<(RawValue, RawValue)>) -> Self {
        Self::Map(entries)
    }

    /// Variant name used in coercion diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

// Nested records are trait objects without a Debug bound, so the impl is
// written out by hand.
impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "Bool({:?})", v),
            Self::I8(v) => write!(f, "I8({:?})", v),
            Self::I16(v) => write!(f, "I16({:?})", v),
            Self::I32(v) => write!(f, "I32({:?})", v),
            Self::I64(v) => write!(f, "I64({:?})", v),
            Self::F32(v) => write!(f, "F32({:?})", v),
            Self::F64(v) => write!(f, "F64({:?})", v),
            Self::Char(v) => write!(f, "Char({:?})", v),
            Self::Str(v) => write!(f, "Str({:?})", v),
            Self::Bytes(v) => write!(f, "Bytes({} bytes)", v.len()),
            Self::Date(v) => write!(f, "Date({:?})", v),
            Self::Timestamp(v) => write!(f, "Timestamp({:?})", v),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
        }
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for RawValue {
    fn from(v: i8) -> Self {
        Self::I8(v)
    }
}

impl From<i16> for RawValue {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f32> for RawValue {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<char> for RawValue {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<RawValue>, V: Into<RawValue>> From<HashMap<K, V>> for RawValue {
    fn from(v: HashMap<K, V>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
