// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Columnar schema derivation and record materialization.
//!
//! Derives a columnar storage schema from a registered record layout, then
//! converts live instances of that type into schema-shaped value trees ready
//! to be handed to a columnar file writer. The writer itself is out of scope:
//! it is expected to call [`derive_schema`] once per output file and
//! [`materialize`] once per row, feeding both into its own stripe encoding.
//!
//! # Features
//!
//! - **Layout registry**: record types describe their fields through a fluent
//!   [`RecordLayout`] builder instead of runtime reflection
//! - **Schema derivation**: recursive [`SchemaNode`] construction over
//!   struct/list/map nesting, with canonical text rendering
//! - **Materialization**: per-kind coercion of raw field values into a
//!   [`Value`] tree structurally isomorphic to the derived schema
//!
//! # Architecture
//!
//! ```text
//!   Record::layout()          Record::raw_values()
//!        |                           |
//!        v                           v
//!   derive_schema  ----------> materialize
//!        |                           |
//!        v                           v
//!    SchemaNode  ---- shape ---->  Value
//! ```
//!
//! # Example
//!
//! ```rust
//! use colrec::{derive_schema, materialize, NativeType, RawValue, Record, RecordLayout};
//!
//! struct Sensor {
//!     id: i32,
//!     temperature: f64,
//!     location: String,
//! }
//!
//! impl Record for Sensor {
//!     fn layout() -> RecordLayout {
//!         RecordLayout::builder("Sensor")
//!             .primitive("id", NativeType::I32)
//!             .primitive("temperature", NativeType::F64)
//!             .string("location")
//!             .build()
//!     }
//!
//!     fn raw_values(&self) -> Vec<RawValue> {
//!         vec![
//!             self.id.into(),
//!             self.temperature.into(),
//!             self.location.clone().into(),
//!         ]
//!     }
//! }
//!
//! let schema = derive_schema::<Sensor>().unwrap();
//! assert_eq!(
//!     schema.to_string(),
//!     "struct<id:int,temperature:double,location:string>"
//! );
//!
//! let row = Sensor {
//!     id: 7,
//!     temperature: 21.5,
//!     location: "lab".to_string(),
//! };
//! let value = materialize(&row).unwrap();
//! assert_eq!(value.as_struct().map(|c| c.len()), Some(3));
//! ```
//!
//! Both operations are pure functions of their inputs: no shared state, no
//! caching, safe to call concurrently on independent data. Schemas are
//! re-derived on every call; callers that need to amortize that cost can
//! cache the result externally.

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod layout;
pub mod materialize;
pub mod raw;
pub mod schema;
pub mod value;

pub use catalog::{NativeType, PrimitiveKind};
pub use descriptor::{SchemaField, SchemaNode};
pub use error::{MaterializeError, SchemaError};
pub use layout::{
    FieldRole, FieldSpec, LayoutFn, Record, RecordLayout, RecordLayoutBuilder, TypeRef,
};
pub use materialize::materialize;
pub use raw::RawValue;
pub use schema::derive_schema;
pub use value::Value;
