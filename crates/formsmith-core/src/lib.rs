#![forbid(unsafe_code)]

//! Core model for formsmith: the field catalog, placed fields, and the
//! undo/redo-aware [`FormBuilder`].
//!
//! # Role in formsmith
//! This crate owns all form state. Serializers in `formsmith-export` only
//! read a `&[Field]`; UI layers call the mutation methods on
//! [`FormBuilder`] and render whatever it reports afterwards.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`catalog`] | `FieldType` and per-type defaults |
//! | [`field`] | `Field`, `FieldId`, `FieldValue`, `FieldPatch` |
//! | [`history`] | Generic linear snapshot history |
//! | [`builder`] | `FormBuilder` mutation/query API |
//! | [`config`] | `BuilderConfig` and environment overrides |
//! | [`error`] | `BuilderError` |

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod history;

pub use builder::{FieldList, FormBuilder};
pub use catalog::{FieldType, FieldTypeDefinition, definition_of, definitions};
pub use config::BuilderConfig;
pub use error::{BuilderError, BuilderResult};
pub use field::{Field, FieldId, FieldPatch, FieldValue};
pub use history::History;
