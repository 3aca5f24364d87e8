//! Error type shared by the builder, catalog and configuration.
//!
//! Every error is a rejected operation: when a builder method returns `Err`,
//! the field list, history and selection are exactly as they were before the
//! call.

use std::fmt;

use crate::field::FieldId;

/// Reasons a builder operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A type tag that is not part of the field catalog.
    UnknownFieldType(String),
    /// No field with this id exists in the current list.
    FieldNotFound(FieldId),
    /// A reorder or option index outside the current bounds.
    IndexOutOfRange {
        /// Source index.
        from: usize,
        /// Target index.
        to: usize,
        /// Length of the sequence the indices were checked against.
        len: usize,
    },
    /// A patch tried to give a select/radio field an empty option list.
    EmptyOptions(FieldId),
    /// Removing the only remaining option of a select/radio field.
    LastOption(FieldId),
    /// An options operation on a field that carries no options.
    NotAChoiceField(FieldId),
    /// An environment or config value that could not be parsed.
    InvalidConfig {
        /// Config key (environment variable name).
        key: &'static str,
        /// The rejected raw value.
        value: String,
    },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFieldType(tag) => write!(f, "unknown field type: {tag:?}"),
            Self::FieldNotFound(id) => write!(f, "no field with id {id}"),
            Self::IndexOutOfRange { from, to, len } => {
                write!(f, "index out of range: from={from} to={to} len={len}")
            }
            Self::EmptyOptions(id) => write!(f, "field {id} must keep at least one option"),
            Self::LastOption(id) => write!(f, "cannot remove the last option of field {id}"),
            Self::NotAChoiceField(id) => write!(f, "field {id} has no options"),
            Self::InvalidConfig { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for BuilderError {}

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
