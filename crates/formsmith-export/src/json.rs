#![forbid(unsafe_code)]

//! JSON document generator.
//!
//! The export shape is `{ "fields": [...] }`, pretty-printed with two-space
//! indentation. Field keys keep their model order. Parsing the output back
//! into a [`FormDocument`] yields a field list equal to the input.

use formsmith_core::Field;
use serde::{Deserialize, Serialize};

use crate::ExportError;

/// Owned form of the exported JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDocument {
    pub fields: Vec<Field>,
}

#[derive(Serialize)]
struct FormDocumentRef<'a> {
    fields: &'a [Field],
}

/// Render `fields` as a pretty-printed JSON document.
pub fn generate_json(fields: &[Field]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&FormDocumentRef { fields })?)
}
