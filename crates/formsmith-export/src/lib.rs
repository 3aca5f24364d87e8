#![forbid(unsafe_code)]

//! Serializers that project a formsmith field list into export formats.
//!
//! All generators are pure: the same field list always yields byte-identical
//! output, and nothing here touches the filesystem or clipboard. Hosts decide
//! where the text goes.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`generate_html`] | `<form>` markup, optionally with Tailwind classes |
//! | [`generate_json`] | `{ "fields": [...] }`, two-space indented |
//! | [`preview_document`] | Standalone HTML page wrapping the form |
//! | [`export`] | Either of the above tagged with an [`ExportFormat`] |

use std::fmt;

pub mod document;
pub mod html;
pub mod json;

pub use document::{Export, ExportFormat, export, preview_document};
pub use html::{HtmlOptions, generate_html};
pub use json::{FormDocument, generate_json};

/// Errors produced while exporting.
#[derive(Debug)]
pub enum ExportError {
    /// JSON encoding failure.
    Json(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "JSON export failed: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
