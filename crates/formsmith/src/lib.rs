#![forbid(unsafe_code)]

//! formsmith public facade crate.
//!
//! Re-exports the form model from `formsmith-core` and, with the default
//! `export` feature, the serializers from `formsmith-export`. A UI layer
//! should only need this crate:
//!
//! ```
//! use formsmith::prelude::*;
//!
//! let mut form = FormBuilder::new();
//! form.add_field(FieldType::Text);
//! form.add_field(FieldType::Submit);
//!
//! let html = generate_html(form.fields(), &HtmlOptions::tailwind());
//! assert!(html.contains("<button type=\"submit\""));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use formsmith_core::{
    BuilderConfig, BuilderError, BuilderResult, Field, FieldId, FieldList, FieldPatch, FieldType,
    FieldTypeDefinition, FieldValue, FormBuilder, History, definition_of, definitions,
};

// --- Export re-exports -----------------------------------------------------

#[cfg(feature = "export")]
pub use formsmith_export::{
    Export, ExportError, ExportFormat, FormDocument, HtmlOptions, export, generate_html,
    generate_json, preview_document,
};

#[cfg(feature = "logging")]
pub mod logging;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for formsmith hosts.
#[derive(Debug)]
pub enum Error {
    /// A rejected builder operation or bad configuration.
    Builder(BuilderError),
    /// Serializer failure.
    #[cfg(feature = "export")]
    Export(ExportError),
    /// Log subscriber could not be installed.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builder(err) => write!(f, "{err}"),
            #[cfg(feature = "export")]
            Self::Export(err) => write!(f, "{err}"),
            Self::Logging(msg) => write!(f, "logging setup failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Builder(err) => Some(err),
            #[cfg(feature = "export")]
            Self::Export(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<BuilderError> for Error {
    fn from(err: BuilderError) -> Self {
        Self::Builder(err)
    }
}

#[cfg(feature = "export")]
impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}

/// Standard result type for formsmith APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BuilderConfig, Error, Field, FieldId, FieldPatch, FieldType, FieldValue, FormBuilder,
        Result,
    };

    #[cfg(feature = "export")]
    pub use crate::{ExportFormat, HtmlOptions, export, generate_html, generate_json};

    pub use crate::core;
    #[cfg(feature = "export")]
    pub use crate::exporters;
}

pub use formsmith_core as core;
#[cfg(feature = "export")]
pub use formsmith_export as exporters;
