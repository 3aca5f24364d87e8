#![forbid(unsafe_code)]

//! Export bundles and the standalone preview page.

use formsmith_core::Field;

use crate::ExportError;
use crate::html::{HtmlOptions, generate_html};
use crate::json::generate_json;

const TAILWIND_CDN: &str = "<script src=\"https://cdn.tailwindcss.com\"></script>";
const TAILWIND_BODY: &str = " class=\"bg-gray-100 dark:bg-gray-900 min-h-screen py-8\"";
const PLAIN_BODY: &str = " style=\"background: #f3f4f6; min-height: 100vh; padding: 2rem 0; \
                          margin: 0; font-family: system-ui, -apple-system, sans-serif;\"";

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Html,
    Json,
}

impl ExportFormat {
    /// Suggested download file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Html => "form.html",
            Self::Json => "form.json",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Json => "application/json",
        }
    }
}

/// Rendered export text tagged with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub content: String,
}

impl Export {
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    /// Number of `\n`-separated lines (an empty export counts as one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }
}

/// Render `fields` in `format`. `options` only affects HTML.
pub fn export(
    fields: &[Field],
    format: ExportFormat,
    options: &HtmlOptions,
) -> Result<Export, ExportError> {
    let content = match format {
        ExportFormat::Html => generate_html(fields, options),
        ExportFormat::Json => generate_json(fields)?,
    };
    Ok(Export { format, content })
}

/// Wrap the generated form in a complete HTML5 page for previewing.
#[must_use]
pub fn preview_document(fields: &[Field], options: &HtmlOptions) -> String {
    let form = generate_html(fields, options);
    let (head_extra, body_attrs) = if options.include_tailwind {
        (TAILWIND_CDN, TAILWIND_BODY)
    } else {
        ("", PLAIN_BODY)
    };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\" class=\"dark\">\n\
         <head>\n  \
         <meta charset=\"UTF-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
         <title>Form Preview</title>\n  \
         {head_extra}\n\
         </head>\n\
         <body{body_attrs}>\n  \
         {form}\n\
         </body>\n\
         </html>"
    )
}
