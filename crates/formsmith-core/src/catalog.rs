#![forbid(unsafe_code)]

//! Static registry of the field types a form can contain.
//!
//! The set of [`FieldType`]s is closed: adding a variant means adding a
//! [`FieldTypeDefinition`] to the catalog table and a rendering arm in the
//! HTML serializer (the compiler points at both).
//!
//! ```
//! use formsmith_core::catalog::{FieldType, definition_of};
//!
//! let def = definition_of(FieldType::Email);
//! assert_eq!(def.label, "Email");
//! assert_eq!(def.defaults.name, "email");
//! assert!(def.has_placeholder());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuilderError;

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// The closed set of placeable field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Submit,
}

impl FieldType {
    /// All field types in palette order.
    pub const ALL: [FieldType; 8] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Textarea,
        Self::Select,
        Self::Radio,
        Self::Checkbox,
        Self::Submit,
    ];

    /// Lowercase tag used in JSON and as the HTML `type` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Submit => "submit",
        }
    }

    /// Single-line `<input>` types.
    #[must_use]
    pub const fn is_text_input(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Password)
    }

    /// Select and radio fields carry an option list.
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Whether a placeholder is meaningful for this type.
    #[must_use]
    pub const fn has_placeholder(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Password | Self::Textarea | Self::Select
        )
    }

    /// Everything except the submit button can be marked required.
    #[must_use]
    pub const fn can_be_required(self) -> bool {
        !matches!(self, Self::Submit)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BuilderError::UnknownFieldType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Default value stamped onto a new field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    Flag(bool),
}

/// Attribute template applied when a field of a given type is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefaults {
    pub label: &'static str,
    pub name: &'static str,
    pub placeholder: Option<&'static str>,
    /// `None` for types where "required" is meaningless.
    pub required: Option<bool>,
    pub options: Option<&'static [&'static str]>,
    pub value: DefaultValue,
}

/// Palette entry for one field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeDefinition {
    pub kind: FieldType,
    /// Palette label.
    pub label: &'static str,
    /// Icon name (lucide icon set).
    pub icon: &'static str,
    /// One-line palette hint.
    pub description: &'static str,
    pub defaults: FieldDefaults,
}

impl FieldTypeDefinition {
    #[must_use]
    pub const fn has_options(&self) -> bool {
        self.kind.has_options()
    }

    #[must_use]
    pub const fn has_placeholder(&self) -> bool {
        self.kind.has_placeholder()
    }

    #[must_use]
    pub const fn can_be_required(&self) -> bool {
        self.kind.can_be_required()
    }
}

const DEFAULT_OPTIONS: &[&str] = &["Option 1", "Option 2", "Option 3"];

/// Catalog table, indexed by `FieldType as usize`.
static CATALOG: [FieldTypeDefinition; 8] = [
    FieldTypeDefinition {
        kind: FieldType::Text,
        label: "Text Input",
        icon: "type",
        description: "Single line text input",
        defaults: FieldDefaults {
            label: "Text Field",
            name: "text_field",
            placeholder: Some("Enter text..."),
            required: Some(false),
            options: None,
            value: DefaultValue::Text(""),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Email,
        label: "Email",
        icon: "mail",
        description: "Email address input with validation",
        defaults: FieldDefaults {
            label: "Email Address",
            name: "email",
            placeholder: Some("Enter your email..."),
            required: Some(false),
            options: None,
            value: DefaultValue::Text(""),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Password,
        label: "Password",
        icon: "lock",
        description: "Password input with hidden text",
        defaults: FieldDefaults {
            label: "Password",
            name: "password",
            placeholder: Some("Enter password..."),
            required: Some(false),
            options: None,
            value: DefaultValue::Text(""),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Textarea,
        label: "Textarea",
        icon: "file-text",
        description: "Multi-line text input",
        defaults: FieldDefaults {
            label: "Message",
            name: "message",
            placeholder: Some("Enter your message..."),
            required: Some(false),
            options: None,
            value: DefaultValue::Text(""),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Select,
        label: "Select Dropdown",
        icon: "chevron-down",
        description: "Dropdown selection menu",
        defaults: FieldDefaults {
            label: "Select Option",
            name: "select_field",
            placeholder: Some("Choose an option..."),
            required: Some(false),
            options: Some(DEFAULT_OPTIONS),
            value: DefaultValue::Text(""),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Radio,
        label: "Radio Group",
        icon: "circle",
        description: "Single choice from multiple options",
        defaults: FieldDefaults {
            label: "Select One",
            name: "radio_field",
            placeholder: None,
            required: Some(false),
            options: Some(DEFAULT_OPTIONS),
            value: DefaultValue::Text(""),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Checkbox,
        label: "Checkbox",
        icon: "check-square",
        description: "Single checkbox for agreements",
        defaults: FieldDefaults {
            label: "I agree to the terms",
            name: "checkbox_field",
            placeholder: None,
            required: Some(false),
            options: None,
            value: DefaultValue::Flag(false),
        },
    },
    FieldTypeDefinition {
        kind: FieldType::Submit,
        label: "Submit Button",
        icon: "send",
        description: "Form submission button",
        defaults: FieldDefaults {
            label: "Submit Form",
            name: "submit_button",
            placeholder: None,
            required: None,
            options: None,
            value: DefaultValue::Text(""),
        },
    },
];

/// Look up the catalog entry for a field type.
#[must_use]
pub fn definition_of(kind: FieldType) -> &'static FieldTypeDefinition {
    &CATALOG[kind.index()]
}

/// All catalog entries in palette order.
#[must_use]
pub fn definitions() -> &'static [FieldTypeDefinition] {
    &CATALOG
}
