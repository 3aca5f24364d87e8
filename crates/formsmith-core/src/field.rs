#![forbid(unsafe_code)]

//! The placed-field model.
//!
//! A [`Field`] is one configured element on the form canvas. Its `id` and
//! type are fixed at creation; everything else is edited through a
//! [`FieldPatch`]. Serialization keeps the key order
//! `id, label, name, placeholder, required, options, value, type`, and keys
//! that a type does not carry (e.g. `placeholder` on a radio group) are
//! omitted. The order is fixed by the struct layout, so a key first set by a
//! later patch still lands in its usual slot rather than at the end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{DefaultValue, FieldType, definition_of};

// ---------------------------------------------------------------------------
// FieldId
// ---------------------------------------------------------------------------

/// Opaque, stable identifier of a placed field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// Default value of a field: a checked flag for checkboxes, text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Empty strings and `false` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Text shown when the value is rendered as content (`false` renders empty).
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Flag(true) => "true",
            Self::Flag(false) => "",
        }
    }

    /// Whether this value selects the given option.
    #[must_use]
    pub fn matches_option(&self, option: &str) -> bool {
        self.as_text() == Some(option)
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<DefaultValue> for FieldValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Text(text) => Self::Text(text.to_string()),
            DefaultValue::Flag(flag) => Self::Flag(flag),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A single placed form element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,
    pub label: String,
    /// Exported `name`/`id` attribute. Not deduplicated.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub value: FieldValue,
    #[serde(rename = "type")]
    kind: FieldType,
}

impl Field {
    /// Create a field of `kind` populated from its catalog template.
    #[must_use]
    pub fn new(id: impl Into<FieldId>, kind: FieldType) -> Self {
        let defaults = definition_of(kind).defaults;
        Self {
            id: id.into(),
            label: defaults.label.to_string(),
            name: defaults.name.to_string(),
            placeholder: defaults.placeholder.map(str::to_string),
            required: defaults.required,
            options: defaults
                .options
                .map(|options| options.iter().map(|o| (*o).to_string()).collect()),
            value: defaults.value.into(),
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> FieldType {
        self.kind
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Placeholder text, if set and non-empty.
    #[must_use]
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|p| !p.is_empty())
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Copy of this field under a new id, with `_copy` / ` (Copy)` suffixes.
    pub(crate) fn duplicate(&self, id: FieldId) -> Self {
        Self {
            id,
            label: format!("{} (Copy)", self.label),
            name: format!("{}_copy", self.name),
            ..self.clone()
        }
    }

    /// Merge a patch. `id` and type are never touched.
    pub fn apply(&mut self, patch: FieldPatch) {
        let FieldPatch {
            label,
            name,
            placeholder,
            required,
            value,
            options,
        } = patch;
        if let Some(label) = label {
            self.label = label;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(placeholder) = placeholder {
            self.placeholder = Some(placeholder);
        }
        if let Some(required) = required {
            self.required = Some(required);
        }
        if let Some(value) = value {
            self.value = value;
        }
        if let Some(options) = options {
            self.options = Some(options);
        }
    }
}

// ---------------------------------------------------------------------------
// FieldPatch
// ---------------------------------------------------------------------------

/// Partial attribute update for [`Field::apply`].
///
/// Deserializing a payload that also contains `id` or `type` keys is fine;
/// they are ignored because a patch cannot express them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub value: Option<FieldValue>,
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
