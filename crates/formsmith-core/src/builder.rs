#![forbid(unsafe_code)]

//! The form builder: live field list, selection and undo/redo.
//!
//! [`FormBuilder`] owns a [`History`] of field-list snapshots. The live list
//! *is* the snapshot under the history cursor, so it can never drift from
//! history. Every successful mutation pushes exactly one snapshot; every
//! rejected one returns `Err` and leaves list, history and selection alone.
//!
//! # Example
//! ```
//! use formsmith_core::builder::FormBuilder;
//! use formsmith_core::catalog::FieldType;
//! use formsmith_core::field::FieldPatch;
//!
//! let mut form = FormBuilder::new();
//! let email = form.add_field(FieldType::Email);
//! form.add_field(FieldType::Submit);
//! form.update_field(&email, FieldPatch::new().required(true)).unwrap();
//! assert_eq!(form.len(), 2);
//! assert_eq!(form.selected_field().map(|f| f.kind()), Some(FieldType::Submit));
//!
//! form.undo();
//! assert!(!form.fields()[0].is_required());
//! form.redo();
//! assert!(form.fields()[0].is_required());
//! ```
//!
//! # Selection
//!
//! Selection is held by id. It is cleared when the selected field is
//! removed, on `clear_fields`, and after `undo`/`redo` lands on a snapshot
//! that no longer contains it.

use crate::catalog::FieldType;
use crate::config::BuilderConfig;
use crate::error::{BuilderError, BuilderResult};
use crate::field::{Field, FieldId, FieldPatch};
use crate::history::History;

/// Ordered list of fields; list order is export order.
pub type FieldList = Vec<Field>;

/// Monotonic id source. Ids are never reused, even after undo.
#[derive(Debug, Clone)]
struct IdGenerator {
    prefix: String,
    next: u64,
}

impl IdGenerator {
    fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    fn next_id(&mut self) -> FieldId {
        let id = FieldId::new(format!("{}_{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// In-memory form model with linear undo/redo.
#[derive(Debug, Clone)]
pub struct FormBuilder {
    history: History<FieldList>,
    selected: Option<FieldId>,
    ids: IdGenerator,
    config: BuilderConfig,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBuilder {
    /// Create an empty builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            history: History::with_max_depth(FieldList::new(), config.max_history),
            selected: None,
            ids: IdGenerator::new(config.id_prefix.clone()),
            config,
        }
    }

    // ====================================================================
    // Queries
    // ====================================================================

    /// The live field list.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        self.history.current()
    }

    #[must_use]
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields().iter().find(|f| f.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields().iter().position(|f| f.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// The selected field, resolved against the live list.
    #[must_use]
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.field(id))
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history(&self) -> &History<FieldList> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    // ====================================================================
    // Mutations
    // ====================================================================

    /// Append a field of `kind` with catalog defaults and select it.
    pub fn add_field(&mut self, kind: FieldType) -> FieldId {
        let id = self.ids.next_id();
        let mut fields = self.fields().to_vec();
        fields.push(Field::new(id.clone(), kind));
        self.commit(fields);
        self.selected = Some(id.clone());
        tracing::debug!(id = %id, kind = %kind, len = self.len(), "field added");
        id
    }

    /// [`add_field`](Self::add_field) keyed by the lowercase type tag.
    pub fn add_field_by_name(&mut self, tag: &str) -> BuilderResult<FieldId> {
        match tag.parse::<FieldType>() {
            Ok(kind) => Ok(self.add_field(kind)),
            Err(err) => {
                tracing::trace!(tag, "add ignored: unknown field type");
                Err(err)
            }
        }
    }

    /// Remove the field with `id`, returning it.
    pub fn remove_field(&mut self, id: &FieldId) -> BuilderResult<Field> {
        let index = self.require_position(id)?;
        let mut fields = self.fields().to_vec();
        let removed = fields.remove(index);
        self.commit(fields);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        tracing::debug!(id = %id, index, len = self.len(), "field removed");
        Ok(removed)
    }

    /// Merge `patch` into the field with `id`.
    ///
    /// Every accepted patch records a snapshot, even one that leaves the
    /// field as it was.
    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> BuilderResult<()> {
        let index = self.require_position(id)?;
        let current = &self.fields()[index];
        if current.kind().has_options()
            && patch.options.as_ref().is_some_and(|options| options.is_empty())
        {
            return Err(BuilderError::EmptyOptions(id.clone()));
        }

        let mut updated = current.clone();
        updated.apply(patch);

        let mut fields = self.fields().to_vec();
        fields[index] = updated;
        self.commit(fields);
        tracing::debug!(id = %id, "field updated");
        Ok(())
    }

    /// Move the field at `from` so it ends up at `to`.
    ///
    /// Equivalent to removing index `from` and inserting at `to` in the
    /// shortened list. Both indices must be `< len`; `from == to` still
    /// records a snapshot.
    pub fn reorder_fields(&mut self, from: usize, to: usize) -> BuilderResult<()> {
        let len = self.len();
        if from >= len || to >= len {
            tracing::trace!(from, to, len, "reorder ignored: index out of range");
            return Err(BuilderError::IndexOutOfRange { from, to, len });
        }
        let mut fields = self.fields().to_vec();
        let moved = fields.remove(from);
        fields.insert(to, moved);
        self.commit(fields);
        tracing::debug!(from, to, "fields reordered");
        Ok(())
    }

    /// Append a copy of the field with `id` under a fresh id and select it.
    pub fn duplicate_field(&mut self, id: &FieldId) -> BuilderResult<FieldId> {
        let index = self.require_position(id)?;
        let new_id = self.ids.next_id();
        let copy = self.fields()[index].duplicate(new_id.clone());
        let mut fields = self.fields().to_vec();
        fields.push(copy);
        self.commit(fields);
        self.selected = Some(new_id.clone());
        tracing::debug!(source = %id, id = %new_id, "field duplicated");
        Ok(new_id)
    }

    /// Remove every field. Always records a history entry.
    pub fn clear_fields(&mut self) {
        let cleared = self.len();
        self.commit(FieldList::new());
        self.selected = None;
        tracing::debug!(cleared, "fields cleared");
    }

    // ====================================================================
    // Options editing (select / radio)
    // ====================================================================

    /// Append `"Option {n+1}"` to a choice field. Returns the new option index.
    pub fn add_option(&mut self, id: &FieldId) -> BuilderResult<usize> {
        let mut options = self.choice_options(id)?;
        let index = options.len();
        options.push(format!("Option {}", index + 1));
        self.update_field(id, FieldPatch::new().options(options))?;
        Ok(index)
    }

    /// Replace the option at `index`.
    pub fn update_option(
        &mut self,
        id: &FieldId,
        index: usize,
        text: impl Into<String>,
    ) -> BuilderResult<()> {
        let mut options = self.choice_options(id)?;
        let len = options.len();
        let slot = options
            .get_mut(index)
            .ok_or(BuilderError::IndexOutOfRange {
                from: index,
                to: index,
                len,
            })?;
        *slot = text.into();
        self.update_field(id, FieldPatch::new().options(options))
    }

    /// Remove the option at `index`; the last remaining option is kept.
    pub fn remove_option(&mut self, id: &FieldId, index: usize) -> BuilderResult<String> {
        let mut options = self.choice_options(id)?;
        let len = options.len();
        if index >= len {
            return Err(BuilderError::IndexOutOfRange {
                from: index,
                to: index,
                len,
            });
        }
        if len == 1 {
            return Err(BuilderError::LastOption(id.clone()));
        }
        let removed = options.remove(index);
        self.update_field(id, FieldPatch::new().options(options))?;
        Ok(removed)
    }

    // ====================================================================
    // Undo / redo / selection
    // ====================================================================

    /// Step back one snapshot. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        self.revalidate_selection();
        tracing::debug!(index = self.history.index(), "undo");
        true
    }

    /// Step forward one snapshot. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.revalidate_selection();
        tracing::debug!(index = self.history.index(), "redo");
        true
    }

    /// Select a field (or clear the selection). Not recorded in history.
    pub fn set_selected_field(&mut self, id: Option<&FieldId>) -> BuilderResult<()> {
        match id {
            None => self.selected = None,
            Some(id) => {
                self.require_position(id)?;
                self.selected = Some(id.clone());
            }
        }
        Ok(())
    }

    // ====================================================================
    // Internals
    // ====================================================================

    fn commit(&mut self, fields: FieldList) {
        self.history.push(fields);
    }

    fn require_position(&self, id: &FieldId) -> BuilderResult<usize> {
        self.position(id).ok_or_else(|| {
            tracing::trace!(id = %id, "field not found");
            BuilderError::FieldNotFound(id.clone())
        })
    }

    fn choice_options(&self, id: &FieldId) -> BuilderResult<Vec<String>> {
        let index = self.require_position(id)?;
        let field = &self.fields()[index];
        if !field.kind().has_options() {
            return Err(BuilderError::NotAChoiceField(id.clone()));
        }
        Ok(field.options().to_vec())
    }

    fn revalidate_selection(&mut self) {
        if let Some(id) = &self.selected
            && self.position(id).is_none()
        {
            tracing::trace!(id = %id, "selection cleared: field not in snapshot");
            self.selected = None;
        }
    }
}
