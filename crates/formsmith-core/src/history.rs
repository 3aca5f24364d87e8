#![forbid(unsafe_code)]

//! Linear snapshot history.
//!
//! [`History`] keeps an ordered list of full-state snapshots plus a cursor.
//! The live state is always the snapshot under the cursor. Pushing a new
//! snapshot discards everything after the cursor, so redo branches are
//! dropped rather than merged.
//!
//! ```
//! use formsmith_core::history::History;
//!
//! let mut h = History::new(0);
//! h.push(1);
//! h.push(2);
//! assert_eq!(h.undo(), Some(&1));
//! h.push(7);
//! assert!(!h.can_redo());
//! assert_eq!(h.entries(), [0, 1, 7]);
//! ```

/// Snapshot history with an optional cap on undo depth.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    index: usize,
    /// Maximum number of undo steps retained (`None` = unbounded).
    max_depth: Option<usize>,
}

impl<T> History<T> {
    /// Start a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_max_depth(initial, None)
    }

    /// Start a history that retains at most `max_depth` undo steps.
    #[must_use]
    pub fn with_max_depth(initial: T, max_depth: Option<usize>) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            max_depth,
        }
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its baseline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Truncate after the cursor, append `state`, and move the cursor onto it.
    ///
    /// Returns the number of snapshots evicted from the front to honour the
    /// depth cap.
    pub fn push(&mut self, state: T) -> usize {
        self.entries.truncate(self.index + 1);
        self.entries.push(state);
        self.index = self.entries.len() - 1;

        let Some(max_depth) = self.max_depth else {
            return 0;
        };
        let excess = self.entries.len().saturating_sub(max_depth + 1);
        if excess > 0 {
            self.entries.drain(..excess);
            self.index -= excess;
            tracing::debug!(evicted = excess, retained = self.entries.len(), "history cap reached");
        }
        excess
    }

    /// Step the cursor back. Returns the new current snapshot.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step the cursor forward. Returns the new current snapshot.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
