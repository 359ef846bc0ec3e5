//! In-place edit session
//!
//! At most one item can be edited at a time. The session is a tagged state
//! rather than a pair of optional fields, so "editing without a target"
//! cannot be represented.

use crate::error::{Result, TodoError};
use crate::store::ListStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        target_index: usize,
        scratch: String,
    },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn target_index(&self) -> Option<usize> {
        match self {
            EditSession::Editing { target_index, .. } => Some(*target_index),
            EditSession::Idle => None,
        }
    }

    pub fn scratch(&self) -> Option<&str> {
        match self {
            EditSession::Editing { scratch, .. } => Some(scratch.as_str()),
            EditSession::Idle => None,
        }
    }

    /// Start editing the item at `index`, seeding the scratch value from it.
    ///
    /// Any edit already in progress is discarded without being committed.
    pub fn begin(&mut self, index: usize, store: &ListStore) -> Result<()> {
        let current = store.get(index).ok_or(TodoError::IndexOutOfRange {
            index,
            len: store.len(),
        })?;

        if let Some(previous) = self.target_index() {
            tracing::debug!(previous, index, "discarding uncommitted edit");
        }

        *self = EditSession::Editing {
            target_index: index,
            scratch: current.to_string(),
        };
        Ok(())
    }

    /// Replace the scratch value. Returns false when no edit is active.
    pub fn change_scratch(&mut self, text: impl Into<String>) -> bool {
        match self {
            EditSession::Editing { scratch, .. } => {
                *scratch = text.into();
                true
            }
            EditSession::Idle => false,
        }
    }

    /// Write the scratch value back into `store` and close the session.
    ///
    /// Returns the index that was written, or `None` when idle. The session
    /// is closed even if the write fails.
    pub fn commit(&mut self, store: &mut ListStore) -> Result<Option<usize>> {
        match std::mem::take(self) {
            EditSession::Idle => Ok(None),
            EditSession::Editing {
                target_index,
                scratch,
            } => {
                store.replace(target_index, scratch)?;
                Ok(Some(target_index))
            }
        }
    }

    /// Reconcile the session after the item at `removed` left the list.
    ///
    /// Removing the target ends the session. Removing an earlier item shifts
    /// the target so it keeps pointing at the same item.
    pub fn on_removed(&mut self, removed: usize) {
        let Some(target) = self.target_index() else {
            return;
        };

        if target == removed {
            tracing::debug!(index = removed, "edited item removed, closing edit");
            *self = EditSession::Idle;
        } else if target > removed {
            if let EditSession::Editing { target_index, .. } = self {
                *target_index = target - 1;
            }
        }
    }
}
