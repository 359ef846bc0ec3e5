//! Todo list facade
//!
//! Composes [`ListStore`] and [`EditSession`] into the single object a
//! presentation layer talks to. Every user intent maps to one method here;
//! the caller re-renders from the read accessors afterwards.
//!
//! # Example
//!
//! ```
//! use libtodo::TodoList;
//!
//! let mut list = TodoList::new();
//! list.update_input("write report");
//! list.submit().unwrap();
//!
//! list.begin_edit(0).unwrap();
//! list.change_scratch("write quarterly report");
//! list.commit().unwrap();
//!
//! assert_eq!(list.items(), ["write quarterly report"]);
//! ```

use crate::edit::EditSession;
use crate::error::Result;
use crate::store::{ListStore, PendingInput};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    store: ListStore,
    edit: EditSession,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            store: ListStore::with_items(items),
            edit: EditSession::Idle,
        }
    }

    // === Read accessors ===

    pub fn items(&self) -> &[String] {
        self.store.items()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn pending_input(&self) -> &PendingInput {
        self.store.pending_input()
    }

    pub fn error(&self) -> Option<&str> {
        self.store.error()
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    // === Add form ===

    pub fn update_input(&mut self, text: impl Into<String>) {
        self.store.update_input(text);
    }

    pub fn append(&mut self, text: impl Into<String>) -> Result<usize> {
        let result = self.store.append(text);
        log_append(&result);
        result
    }

    /// Append the staged input
    pub fn submit(&mut self) -> Result<usize> {
        let result = self.store.submit();
        log_append(&result);
        result
    }

    // === Item actions ===

    /// Remove an item, closing or shifting the edit session to match.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        let removed = self.store.remove(index).inspect_err(|e| {
            tracing::warn!(error = %e, "remove rejected");
        })?;
        self.edit.on_removed(index);
        tracing::debug!(index, len = self.store.len(), "item removed");
        Ok(removed)
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.edit.begin(index, &self.store).inspect_err(|e| {
            tracing::warn!(error = %e, "begin edit rejected");
        })?;
        tracing::debug!(index, "edit started");
        Ok(())
    }

    /// Returns false when there is no edit to change
    pub fn change_scratch(&mut self, text: impl Into<String>) -> bool {
        let changed = self.edit.change_scratch(text);
        if !changed {
            tracing::debug!("scratch change ignored, no active edit");
        }
        changed
    }

    pub fn commit(&mut self) -> Result<Option<usize>> {
        let written = self.edit.commit(&mut self.store).inspect_err(|e| {
            tracing::warn!(error = %e, "commit rejected");
        })?;
        if let Some(index) = written {
            tracing::debug!(index, "edit committed");
        }
        Ok(written)
    }
}

fn log_append(result: &Result<usize>) {
    match result {
        Ok(index) => tracing::debug!(index, "item appended"),
        Err(e) => tracing::debug!(error = %e, "append rejected"),
    }
}
