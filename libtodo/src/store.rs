//! Ordered item storage plus the state of the "add item" form

use crate::error::{Result, TodoError};
use crate::validation::{is_blank, validate_new_item, EMPTY_TASK_MESSAGE};

/// Text staged in the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    value: String,
}

impl PendingInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether submitting this value would be accepted
    pub fn is_valid(&self) -> bool {
        !is_blank(&self.value)
    }
}

/// Owns the item list, the pending input and the add-form error.
///
/// Items are kept verbatim in insertion order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    items: Vec<String>,
    pending: PendingInput,
    error: Option<String>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with items.
    ///
    /// Seeds bypass validation, same as `replace`.
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pending_input(&self) -> &PendingInput {
        &self.pending
    }

    /// Current add-form error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Stage text in the add form.
    ///
    /// A non-blank value clears the error; a blank one leaves it in place.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.pending.value = text.into();
        if self.pending.is_valid() {
            self.error = None;
        }
    }

    /// Append `text` verbatim and return its index.
    ///
    /// Blank text is rejected: the error state is set and the list is left
    /// untouched.
    pub fn append(&mut self, text: impl Into<String>) -> Result<usize> {
        let text = text.into();
        if let Err(e) = validate_new_item(&text) {
            self.error = Some(EMPTY_TASK_MESSAGE.to_string());
            return Err(e.into());
        }

        self.items.push(text);
        self.pending = PendingInput::default();
        self.error = None;
        Ok(self.items.len() - 1)
    }

    /// Append whatever is staged in the add form
    pub fn submit(&mut self) -> Result<usize> {
        let text = self.pending.value.clone();
        self.append(text)
    }

    /// Remove the item at `index`, shifting later items left.
    ///
    /// An invalid index leaves the list unchanged.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Overwrite the item at `index` verbatim and return the old value.
    ///
    /// Unlike `append` this accepts blank text.
    pub fn replace(&mut self, index: usize, text: impl Into<String>) -> Result<String> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.items[index], text.into()))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}
