use tracing::{debug, warn};

use crate::config::ConfigContext;
use crate::messages::{MessageKey, Notification, Translator};
use crate::variable_list::remove_at;
use crate::PromptVariable;

/// Outcome of asking to remove a row
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    /// The row is gone; propagate the new list
    Immediate(Vec<PromptVariable>),
    /// The row feeds dataset retrieval and the user must confirm first
    NeedsConfirmation { name: String },
}

/// Transient flags of the variable table. The edit modal and the delete
/// confirmation are independent of each other and both start hidden.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableUiState {
    pub current_key: Option<String>,
    pub show_edit_modal: bool,
    pub remove_index: Option<usize>,
    pub show_delete_confirm: bool,
}

impl TableUiState {
    pub fn open_edit(&mut self, key: &str) {
        self.current_key = Some(key.to_string());
        self.show_edit_modal = true;
    }

    pub fn close_edit(&mut self) {
        self.show_edit_modal = false;
    }

    /// Remove the row at `index`, or park it behind the confirmation dialog
    /// when it is a context variable of a completion app with datasets.
    pub fn request_remove(
        &mut self,
        vars: &[PromptVariable],
        index: usize,
        ctx: &ConfigContext,
    ) -> Removal {
        match vars.get(index) {
            Some(var) if var.is_context_var && ctx.guards_context_vars() => {
                debug!(index, key = %var.key, "context variable removal needs confirmation");
                self.remove_index = Some(index);
                self.show_delete_confirm = true;
                Removal::NeedsConfirmation {
                    name: var.name.clone(),
                }
            }
            _ => Removal::Immediate(remove_at(vars, index)),
        }
    }

    /// Perform the parked removal and hide the dialog
    pub fn confirm_remove(&mut self, vars: &[PromptVariable]) -> Option<Vec<PromptVariable>> {
        self.show_delete_confirm = false;
        self.remove_index.take().map(|index| remove_at(vars, index))
    }

    pub fn cancel_remove(&mut self) {
        self.show_delete_confirm = false;
        self.remove_index = None;
    }

    /// Display name of the row waiting for confirmation
    pub fn pending_remove_name<'a>(&self, vars: &'a [PromptVariable]) -> Option<&'a str> {
        self.remove_index
            .and_then(|index| vars.get(index))
            .map(|var| var.name.as_str())
    }
}

/// A deferred, advisory check that a renamed key does not collide with
/// another row. It compares against the list as it was before the rename.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateCheck {
    snapshot: Vec<PromptVariable>,
    index: usize,
    candidate: String,
}

impl DuplicateCheck {
    pub fn new(snapshot: &[PromptVariable], index: usize, candidate: &str) -> Self {
        Self {
            snapshot: snapshot.to_vec(),
            index,
            candidate: candidate.to_string(),
        }
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn has_conflict(&self) -> bool {
        let candidate = self.candidate.trim();
        self.snapshot
            .iter()
            .enumerate()
            .any(|(i, var)| i != self.index && var.key.trim() == candidate)
    }

    /// Warning to show when the candidate collides, if it does
    pub fn notification(&self, translator: &dyn Translator) -> Option<Notification> {
        if !self.has_conflict() {
            return None;
        }
        warn!(key = %self.candidate, "duplicate variable key");
        Some(Notification::warning(translator.translate(
            MessageKey::KeyAlreadyExists,
            &[("key", self.candidate.as_str())],
        )))
    }
}

/// Single slot holding at most one scheduled [`DuplicateCheck`].
///
/// Scheduling hands out a ticket; only the latest ticket can claim the check,
/// so a timer that fires after being superseded or cancelled finds nothing.
#[derive(Debug, Default)]
pub struct PendingCheck {
    generation: u64,
    pending: Option<DuplicateCheck>,
}

impl PendingCheck {
    pub fn schedule(&mut self, check: DuplicateCheck) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(check);
        self.generation
    }

    pub fn take_if_current(&mut self, ticket: u64) -> Option<DuplicateCheck> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
