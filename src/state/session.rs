use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{EntryPatch, FoodEntry, FoodField, Totals};

use super::coordinator::{EditCoordinator, EditMode, Submission};
use super::draft::Draft;
use super::intent::Intent;
use super::ledger::Ledger;

/// Owns the ledger and the one edit coordinator.
///
/// All mutations go through here so the coordinator sees every delete.
#[derive(Debug, Clone, Default)]
pub struct TrackerSession {
    ledger: Ledger,
    editor: EditCoordinator,
}

/// Serializable view of the session for rendering.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub entries: &'a [FoodEntry],
    pub totals: Totals,
    pub active_index: Option<usize>,
}

impl TrackerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn entries(&self) -> &[FoodEntry] {
        self.ledger.entries()
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn mode(&self) -> EditMode {
        self.editor.mode()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.editor.active_index()
    }

    pub fn draft(&self) -> &Draft {
        self.editor.draft()
    }

    pub fn submit_label(&self) -> &'static str {
        self.editor.submit_label()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            entries: self.ledger.entries(),
            totals: self.ledger.totals(),
            active_index: self.editor.active_index(),
        }
    }

    pub fn add(&mut self, entry: FoodEntry) {
        self.ledger.add(entry);
    }

    pub fn update_at(&mut self, index: usize, patch: &EntryPatch) -> Result<()> {
        self.ledger.update_at(index, patch)?;
        Ok(())
    }

    /// Delete an entry; an edit at or after `index` is cancelled.
    pub fn delete_at(&mut self, index: usize) -> Result<FoodEntry> {
        let removed = self.ledger.delete_at(index)?;
        self.editor.on_deleted(index);
        Ok(removed)
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.editor.begin_edit(&self.ledger, index)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel_edit();
    }

    pub fn update_draft_field(&mut self, name: &str, value: impl Into<String>) -> Result<FoodField> {
        self.editor.update_draft_field(name, value)
    }

    pub fn submit(&mut self) -> Result<Submission> {
        let submission = self.editor.submit(&mut self.ledger)?;
        match submission {
            Submission::Added(index) => info!(index, "food added"),
            Submission::Updated(index) => info!(index, "food updated"),
        }
        Ok(submission)
    }

    /// Dispatch one intent. A failing intent leaves the session unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        let action = intent.action();
        let result = match intent {
            Intent::Add(raw) => Draft::from(raw).to_entry().map(|entry| self.add(entry)),
            Intent::UpdateAt { index, patch } => self.update_at(index, &EntryPatch::from(patch)),
            Intent::DeleteAt { index } => self.delete_at(index).map(|_| ()),
            Intent::BeginEdit { index } => self.begin_edit(index),
            Intent::CancelEdit => {
                self.cancel_edit();
                Ok(())
            }
            Intent::UpdateDraftField { field, value } => {
                self.update_draft_field(&field, value.into_text()).map(|_| ())
            }
            Intent::Submit => self.submit().map(|_| ()),
        };

        if let Err(e) = &result {
            warn!(action, error = %e, "intent rejected");
        }
        result
    }
}
