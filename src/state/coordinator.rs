use tracing::debug;

use crate::error::Result;
use crate::models::FoodField;

use super::draft::Draft;
use super::ledger::Ledger;

pub const ADD_LABEL: &str = "Add Food";
pub const UPDATE_LABEL: &str = "Update Food";

/// Whether the form is creating a new entry or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Idle,
    Editing(usize),
}

/// What a successful submit did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Added(usize),
    Updated(usize),
}

/// Tracks the single entry being edited (if any) and the draft form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCoordinator {
    active: Option<usize>,
    draft: Draft,
}

impl EditCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        match self.active {
            Some(index) => EditMode::Editing(index),
            None => EditMode::Idle,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Label for the form's submit action.
    pub fn submit_label(&self) -> &'static str {
        if self.active.is_some() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Start editing `ledger[index]`, replacing any edit already in progress.
    pub fn begin_edit(&mut self, ledger: &Ledger, index: usize) -> Result<()> {
        ledger.check_index(index)?;
        self.draft = Draft::from_entry(&ledger.entries()[index]);
        self.active = Some(index);
        debug!(index, "edit started");
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if let Some(index) = self.active.take() {
            debug!(index, "edit cancelled");
        }
        self.draft = Draft::blank();
    }

    /// Store raw text for the named field. Numbers are coerced at submit.
    pub fn update_draft_field(&mut self, name: &str, value: impl Into<String>) -> Result<FoodField> {
        let field: FoodField = name.parse()?;
        self.draft.set(field, value);
        Ok(field)
    }

    /// Commit the draft: update the active entry, or append a new one.
    ///
    /// On success the coordinator is idle with a blank draft. On failure
    /// nothing changes.
    pub fn submit(&mut self, ledger: &mut Ledger) -> Result<Submission> {
        let submission = match self.active {
            Some(index) => {
                let patch = self.draft.to_patch()?;
                ledger.update_at(index, &patch)?;
                Submission::Updated(index)
            }
            None => {
                let entry = self.draft.to_entry()?;
                ledger.add(entry);
                Submission::Added(ledger.len() - 1)
            }
        };
        self.cancel_edit();
        Ok(submission)
    }

    /// React to `ledger.delete_at(index)`.
    ///
    /// An edit at or after the deleted position refers to a shifted or
    /// removed entry, so it is cancelled.
    pub fn on_deleted(&mut self, index: usize) {
        if matches!(self.active, Some(active) if active >= index) {
            self.cancel_edit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::FoodEntry;

    fn ledger_with_rice() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add(FoodEntry::new("Rice", 200, 4, 45, 0));
        ledger
    }

    #[test]
    fn test_edit_rice_calories() {
        let mut ledger = ledger_with_rice();
        let mut editor = EditCoordinator::new();

        editor.begin_edit(&ledger, 0).unwrap();
        assert_eq!(editor.mode(), EditMode::Editing(0));
        assert_eq!(editor.submit_label(), UPDATE_LABEL);

        editor.update_draft_field("calories", "300").unwrap();
        assert_eq!(editor.submit(&mut ledger).unwrap(), Submission::Updated(0));

        assert_eq!(ledger.get(0).unwrap().calories, 300);
        assert_eq!(ledger.totals().calories, 300);
        assert_eq!(editor.mode(), EditMode::Idle);
        assert_eq!(editor.draft(), &Draft::blank());
    }

    #[test]
    fn test_submit_when_idle_adds() {
        let mut ledger = Ledger::new();
        let mut editor = EditCoordinator::new();
        assert_eq!(editor.submit_label(), ADD_LABEL);

        editor.update_draft_field("name", "Egg").unwrap();
        editor.update_draft_field("calories", "70").unwrap();
        assert_eq!(editor.submit(&mut ledger).unwrap(), Submission::Added(0));
        assert_eq!(ledger.get(0).unwrap(), &FoodEntry::new("Egg", 70, 0, 0, 0));
        assert_eq!(editor.draft(), &Draft::blank());
    }

    #[test]
    fn test_failed_submit_keeps_state() {
        let mut ledger = Ledger::new();
        let mut editor = EditCoordinator::new();
        editor.update_draft_field("calories", "70").unwrap();

        let err = editor.submit(&mut ledger).unwrap_err();
        assert!(matches!(err, TrackerError::MissingField(FoodField::Name)));
        assert!(ledger.is_empty());
        assert_eq!(editor.draft().calories, "70");
    }

    #[test]
    fn test_begin_edit_out_of_range() {
        let ledger = ledger_with_rice();
        let mut editor = EditCoordinator::new();
        assert!(editor.begin_edit(&ledger, 1).is_err());
        assert_eq!(editor.mode(), EditMode::Idle);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut editor = EditCoordinator::new();
        assert!(editor.update_draft_field("sugar", "5").is_err());
        assert_eq!(editor.draft(), &Draft::blank());
    }

    #[test]
    fn test_on_deleted() {
        let mut ledger = ledger_with_rice();
        ledger.add(FoodEntry::new("Beans", 150, 9, 27, 1));
        let mut editor = EditCoordinator::new();

        editor.begin_edit(&ledger, 0).unwrap();
        editor.on_deleted(1);
        assert_eq!(editor.mode(), EditMode::Editing(0));

        editor.on_deleted(0);
        assert_eq!(editor.mode(), EditMode::Idle);
    }
}
