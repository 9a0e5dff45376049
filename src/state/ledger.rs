use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{EntryPatch, FoodEntry, Totals};

/// Ordered food entries plus their running totals.
///
/// Every mutation adjusts `totals` in the same call, so
/// `totals == Totals::from_entries(entries)` holds between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<FoodEntry>,
    totals: Totals,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and add its amounts to the totals. The name is trimmed.
    pub fn add(&mut self, mut entry: FoodEntry) {
        let trimmed = entry.name.trim();
        if trimmed.len() != entry.name.len() {
            entry.name = trimmed.to_string();
        }
        self.totals.add(&entry);
        debug!(name = %entry.name, index = self.entries.len(), "ledger add");
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    pub fn delete_at(&mut self, index: usize) -> Result<FoodEntry> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        self.totals.subtract(&removed);
        debug!(name = %removed.name, index, "ledger delete");
        Ok(removed)
    }

    /// Merge `patch` over the entry at `index` and adjust totals for the change.
    ///
    /// A patched name is trimmed; a blank one fails with `MissingField` and
    /// leaves the ledger unchanged.
    pub fn update_at(&mut self, index: usize, patch: &EntryPatch) -> Result<&FoodEntry> {
        self.check_index(index)?;
        if patch.is_empty() {
            debug!(index, "empty patch ignored");
            return Ok(&self.entries[index]);
        }
        let patch = patch.normalized()?;
        let entry = &mut self.entries[index];
        let old = entry.clone();
        entry.apply(&patch);
        self.totals.replace(&old, entry);
        debug!(name = %entry.name, index, "ledger update");
        Ok(&*entry)
    }

    pub fn get(&self, index: usize) -> Option<&FoodEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Totals re-summed from the entries, independent of the running sums.
    pub fn recompute_totals(&self) -> Totals {
        Totals::from_entries(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(TrackerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodField;

    fn egg() -> FoodEntry {
        FoodEntry::new("Egg", 70, 6, 1, 5)
    }

    fn toast() -> FoodEntry {
        FoodEntry::new("Toast", 120, 4, 22, 2)
    }

    #[test]
    fn test_add_and_delete_scenario() {
        let mut ledger = Ledger::new();
        ledger.add(egg());
        ledger.add(toast());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.totals(), Totals::new(190, 10, 23, 7));

        let removed = ledger.delete_at(0).unwrap();
        assert_eq!(removed, egg());
        assert_eq!(ledger.entries(), &[toast()]);
        assert_eq!(ledger.totals(), Totals::new(120, 4, 22, 2));
    }

    #[test]
    fn test_update_adjusts_totals() {
        let mut ledger = Ledger::new();
        ledger.add(FoodEntry::new("Rice", 200, 4, 45, 0));
        ledger
            .update_at(
                0,
                &EntryPatch {
                    calories: Some(300),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(ledger.get(0).unwrap().calories, 300);
        assert_eq!(ledger.totals().calories, 300);
        assert_eq!(ledger.totals(), ledger.recompute_totals());
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let mut ledger = Ledger::new();
        ledger.add(egg());
        let updated = ledger
            .update_at(
                0,
                &EntryPatch {
                    name: Some("Boiled Egg".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();
        assert_eq!(updated, FoodEntry::new("Boiled Egg", 70, 6, 1, 5));
        assert_eq!(ledger.totals(), Totals::new(70, 6, 1, 5));
    }

    #[test]
    fn test_update_trims_name() {
        let mut ledger = Ledger::new();
        ledger.add(FoodEntry::new(" Egg ", 70, 6, 1, 5));
        assert_eq!(ledger.get(0).unwrap().name, "Egg");

        ledger
            .update_at(
                0,
                &EntryPatch {
                    name: Some("  Boiled Egg ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(ledger.get(0).unwrap().name, "Boiled Egg");
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let mut ledger = Ledger::new();
        ledger.add(egg());
        let before = ledger.clone();

        let err = ledger
            .update_at(
                0,
                &EntryPatch {
                    name: Some("  ".to_string()),
                    calories: Some(500),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, TrackerError::MissingField(FoodField::Name)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add(egg());
        let before = ledger.clone();
        assert_eq!(ledger.update_at(0, &EntryPatch::default()).unwrap(), &egg());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut ledger = Ledger::new();
        ledger.add(egg());
        let before = ledger.clone();

        assert!(matches!(
            ledger.delete_at(1),
            Err(TrackerError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(ledger.update_at(5, &EntryPatch::default()).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_empty_ledger() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
        assert!(ledger.delete_at(0).is_err());
    }
}
