use serde::{Deserialize, Serialize};

use super::FoodField;
use crate::error::{Result, TrackerError};

/// A recorded food item with its nutrition numbers.
///
/// Entries carry no identity of their own: the ledger addresses them by
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbohydrate: u32,
    pub fat: u32,
}

impl FoodEntry {
    pub fn new(
        name: impl Into<String>,
        calories: u32,
        protein: u32,
        carbohydrate: u32,
        fat: u32,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbohydrate,
            fat,
        }
    }

    /// Value of a numeric field. `Name` yields `None`.
    pub fn amount(&self, field: FoodField) -> Option<u32> {
        match field {
            FoodField::Name => None,
            FoodField::Calories => Some(self.calories),
            FoodField::Protein => Some(self.protein),
            FoodField::Carbohydrate => Some(self.carbohydrate),
            FoodField::Fat => Some(self.fat),
        }
    }

    /// Field value rendered as text, the way a form shows it.
    pub fn field_text(&self, field: FoodField) -> String {
        match field {
            FoodField::Name => self.name.clone(),
            numeric => self.amount(numeric).unwrap_or_default().to_string(),
        }
    }

    /// Shallow merge: every field set in `patch` overrides this entry's value.
    pub fn apply(&mut self, patch: &EntryPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(v) = patch.calories {
            self.calories = v;
        }
        if let Some(v) = patch.protein {
            self.protein = v;
        }
        if let Some(v) = patch.carbohydrate {
            self.carbohydrate = v;
        }
        if let Some(v) = patch.fat {
            self.fat = v;
        }
    }
}

/// A partial update for a ledger entry. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbohydrate: Option<u32>,
    pub fat: Option<u32>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }

    /// Copy of this patch with the name trimmed the way a submitted form is.
    ///
    /// A name that is blank after trimming is rejected.
    pub fn normalized(&self) -> Result<EntryPatch> {
        let name = match &self.name {
            Some(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(TrackerError::MissingField(FoodField::Name));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        Ok(EntryPatch {
            name,
            ..self.clone()
        })
    }
}

impl From<FoodEntry> for EntryPatch {
    fn from(entry: FoodEntry) -> Self {
        Self {
            name: Some(entry.name),
            calories: Some(entry.calories),
            protein: Some(entry.protein),
            carbohydrate: Some(entry.carbohydrate),
            fat: Some(entry.fat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> FoodEntry {
        FoodEntry::new("Egg", 70, 6, 1, 5)
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut entry = sample_entry();
        entry.apply(&EntryPatch {
            calories: Some(80),
            ..Default::default()
        });
        assert_eq!(entry, FoodEntry::new("Egg", 80, 6, 1, 5));
    }

    #[test]
    fn test_apply_full_patch_replaces_everything() {
        let mut entry = sample_entry();
        let replacement = FoodEntry::new("Toast", 120, 4, 22, 2);
        entry.apply(&EntryPatch::from(replacement.clone()));
        assert_eq!(entry, replacement);
    }

    #[test]
    fn test_field_text() {
        let entry = sample_entry();
        assert_eq!(entry.field_text(FoodField::Name), "Egg");
        assert_eq!(entry.field_text(FoodField::Carbohydrate), "1");
        assert_eq!(entry.amount(FoodField::Name), None);
    }

    #[test]
    fn test_normalized_trims_name() {
        let patch = EntryPatch {
            name: Some("  Egg ".to_string()),
            fat: Some(4),
            ..Default::default()
        };
        let normalized = patch.normalized().unwrap();
        assert_eq!(normalized.name.as_deref(), Some("Egg"));
        assert_eq!(normalized.fat, Some(4));
    }

    #[test]
    fn test_normalized_rejects_blank_name() {
        for blank in ["", "   "] {
            let patch = EntryPatch {
                name: Some(blank.to_string()),
                ..Default::default()
            };
            assert!(matches!(
                patch.normalized(),
                Err(TrackerError::MissingField(FoodField::Name))
            ));
        }
    }

    #[test]
    fn test_empty_patch() {
        assert!(EntryPatch::default().is_empty());
        assert!(!EntryPatch::from(sample_entry()).is_empty());
    }
}
