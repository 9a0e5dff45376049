use crate::error::{Result, TrackerError};
use crate::models::{EntryPatch, FoodEntry, FoodField};

use super::coerce::coerce_amount;

/// The in-progress form values. Numeric fields hold raw text until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbohydrate: String,
    pub fat: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self::blank()
    }
}

impl Draft {
    /// Empty name, zero in every numeric field.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            calories: "0".to_string(),
            protein: "0".to_string(),
            carbohydrate: "0".to_string(),
            fat: "0".to_string(),
        }
    }

    pub fn from_entry(entry: &FoodEntry) -> Self {
        Self {
            name: entry.name.clone(),
            calories: entry.field_text(FoodField::Calories),
            protein: entry.field_text(FoodField::Protein),
            carbohydrate: entry.field_text(FoodField::Carbohydrate),
            fat: entry.field_text(FoodField::Fat),
        }
    }

    pub fn get(&self, field: FoodField) -> &str {
        match field {
            FoodField::Name => &self.name,
            FoodField::Calories => &self.calories,
            FoodField::Protein => &self.protein,
            FoodField::Carbohydrate => &self.carbohydrate,
            FoodField::Fat => &self.fat,
        }
    }

    pub fn set(&mut self, field: FoodField, value: impl Into<String>) {
        let slot = match field {
            FoodField::Name => &mut self.name,
            FoodField::Calories => &mut self.calories,
            FoodField::Protein => &mut self.protein,
            FoodField::Carbohydrate => &mut self.carbohydrate,
            FoodField::Fat => &mut self.fat,
        };
        *slot = value.into();
    }

    /// First field left blank, if any.
    pub fn missing_field(&self) -> Option<FoodField> {
        FoodField::ALL
            .into_iter()
            .find(|&f| self.get(f).trim().is_empty())
    }

    /// Check required fields, then coerce the numeric text into an entry.
    pub fn to_entry(&self) -> Result<FoodEntry> {
        if let Some(field) = self.missing_field() {
            return Err(TrackerError::MissingField(field));
        }

        Ok(FoodEntry {
            name: self.name.trim().to_string(),
            calories: coerce_amount(&self.calories),
            protein: coerce_amount(&self.protein),
            carbohydrate: coerce_amount(&self.carbohydrate),
            fat: coerce_amount(&self.fat),
        })
    }

    /// Same as [`Draft::to_entry`], as a patch overriding every field.
    pub fn to_patch(&self) -> Result<EntryPatch> {
        self.to_entry().map(EntryPatch::from)
    }
}
