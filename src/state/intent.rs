use serde::Deserialize;

use crate::models::{EntryPatch, FoodField};

use super::coerce::coerce_amount;
use super::draft::Draft;

/// A user action forwarded from a front-end to the session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Add(RawEntry),
    UpdateAt { index: usize, patch: RawPatch },
    DeleteAt { index: usize },
    BeginEdit { index: usize },
    CancelEdit,
    UpdateDraftField { field: String, value: RawValue },
    Submit,
}

impl Intent {
    /// Short name used in logs and replay reports.
    pub fn action(&self) -> &'static str {
        match self {
            Intent::Add(_) => "add",
            Intent::UpdateAt { .. } => "update_at",
            Intent::DeleteAt { .. } => "delete_at",
            Intent::BeginEdit { .. } => "begin_edit",
            Intent::CancelEdit => "cancel_edit",
            Intent::UpdateDraftField { .. } => "update_draft_field",
            Intent::Submit => "submit",
        }
    }
}

/// A form value as typed: JSON numbers and strings are both accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    pub fn into_text(self) -> String {
        match self {
            RawValue::Integer(n) => n.to_string(),
            RawValue::Float(n) => n.to_string(),
            RawValue::Text(s) => s,
        }
    }
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Text("0".to_string())
    }
}

/// Entry fields for an `add` intent, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub name: String,
    pub calories: RawValue,
    pub protein: RawValue,
    pub carbohydrate: RawValue,
    pub fat: RawValue,
}

impl From<RawEntry> for Draft {
    fn from(raw: RawEntry) -> Self {
        let mut draft = Draft::blank();
        draft.set(FoodField::Name, raw.name);
        draft.set(FoodField::Calories, raw.calories.into_text());
        draft.set(FoodField::Protein, raw.protein.into_text());
        draft.set(FoodField::Carbohydrate, raw.carbohydrate.into_text());
        draft.set(FoodField::Fat, raw.fat.into_text());
        draft
    }
}

/// Fields of an `update_at` intent, before coercion. Absent fields stay unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPatch {
    pub name: Option<String>,
    pub calories: Option<RawValue>,
    pub protein: Option<RawValue>,
    pub carbohydrate: Option<RawValue>,
    pub fat: Option<RawValue>,
}

impl From<RawPatch> for EntryPatch {
    fn from(raw: RawPatch) -> Self {
        let coerce = |value: Option<RawValue>| value.map(|v| coerce_amount(&v.into_text()));
        Self {
            name: raw.name,
            calories: coerce(raw.calories),
            protein: coerce(raw.protein),
            carbohydrate: coerce(raw.carbohydrate),
            fat: coerce(raw.fat),
        }
    }
}
