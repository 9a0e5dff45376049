use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::TrackerError;

/// Minimum Jaro-Winkler score for an unknown field name to earn a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// One of the five fields of a food entry, in form and table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodField {
    Name,
    Calories,
    Protein,
    Carbohydrate,
    Fat,
}

impl FoodField {
    /// All fields in display order.
    pub const ALL: [FoodField; 5] = [
        FoodField::Name,
        FoodField::Calories,
        FoodField::Protein,
        FoodField::Carbohydrate,
        FoodField::Fat,
    ];

    /// The four numeric fields in display order.
    pub const NUMERIC: [FoodField; 4] = [
        FoodField::Calories,
        FoodField::Protein,
        FoodField::Carbohydrate,
        FoodField::Fat,
    ];

    /// Canonical lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            FoodField::Name => "name",
            FoodField::Calories => "calories",
            FoodField::Protein => "protein",
            FoodField::Carbohydrate => "carbohydrate",
            FoodField::Fat => "fat",
        }
    }

    /// Column / prompt label.
    pub fn label(self) -> &'static str {
        match self {
            FoodField::Name => "Food Name",
            FoodField::Calories => "Calories",
            FoodField::Protein => "Protein (g)",
            FoodField::Carbohydrate => "Carbohydrate (g)",
            FoodField::Fat => "Fat (g)",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, FoodField::Name)
    }

    /// Closest known field to `input`, if any is similar enough.
    pub fn suggest(input: &str) -> Option<FoodField> {
        let input = input.trim().to_lowercase();
        FoodField::ALL
            .into_iter()
            .map(|f| (f, jaro_winkler(f.key(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(f, _)| f)
    }
}

impl fmt::Display for FoodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FoodField {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(FoodField::Name),
            "calories" | "cal" => Ok(FoodField::Calories),
            "protein" => Ok(FoodField::Protein),
            "carbohydrate" | "carbs" | "carb" => Ok(FoodField::Carbohydrate),
            "fat" | "fats" => Ok(FoodField::Fat),
            _ => Err(TrackerError::UnknownField {
                name: s.to_string(),
                suggestion: FoodField::suggest(s),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Calories".parse::<FoodField>().unwrap(), FoodField::Calories);
        assert_eq!(" FAT ".parse::<FoodField>().unwrap(), FoodField::Fat);
        assert_eq!("carbs".parse::<FoodField>().unwrap(), FoodField::Carbohydrate);
    }

    #[test]
    fn test_unknown_field_suggests_closest() {
        let err = "protien".parse::<FoodField>().unwrap_err();
        match err {
            TrackerError::UnknownField { suggestion, .. } => {
                assert_eq!(suggestion, Some(FoodField::Protein));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err_message("protien").contains("did you mean 'protein'"));
    }

    #[test]
    fn test_unrelated_name_has_no_suggestion() {
        assert_eq!(FoodField::suggest("zzzz"), None);
        assert_eq!(err_message("zzzz"), "Unknown field 'zzzz'");
    }

    #[test]
    fn test_order_is_fixed() {
        let keys: Vec<&str> = FoodField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["name", "calories", "protein", "carbohydrate", "fat"]);
        assert!(FoodField::NUMERIC.iter().all(|f| f.is_numeric()));
    }

    fn err_message(input: &str) -> String {
        input.parse::<FoodField>().unwrap_err().to_string()
    }
}
