use thiserror::Error;

use crate::models::FoodField;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Index {index} out of range for ledger of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Missing required field: {0}")]
    MissingField(FoodField),

    #[error("Unknown field '{name}'{}", suggestion_hint(.suggestion))]
    UnknownField {
        name: String,
        suggestion: Option<FoodField>,
    },

    #[error("Step {step} ({action}) failed: {source}")]
    ReplayStep {
        step: usize,
        action: &'static str,
        #[source]
        source: Box<TrackerError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

fn suggestion_hint(suggestion: &Option<FoodField>) -> String {
    match suggestion {
        Some(field) => format!(" (did you mean '{}'?)", field),
        None => String::new(),
    }
}
