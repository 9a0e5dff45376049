pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{EntryPatch, FoodEntry, FoodField, Totals};
pub use state::{EditCoordinator, EditMode, Ledger, TrackerSession};
