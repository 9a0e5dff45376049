mod field;
mod food;
mod totals;

pub use field::FoodField;
pub use food::{EntryPatch, FoodEntry};
pub use totals::Totals;
