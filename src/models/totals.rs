use serde::Serialize;

use super::FoodEntry;

/// Running sums of the four numeric fields over a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub calories: u64,
    pub protein: u64,
    pub carbohydrate: u64,
    pub fat: u64,
}

impl Totals {
    pub fn new(calories: u64, protein: u64, carbohydrate: u64, fat: u64) -> Self {
        Self {
            calories,
            protein,
            carbohydrate,
            fat,
        }
    }

    /// Full re-summation over `entries`.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FoodEntry>) -> Self {
        let mut totals = Totals::default();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }

    #[inline]
    pub fn add(&mut self, entry: &FoodEntry) {
        self.calories = self.calories.saturating_add(entry.calories as u64);
        self.protein = self.protein.saturating_add(entry.protein as u64);
        self.carbohydrate = self.carbohydrate.saturating_add(entry.carbohydrate as u64);
        self.fat = self.fat.saturating_add(entry.fat as u64);
    }

    /// Remove an entry previously added.
    #[inline]
    pub fn subtract(&mut self, entry: &FoodEntry) {
        self.calories = self.calories.saturating_sub(entry.calories as u64);
        self.protein = self.protein.saturating_sub(entry.protein as u64);
        self.carbohydrate = self.carbohydrate.saturating_sub(entry.carbohydrate as u64);
        self.fat = self.fat.saturating_sub(entry.fat as u64);
    }

    /// Swap `old` for `new` in the sums.
    pub fn replace(&mut self, old: &FoodEntry, new: &FoodEntry) {
        self.subtract(old);
        self.add(new);
    }
}
