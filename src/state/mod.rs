mod coerce;
mod coordinator;
mod draft;
mod intent;
mod ledger;
mod session;

pub use coerce::coerce_amount;
pub use coordinator::{ADD_LABEL, EditCoordinator, EditMode, Submission, UPDATE_LABEL};
pub use draft::Draft;
pub use intent::{Intent, RawEntry, RawPatch, RawValue};
pub use ledger::Ledger;
pub use session::{Snapshot, TrackerSession};
