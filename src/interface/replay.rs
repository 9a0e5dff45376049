use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::state::{Intent, TrackerSession};

/// Outcome of replaying a script.
#[derive(Debug, Default, PartialEq)]
pub struct ReplayReport {
    pub applied: usize,
    /// 1-based step number and error message of every skipped intent.
    pub failures: Vec<(usize, String)>,
}

/// Load a JSON array of intents.
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<Intent>> {
    let content = fs::read_to_string(path)?;
    let intents: Vec<Intent> = serde_json::from_str(&content)?;
    Ok(intents)
}

/// Apply `intents` in order.
///
/// Without `keep_going` the first rejected intent stops the replay and is
/// returned as [`TrackerError::ReplayStep`]. With it, failures are collected
/// in the report and the rest of the script still runs.
pub fn replay(
    session: &mut TrackerSession,
    intents: Vec<Intent>,
    keep_going: bool,
) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for (i, intent) in intents.into_iter().enumerate() {
        let step = i + 1;
        let action = intent.action();
        debug!(step, action, "replaying intent");

        match session.apply(intent) {
            Ok(()) => report.applied += 1,
            Err(e) if keep_going => {
                warn!(step, action, error = %e, "skipping failed step");
                report.failures.push((step, e.to_string()));
            }
            Err(e) => {
                return Err(TrackerError::ReplayStep {
                    step,
                    action,
                    source: Box::new(e),
                });
            }
        }
    }

    Ok(report)
}
