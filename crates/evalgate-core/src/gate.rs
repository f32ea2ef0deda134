//! Gate aggregation: resolve and verify every required model, collecting
//! every failure.

use crate::config::ReportIndex;
use crate::history::RepoHistory;
use crate::resolve::resolve_model_key;
use crate::verify::verify_entry;

/// Paths whose most recent change defines the freshness baseline, relative
/// to the repository root.
pub const WATCHED_PATHS: &[&str] = &["skills", "instructions/global.md"];

/// Outcome of one gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateVerdict {
    /// Every required model has a fresh report.
    Passed,
    /// No commit has ever touched the watched paths, so there is no
    /// baseline to gate against.
    SkippedNoWatchedHistory,
    /// Rendered failure messages, in required-model order.
    Failed(Vec<String>),
}

/// Run the gate for `required` model specs against a loaded report index.
///
/// Failures accumulate across all specs instead of stopping at the first,
/// so a single run reports every stale or misconfigured model.
pub fn run_gate(
    required: &[String],
    index: &ReportIndex,
    history: &impl RepoHistory,
) -> GateVerdict {
    let Some(latest) = history.latest_commit_touching(WATCHED_PATHS) else {
        return GateVerdict::SkippedNoWatchedHistory;
    };

    let mut failures = Vec::new();
    for spec in required {
        match resolve_model_key(spec, index.keys().map(String::as_str)) {
            Ok(key) => {
                // The resolver only returns keys drawn from the index.
                if let Some(entry) = index.get(&key)
                    && let Err(err) = verify_entry(&key, entry, &latest, history)
                {
                    failures.push(err.to_string());
                }
            }
            Err(err) => failures.push(err.to_string()),
        }
    }

    if failures.is_empty() {
        GateVerdict::Passed
    } else {
        GateVerdict::Failed(failures)
    }
}
