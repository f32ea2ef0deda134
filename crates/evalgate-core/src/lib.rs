//! # Evalgate core
//!
//! Typed core of the eval-report freshness gate: resolve each required-model
//! identifier to a report-index key, then prove via commit ancestry that the
//! recorded report commit is at least as new as the latest change to the
//! watched skill/instruction sources.
//!
//! The crate is pure logic. Version control enters only through the
//! [`RepoHistory`] capability trait; reading files and spawning processes
//! stay with the caller.

pub mod config;
pub mod gate;
pub mod history;
pub mod resolve;
pub mod verify;

pub use config::{EvalConfig, ReportIndex};
pub use gate::{GateVerdict, WATCHED_PATHS, run_gate};
pub use history::{CommitId, RepoHistory, short_ref};
pub use resolve::{ResolveError, resolve_model_key};
pub use verify::{VerifyError, entry_sha, verify_entry};
