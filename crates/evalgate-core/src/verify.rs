//! Freshness verification for resolved report-index entries.

use crate::history::{CommitId, RepoHistory, short_ref};
use serde_json::Value;
use thiserror::Error;

/// Why a resolved report entry failed verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The index entry is not a JSON object.
    #[error("Report index entry for '{key}' is invalid.")]
    InvalidEntry { key: String },

    /// The index entry has no non-empty `sha` string.
    #[error("Report index entry for '{key}' is missing a sha.")]
    MissingSha { key: String },

    /// The recorded sha names no commit in this repository.
    #[error("Report sha '{sha}' for '{key}' is not in git history.")]
    UnknownSha { key: String, sha: String },

    /// The report commit predates the latest watched change. Both refs are
    /// pre-shortened for display.
    #[error("Report for '{key}' ({sha}) predates latest skills/instructions change ({latest}).")]
    Stale {
        key: String,
        sha: String,
        latest: String,
    },
}

/// Extract the recorded commit ref from one index entry.
///
/// The entry must be an object with a non-empty `sha` string, trimmed of
/// surrounding whitespace. Extra fields (the report writer also records a
/// `timestamp`) are ignored.
pub fn entry_sha<'a>(key: &str, entry: &'a Value) -> Result<&'a str, VerifyError> {
    let Some(fields) = entry.as_object() else {
        return Err(VerifyError::InvalidEntry {
            key: key.to_string(),
        });
    };
    match fields.get("sha").and_then(Value::as_str).map(str::trim) {
        Some(sha) if !sha.is_empty() => Ok(sha),
        _ => Err(VerifyError::MissingSha {
            key: key.to_string(),
        }),
    }
}

/// Check that `entry`'s recorded commit is at least as new as `latest`, the
/// most recent commit touching the watched paths. A report commit equal to
/// `latest` counts as fresh.
pub fn verify_entry(
    key: &str,
    entry: &Value,
    latest: &CommitId,
    history: &impl RepoHistory,
) -> Result<(), VerifyError> {
    let sha = entry_sha(key, entry)?;
    let Some(commit) = history.resolve_commit(sha) else {
        return Err(VerifyError::UnknownSha {
            key: key.to_string(),
            sha: sha.to_string(),
        });
    };
    if history.is_ancestor_or_equal(latest, &commit) {
        return Ok(());
    }
    Err(VerifyError::Stale {
        key: key.to_string(),
        sha: short_ref(sha).to_string(),
        latest: latest.short().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{VerifyError, entry_sha, verify_entry};
    use crate::history::CommitId;
    use crate::history::fake::FakeHistory;
    use serde_json::json;

    // root -> mid -> tip, plus a branch off root.
    fn history() -> FakeHistory {
        FakeHistory::new()
            .commit("aaaaaaaaaa", None)
            .commit("bbbbbbbbbb", Some("aaaaaaaaaa"))
            .commit("cccccccccc", Some("bbbbbbbbbb"))
            .commit("dddddddddd", Some("aaaaaaaaaa"))
    }

    #[test]
    fn report_at_latest_change_is_fresh() {
        let latest = CommitId::new("bbbbbbbbbb");
        let entry = json!({"sha": "bbbbbbbbbb", "timestamp": "2026-02-22T00:00:00Z"});
        assert_eq!(verify_entry("acme/gpt-x", &entry, &latest, &history()), Ok(()));
    }

    #[test]
    fn report_after_latest_change_is_fresh() {
        let latest = CommitId::new("bbbbbbbbbb");
        let entry = json!({"sha": "cccccccccc"});
        assert_eq!(verify_entry("acme/gpt-x", &entry, &latest, &history()), Ok(()));
    }

    #[test]
    fn report_before_latest_change_is_stale() {
        let latest = CommitId::new("cccccccccc");
        let entry = json!({"sha": "aaaaaaaaaa"});
        let err = verify_entry("acme/gpt-x", &entry, &latest, &history())
            .expect_err("stale report should fail");
        assert_eq!(
            err.to_string(),
            "Report for 'acme/gpt-x' (aaaaaaa) predates latest skills/instructions change (ccccccc)."
        );
    }

    #[test]
    fn diverged_report_is_stale() {
        let latest = CommitId::new("cccccccccc");
        let entry = json!({"sha": "dddddddddd"});
        assert!(matches!(
            verify_entry("acme/gpt-x", &entry, &latest, &history()),
            Err(VerifyError::Stale { .. })
        ));
    }

    #[test]
    fn unknown_sha_is_reported_with_full_ref() {
        let latest = CommitId::new("bbbbbbbbbb");
        let entry = json!({"sha": "0123456789"});
        let err = verify_entry("acme/gpt-x", &entry, &latest, &history())
            .expect_err("unknown sha should fail");
        assert_eq!(
            err.to_string(),
            "Report sha '0123456789' for 'acme/gpt-x' is not in git history."
        );
    }

    #[test]
    fn non_object_entry_is_invalid() {
        let err = entry_sha("acme/gpt-x", &json!("done")).expect_err("non-object should fail");
        assert_eq!(
            err,
            VerifyError::InvalidEntry {
                key: "acme/gpt-x".to_string(),
            }
        );
    }

    #[test]
    fn entry_without_usable_sha_is_missing_sha() {
        let entries = [
            json!({}),
            json!({"sha": ""}),
            json!({"sha": "   "}),
            json!({"sha": 42}),
            json!({"sha": null}),
        ];
        for entry in entries {
            let err = entry_sha("acme/gpt-x", &entry).expect_err("sha should be required");
            assert_eq!(
                err,
                VerifyError::MissingSha {
                    key: "acme/gpt-x".to_string(),
                }
            );
        }
    }

    #[test]
    fn entry_sha_trims_surrounding_whitespace() {
        assert_eq!(entry_sha("k", &json!({"sha": " abc123 \n"})), Ok("abc123"));
    }
}
