//! Version-control capability surface for the freshness gate.

/// Leading characters of a ref shown in diagnostics.
const SHORT_LEN: usize = 7;

/// An opaque resolved commit identifier.
///
/// Commit ids carry no ordering of their own; the only comparison the gate
/// ever makes is a graph-ancestry query through [`RepoHistory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display prefix used in human-facing messages.
    pub fn short(&self) -> &str {
        short_ref(&self.0)
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Leading prefix of a ref string as it appears in diagnostics. Refs shorter
/// than the display width pass through whole.
pub fn short_ref(reference: &str) -> &str {
    match reference.char_indices().nth(SHORT_LEN) {
        Some((idx, _)) => &reference[..idx],
        None => reference,
    }
}

/// Read-only queries the gate needs from a version-control backend.
///
/// Exactly three operations; any backend that can answer them is
/// substitutable, and core tests run against an in-memory fake.
pub trait RepoHistory {
    /// Resolve a ref string to a concrete commit, or `None` when the ref
    /// does not name a commit in this repository.
    fn resolve_commit(&self, reference: &str) -> Option<CommitId>;

    /// Most recent commit touching any of `paths`, or `None` when history
    /// contains no such commit.
    fn latest_commit_touching(&self, paths: &[&str]) -> Option<CommitId>;

    /// Whether `ancestor` is an ancestor of, or equal to, `descendant`.
    fn is_ancestor_or_equal(&self, ancestor: &CommitId, descendant: &CommitId) -> bool;
}


#[cfg(test)]
mod tests {
    use super::{CommitId, RepoHistory, fake::FakeHistory, short_ref};

    #[test]
    fn short_ref_truncates_long_ids() {
        assert_eq!(short_ref("0123456789abcdef"), "0123456");
    }

    #[test]
    fn short_ref_keeps_short_refs_whole() {
        assert_eq!(short_ref("v1.2"), "v1.2");
    }

    #[test]
    fn fake_history_walks_parent_chains() {
        let history = FakeHistory::new()
            .commit("root000000", None)
            .commit("mid0000000", Some("root000000"))
            .commit("tip0000000", Some("mid0000000"))
            .commit("side000000", Some("root000000"));
        let root = CommitId::new("root000000");
        let tip = CommitId::new("tip0000000");
        let side = CommitId::new("side000000");
        assert!(history.is_ancestor_or_equal(&root, &tip));
        assert!(history.is_ancestor_or_equal(&tip, &tip));
        assert!(!history.is_ancestor_or_equal(&tip, &root));
        assert!(!history.is_ancestor_or_equal(&side, &tip));
    }
}
