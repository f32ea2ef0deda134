//! Git adapter for the eval-report freshness gate.
//!
//! This crate is intentionally thin: it shells out to `git` for read-only
//! history queries and keeps no gating policy.

use evalgate_core::{CommitId, RepoHistory};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Errors from interacting with a git repository.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git executable is not available in PATH")]
    NotInstalled,

    #[error("git command failed: git {args} ({message})")]
    CommandFailed { args: String, message: String },

    #[error("unable to parse git output: {0}")]
    Parse(String),
}

/// Thin client around the `git` CLI, rooted at a discovered work tree.
#[derive(Debug, Clone)]
pub struct GitClient {
    repo_root: PathBuf,
}

impl GitClient {
    /// Returns true if `git` is available in PATH.
    pub fn is_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Discover the enclosing work tree from `path` by resolving
    /// `git rev-parse --show-toplevel`. Fails when `path` is not inside a
    /// git repository.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let stdout = run_git(path.as_ref(), &["rev-parse", "--show-toplevel"])?;
        let root = first_nonempty_line(&stdout)
            .ok_or_else(|| GitError::Parse("git rev-parse returned empty output".to_string()))?;
        Ok(Self {
            repo_root: PathBuf::from(root),
        })
    }

    /// Filesystem path to the detected repository root.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl RepoHistory for GitClient {
    fn resolve_commit(&self, reference: &str) -> Option<CommitId> {
        let spec = commit_spec(reference);
        let stdout = run_git(
            &self.repo_root,
            &["rev-parse", "--verify", "--quiet", spec.as_str()],
        )
        .ok()?;
        first_nonempty_line(&stdout).map(CommitId::new)
    }

    fn latest_commit_touching(&self, paths: &[&str]) -> Option<CommitId> {
        // `git log` fails outright in a repository with no commits; both
        // that and an empty match set read as "no baseline".
        let mut args = vec!["log", "-1", "--format=%H", "--"];
        args.extend_from_slice(paths);
        let stdout = run_git(&self.repo_root, &args).ok()?;
        first_nonempty_line(&stdout).map(CommitId::new)
    }

    fn is_ancestor_or_equal(&self, ancestor: &CommitId, descendant: &CommitId) -> bool {
        // Exit status is the answer: zero when `ancestor` is reachable
        // from (or equal to) `descendant`.
        run_git(
            &self.repo_root,
            &[
                "merge-base",
                "--is-ancestor",
                ancestor.as_str(),
                descendant.as_str(),
            ],
        )
        .is_ok()
    }
}

/// Revision spec that only resolves when `reference` names a commit.
fn commit_spec(reference: &str) -> String {
    format!("{reference}^{{commit}}")
}

fn run_git(cwd: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                GitError::NotInstalled
            } else {
                GitError::CommandFailed {
                    args: args.join(" "),
                    message: err.to_string(),
                }
            }
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            "unknown error".to_string()
        } else {
            stderr
        };
        Err(GitError::CommandFailed {
            args: args.join(" "),
            message,
        })
    }
}

fn first_nonempty_line(input: &str) -> Option<&str> {
    input.lines().map(str::trim).find(|line| !line.is_empty())
}
