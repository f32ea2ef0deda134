//! Tiered resolution of required-model specs against report-index keys.

use std::collections::BTreeSet;
use thiserror::Error;

/// Separator between provider and model id in qualified keys.
const QUALIFIER: char = '/';

/// Why a required-model spec failed to resolve to a report key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Required model '{spec}' is missing from the report index.")]
    Missing { spec: String },

    #[error(
        "Required model '{spec}' matches multiple report keys ({}); use provider/id.",
        .candidates.join(", ")
    )]
    Ambiguous {
        spec: String,
        /// Every matching key, sorted.
        candidates: Vec<String>,
    },
}

/// Resolve one required-model spec to exactly one report key.
///
/// Matching escalates through three tiers:
/// 1. the spec present verbatim as a key;
/// 2. keys whose trailing component (after the last `/`) equals the spec;
/// 3. keys containing the spec anywhere.
///
/// Qualified specs (`provider/id`) stop after tier 1, so a provider typo is
/// reported instead of fuzzy-matched away. A tier matching several keys is
/// an ambiguity error naming every candidate.
pub fn resolve_model_key<'a, I>(spec: &str, keys: I) -> Result<String, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let keys: Vec<&str> = keys.into_iter().collect();

    if keys.contains(&spec) {
        return Ok(spec.to_string());
    }
    if spec.contains(QUALIFIER) {
        return Err(ResolveError::Missing {
            spec: spec.to_string(),
        });
    }

    let trailing: BTreeSet<&str> = keys
        .iter()
        .copied()
        .filter(|key| trailing_component(key) == spec)
        .collect();
    if let Some(outcome) = select(spec, trailing) {
        return outcome;
    }

    let containing: BTreeSet<&str> = keys
        .iter()
        .copied()
        .filter(|key| key.contains(spec))
        .collect();
    if let Some(outcome) = select(spec, containing) {
        return outcome;
    }

    Err(ResolveError::Missing {
        spec: spec.to_string(),
    })
}

/// Component after the last qualifier separator; the whole key when
/// unqualified.
fn trailing_component(key: &str) -> &str {
    key.rsplit_once(QUALIFIER).map_or(key, |(_, id)| id)
}

/// Outcome of one matching tier: no candidates fall through to the next
/// tier, one candidate resolves, several are ambiguous.
fn select(spec: &str, candidates: BTreeSet<&str>) -> Option<Result<String, ResolveError>> {
    match candidates.len() {
        0 => None,
        1 => candidates.into_iter().next().map(|key| Ok(key.to_string())),
        _ => Some(Err(ResolveError::Ambiguous {
            spec: spec.to_string(),
            candidates: candidates.into_iter().map(ToOwned::to_owned).collect(),
        })),
    }
}
