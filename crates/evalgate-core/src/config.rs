//! On-disk gate inputs: the eval configuration and the report index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed report index: report key (typically `provider/id`) to the entry
/// recorded when that model was last evaluated.
///
/// Entries stay raw JSON so a malformed row surfaces as a per-key
/// diagnostic instead of failing the whole load.
pub type ReportIndex = Map<String, Value>;

/// Gate configuration, the gate-facing subset of the eval runner's config
/// file. Runner-side sections (model definitions, defaults) pass through
/// unrecognized and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required_models: Option<Vec<String>>,
}

impl EvalConfig {
    /// Required model specs, with an absent or `null` field reading as empty.
    pub fn required_models(&self) -> &[String] {
        self.required_models.as_deref().unwrap_or_default()
    }
}
