//! Loader policy

use serde::{Deserialize, Serialize};

/// How the record sanitizer treats unresolved or self references
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Fail on the first issue instead of nulling it out with a warning
    pub strict: bool,
}
