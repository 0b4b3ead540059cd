//! Provenance handles for plugin feeds.

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Opaque handle identifying which plugin feed produced an item.
///
/// The key is the feed's package/authority string. It is carried through
/// the merge into output pages so hosts can report provenance and route
/// dismissals back to the owning plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef(String);

impl SourceRef {
    /// Create a source reference from a feed key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The feed key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SourceRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SourceRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SourceRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
