//! Rendering surfaces and layout hints.

use serde::{Deserialize, Serialize};

/// Surface a merged page list is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Homescreen,
    Lockscreen,
}

/// Layout hint for how padded pages open into the expanded space.
///
/// Consumed by the rendering host when sizing the carousel; slot
/// negotiation never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenMode {
    /// Padded pages never open the expanded space.
    Never,

    /// Padded pages open the expanded space when they carry extras.
    #[default]
    IfHasExtras,

    /// Padded pages always open the expanded space.
    Always,
}
