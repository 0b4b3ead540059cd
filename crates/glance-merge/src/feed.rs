//! Input feeds and output pages.

use serde::{Deserialize, Serialize};

use glance_core::{Action, SourceRef, Target};

/// One plugin's targets, paired with its provenance handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetFeed {
    /// Targets in display order. `None` contributes nothing.
    pub targets: Option<Vec<Target>>,

    /// Feed that produced them.
    pub source: SourceRef,
}

impl TargetFeed {
    /// Create a feed from a source and its targets.
    pub fn new(source: impl Into<SourceRef>, targets: Option<Vec<Target>>) -> Self {
        Self {
            targets,
            source: source.into(),
        }
    }
}

/// One plugin's actions, paired with its provenance handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionFeed {
    /// Actions in display order. `None` contributes nothing.
    pub actions: Option<Vec<Action>>,

    /// Feed that produced them.
    pub source: SourceRef,
}

impl ActionFeed {
    /// Create a feed from a source and its actions.
    pub fn new(source: impl Into<SourceRef>, actions: Option<Vec<Action>>) -> Self {
        Self {
            actions,
            source: source.into(),
        }
    }
}

/// A target flattened out of its feed, tagged with its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedTarget {
    pub target: Target,
    pub source: SourceRef,
}

/// An action waiting in the merge queue, tagged with its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub action: Action,
    pub source: SourceRef,
}

/// One merged carousel page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Final target for rendering.
    pub target: Target,

    /// Feed that owns the page. `None` for synthetic pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,

    /// Sources of every action consumed into this page, in slot order.
    /// At most two entries.
    pub action_refs: Vec<SourceRef>,
}
