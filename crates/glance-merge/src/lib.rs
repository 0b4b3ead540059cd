//! Merge engine for the Glance smart space host.
//!
//! Combines independently-produced plugin targets and actions into the
//! final page carousel:
//! - Uniqueness stage preventing id collisions between feeds
//! - FIFO slot negotiation for header and base actions
//! - Padding of leftover actions into synthetic blank pages
//! - Pluggable policies for platform compatibility variants
//!
//! The engine is a pure function from an input snapshot to a page list:
//! no I/O, no shared state between invocations, no failure path.

pub mod blank;
mod convert;
pub mod feed;
pub mod merger;
pub mod policy;
pub mod queue;
pub mod select;
pub mod unique;

pub use blank::{create_blank_target, BLANK_TARGET_PREFIX};
pub use feed::{ActionFeed, Page, QueuedAction, SourcedTarget, TargetFeed};
pub use merger::merge_targets_and_actions;
pub use policy::{MergePolicy, RegularPolicy, SplitPolicy, UndefinedPolicy};
pub use queue::ActionQueue;
pub use select::merge_for_surface;
pub use unique::{
    make_actions_unique, make_targets_unique, strip_unique_id, unique_id, UNIQUE_ID_PREFIX,
};

// Re-export core types for convenience
pub use glance_core::{
    Action, FeatureType, MergeSettings, OpenMode, SourceRef, Surface, Target, TemplateData,
};
