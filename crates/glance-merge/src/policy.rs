//! Merge policy variants.
//!
//! Platform compatibility differences are confined to a small capability
//! set. The core algorithm in [`crate::merger`] is parameterized over a
//! [`MergePolicy`] value and never duplicated across variants.

use glance_core::{Action, FeatureType, Target};

use crate::blank::create_blank_target;
use crate::feed::Page;
use crate::queue::ActionQueue;

/// Capability set distinguishing the merge variants.
///
/// All methods have defaults matching the regular merger; variants override
/// only what differs.
pub trait MergePolicy {
    /// Feature type applied to synthetic blank targets.
    fn blank_feature_type(&self) -> FeatureType {
        FeatureType::Weather
    }

    /// Siphon dedicated pages off the front of the queue before ordinary
    /// negotiation begins.
    fn extract_leading_pages(&self, _queue: &mut ActionQueue) -> Vec<Page> {
        Vec::new()
    }

    /// Final rewrite applied to every ordinary and padded page.
    fn normalize_page(&self, page: Page) -> Page {
        page
    }
}

/// Default merger for native surfaces: weather-tagged blank pages, which
/// the system UI wraps in the default date text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPolicy;

impl MergePolicy for RegularPolicy {}

/// Merger for generic clients that don't special-case weather cards:
/// blank pages stay untagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedPolicy;

impl MergePolicy for UndefinedPolicy {
    fn blank_feature_type(&self) -> FeatureType {
        FeatureType::Undefined
    }
}

/// Merger for devices with a dedicated split smartspace slot on the lock
/// screen.
///
/// The platform allows exactly one weather page there: the first queued
/// action is reserved into a dedicated single-action weather page before
/// negotiation, and any weather-tagged page produced afterwards is demoted
/// to a blank untagged one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitPolicy;

impl MergePolicy for SplitPolicy {
    fn blank_feature_type(&self) -> FeatureType {
        FeatureType::Undefined
    }

    fn extract_leading_pages(&self, queue: &mut ActionQueue) -> Vec<Page> {
        let entry = match queue.pop() {
            Some(entry) => entry,
            None => return Vec::new(),
        };
        let mut action = entry.action;
        if action.title.is_empty() {
            // The dedicated slot renders the title line only
            if let Some(subtitle) = action.subtitle.clone() {
                action.title = subtitle;
            }
        }
        tracing::debug!("Reserved action {} into the split slot", action.id);
        let target = create_blank_target(
            FeatureType::Weather,
            action.clone(),
            Some(action),
            None,
        );
        vec![Page {
            target,
            source: None,
            action_refs: vec![entry.source],
        }]
    }

    fn normalize_page(&self, page: Page) -> Page {
        if !page.target.is_weather() {
            return page;
        }
        // A second weather page is platform-disallowed: rebuild it as a
        // blank untagged page, reusing its slots and template.
        let Target {
            header_action,
            base_action,
            template_data,
            ..
        } = page.target;
        let target = create_blank_target(
            self.blank_feature_type(),
            header_action.unwrap_or_else(Action::empty),
            base_action,
            template_data,
        );
        Page {
            target,
            source: None,
            action_refs: page.action_refs,
        }
    }
}
