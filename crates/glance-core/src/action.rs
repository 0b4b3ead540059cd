//! Action items supplied by plugin feeds.

use serde::{Deserialize, Serialize};

use crate::extras::Extras;
use crate::template::{SubItem, TapAction};
use crate::text::reformat_bullet;

/// A small tappable content item, matched into target slots by the merge
/// engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Identifier unique within the owning feed. The merge engine prefixes
    /// it with the feed's source key to enforce global uniqueness.
    pub id: String,

    /// Primary display text.
    pub title: String,

    /// Secondary display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Icon identifier (path, emoji, or named icon).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Untyped extras for host consumption.
    #[serde(default)]
    pub extras: Extras,

    /// Structured payload used when the target renders a template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_item: Option<SubItem>,

    /// Skip the pending launch step when this action is invoked.
    #[serde(default)]
    pub skip_pending_launch: bool,
}

impl Action {
    /// Create a new action with required fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Placeholder filling an absent base slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the subtitle is absent or blank.
    pub fn has_empty_subtitle(&self) -> bool {
        self.subtitle.as_deref().map_or(true, str::is_empty)
    }

    /// Project this action into a structured sub-item.
    pub fn generate_sub_item(&self) -> SubItem {
        SubItem {
            text: self.subtitle.clone(),
            icon: self.icon.clone(),
            tap: Some(TapAction {
                id: self.id.clone(),
                extras: self.extras.clone(),
            }),
        }
    }

    /// Copy with the subtitle's separator glyph normalized.
    pub fn reformat_bullet(mut self, single: bool) -> Self {
        if let Some(subtitle) = self.subtitle.take() {
            self.subtitle = Some(reformat_bullet(&subtitle, single));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sub_item() {
        let mut action = Action::new("cal_next", "Next event");
        action.subtitle = Some("Standup at 10:00".to_string());
        action.icon = Some("calendar".to_string());

        let item = action.generate_sub_item();
        assert_eq!(item.text.as_deref(), Some("Standup at 10:00"));
        assert_eq!(item.icon.as_deref(), Some("calendar"));
        assert_eq!(item.tap.unwrap().id, "cal_next");
    }

    #[test]
    fn test_has_empty_subtitle() {
        assert!(Action::new("a", "A").has_empty_subtitle());
        let mut action = Action::new("a", "A");
        action.subtitle = Some(String::new());
        assert!(action.has_empty_subtitle());
        action.subtitle = Some("text".to_string());
        assert!(!action.has_empty_subtitle());
    }
}
