//! Template payloads for structured card rendering.

use serde::{Deserialize, Serialize};

use crate::extras::Extras;
use crate::text::reformat_bullet;

/// Tap behaviour attached to a structured sub-item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TapAction {
    /// Id of the action this tap dispatches to.
    pub id: String,

    /// Extras forwarded with the tap.
    #[serde(default)]
    pub extras: Extras,
}

/// Structured content for one slot of a templated card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubItem {
    /// Display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Icon identifier (path, emoji, or named icon).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Tap behaviour for this sub-item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<TapAction>,
}

impl SubItem {
    /// True if the text is absent or blank.
    pub fn has_empty_text(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
    }

    /// Copy with the text's separator glyph normalized.
    pub fn reformat_bullet(mut self, single: bool) -> Self {
        if let Some(text) = self.text.take() {
            self.text = Some(reformat_bullet(&text, single));
        }
        self
    }
}

/// Structured template data for a card: a header sub-item and a base
/// sub-item mirroring the two action slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    /// Sub-item rendered in the header slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_item: Option<SubItem>,

    /// Sub-item rendered in the base slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_item: Option<SubItem>,
}

impl TemplateData {
    /// Create template data from the two slot items.
    pub fn new(header_item: Option<SubItem>, base_item: Option<SubItem>) -> Self {
        Self {
            header_item,
            base_item,
        }
    }
}
