//! Target cards supplied by plugin feeds.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::feature::FeatureType;
use crate::template::TemplateData;

/// A card rendered as one carousel page, exposing a header and a base
/// action slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Identifier unique within the owning feed. The merge engine prefixes
    /// it with the feed's source key to enforce global uniqueness.
    pub id: String,

    /// Feature tag selecting layout special-casing.
    #[serde(default)]
    pub feature_type: FeatureType,

    /// Action attached to the header slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_action: Option<Action>,

    /// Action attached to the base slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_action: Option<Action>,

    /// Structured template payload, used by clients that render templated
    /// cards instead of the legacy header/base text pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<TemplateData>,

    /// Lets the merge engine fill both slots with queued actions. Only
    /// honoured for [`FeatureType::Undefined`] targets.
    #[serde(default)]
    pub can_take_two_actions: bool,

    /// Drop this target from the output if negotiation leaves it with no
    /// visible content. For targets intended purely as action carriers,
    /// such as date or greeting cards.
    #[serde(default)]
    pub hide_if_no_actions: bool,

    /// Whether the user may dismiss this target.
    #[serde(default = "default_dismissible")]
    pub dismissible: bool,
}

fn default_dismissible() -> bool {
    true
}

impl Target {
    /// Create a new target with required fields.
    pub fn new(id: impl Into<String>, feature_type: FeatureType) -> Self {
        Self {
            id: id.into(),
            feature_type,
            header_action: None,
            base_action: None,
            template_data: None,
            can_take_two_actions: false,
            hide_if_no_actions: false,
            dismissible: true,
        }
    }

    /// Whether this target carries the weather tag.
    pub fn is_weather(&self) -> bool {
        self.feature_type.is_weather()
    }
}
