//! Slot acceptance and conversion rules.
//!
//! Each target is offered the current queue front for its header slot,
//! then for its base slot. Acceptance is decided here; an accepted action
//! is run through [`convert_if_needed`] before it is assigned, which keeps
//! protected extras out of plugin reach and bridges structured-only actions
//! into template-less weather targets.

use glance_core::{Action, FeatureType, SubItem, Target, TemplateData};

use crate::feed::QueuedAction;

/// Whether `target` accepts the queued action for its header slot.
pub(crate) fn can_take_header_action(target: &Target, candidate: Option<&QueuedAction>) -> bool {
    if candidate.is_none() {
        return false;
    }
    // Override specified by the target
    if target.can_take_two_actions && target.feature_type == FeatureType::Undefined {
        return true;
    }
    if target.feature_type == FeatureType::Weather {
        let header_subtitle_empty = target
            .header_action
            .as_ref()
            .map_or(true, Action::has_empty_subtitle);
        let no_header_item = target
            .template_data
            .as_ref()
            .map_or(true, |template| template.header_item.is_none());
        return header_subtitle_empty && no_header_item;
    }
    false
}

/// Whether `target` accepts the queued action for its base slot.
pub(crate) fn can_take_base_action(target: &Target, candidate: Option<&QueuedAction>) -> bool {
    let action = match candidate {
        Some(entry) => &entry.action,
        None => return false,
    };
    // Override specified by the target
    if target.can_take_two_actions && target.feature_type == FeatureType::Undefined {
        return true;
    }
    let structured_only = action.sub_item.is_some() && action.has_empty_subtitle();
    if structured_only && target.template_data.is_none() {
        // A structured-only action can only be converted into a weather
        // target; any other template-less target is assumed incompatible.
        return target.feature_type == FeatureType::Weather;
    }
    let base_id_empty = target
        .base_action
        .as_ref()
        .map_or(true, |action| action.id.is_empty());
    let base_item_text_empty = target
        .template_data
        .as_ref()
        .and_then(|template| template.base_item.as_ref())
        .map_or(true, SubItem::has_empty_text);
    base_id_empty && base_item_text_empty
}

/// Prepare an accepted action and its target for slot assignment.
///
/// Strips the protected extras the feed must not set, carries the target's
/// existing base extras over the incoming ones (existing entries win, stale
/// weather payload on the incoming side is cleared first), and synthesizes
/// template data when a structured-only action meets a template-less
/// weather target.
pub(crate) fn convert_if_needed(mut target: Target, action: &mut Action) -> Target {
    let structured_only = action.sub_item.is_some() && action.has_empty_subtitle();
    let target_has_no_template = target.template_data.is_none();
    action.extras.strip_protected();
    let existing = target
        .base_action
        .as_ref()
        .map(|base| base.extras.clone())
        .filter(|extras| !extras.is_empty());
    if let Some(existing) = existing {
        action.extras.clear_weather_payload();
        action.extras.overlay(&existing);
    }
    if structured_only && target_has_no_template && target.is_weather() {
        target.template_data = Some(generate_template_data(&target));
    }
    target
}

/// Template synthesized from the target's current slot actions.
fn generate_template_data(target: &Target) -> TemplateData {
    TemplateData::new(
        target.header_action.as_ref().map(Action::generate_sub_item),
        target.base_action.as_ref().map(Action::generate_sub_item),
    )
}

/// New base action carrying over the target's previous base extras, which
/// take precedence over the incoming action's own entries. Keeps dismiss
/// and feedback behaviour intact when the base slot is overwritten.
pub(crate) fn with_previous_base_extras(mut action: Action, target: &Target) -> Action {
    if let Some(previous) = target.base_action.as_ref() {
        action.extras.overlay(&previous.extras);
    }
    action
}

/// True when nothing on the target would render: header and base subtitles
/// and both template item texts are all empty.
pub(crate) fn has_no_visible_content(target: &Target) -> bool {
    let header_empty = target
        .header_action
        .as_ref()
        .map_or(true, Action::has_empty_subtitle);
    let base_empty = target
        .base_action
        .as_ref()
        .map_or(true, Action::has_empty_subtitle);
    let template = target.template_data.as_ref();
    let header_item_empty = template
        .and_then(|t| t.header_item.as_ref())
        .map_or(true, SubItem::has_empty_text);
    let base_item_empty = template
        .and_then(|t| t.base_item.as_ref())
        .map_or(true, SubItem::has_empty_text);
    header_empty && base_empty && header_item_empty && base_item_empty
}

/// Normalize the separator glyph on the header texts once the page's final
/// action count is known.
pub(crate) fn reformat_target_bullet(mut target: Target, consumed: usize) -> Target {
    let single = consumed == 1;
    target.header_action = target
        .header_action
        .map(|action| action.reformat_bullet(single));
    if let Some(template) = target.template_data.as_mut() {
        template.header_item = template
            .header_item
            .take()
            .map(|item| item.reformat_bullet(single));
    }
    target
}
