//! Synthetic blank pages for leftover actions.
//!
//! Once every target has had its turn, whatever is still queued is drained
//! two actions at a time into blank targets. The renderer surrounds these
//! with the default date text.

use uuid::Uuid;

use glance_core::{Action, FeatureType, Target, TemplateData};

use crate::feed::Page;
use crate::queue::ActionQueue;

/// Prefix applied to synthetic blank target ids. The exclamation mark can
/// never appear in a feed source key, so no plugin can forge a blank id.
pub const BLANK_TARGET_PREFIX: &str = "!blank";

/// Build a blank target hosting one or two leftover actions.
///
/// If `base` is absent an empty placeholder fills the slot. An existing
/// template may be carried over, as when a demoted page is rebuilt; its
/// items are used only where the actions carry no sub-item of their own.
pub fn create_blank_target(
    feature_type: FeatureType,
    header: Action,
    base: Option<Action>,
    template: Option<TemplateData>,
) -> Target {
    let single = base.is_none();
    let mut base = base;
    if let Some(base) = base.as_mut() {
        // A leftover complication can't inject protected flags either
        base.extras.strip_protected();
    }
    let template = template.unwrap_or_default();
    let header_item = header
        .sub_item
        .clone()
        .or(template.header_item)
        .unwrap_or_else(|| header.generate_sub_item().reformat_bullet(single));
    let base_item = base
        .as_ref()
        .and_then(|action| action.sub_item.clone())
        .or(template.base_item)
        .or_else(|| base.as_ref().map(Action::generate_sub_item));
    Target {
        id: format!("{}_{}", BLANK_TARGET_PREFIX, Uuid::new_v4()),
        feature_type,
        header_action: Some(header.reformat_bullet(single)),
        base_action: Some(base.unwrap_or_else(Action::empty)),
        template_data: Some(TemplateData::new(Some(header_item), base_item)),
        can_take_two_actions: false,
        hide_if_no_actions: false,
        dismissible: false,
    }
}

/// Drain the remaining queue into blank pages, two actions per page.
pub(crate) fn pad_remaining_actions(
    pages: &mut Vec<Page>,
    queue: &mut ActionQueue,
    blank_feature_type: FeatureType,
) {
    let leftover = queue.remaining();
    let mut padded = 0;
    while let Some(first) = queue.pop() {
        let second = queue.pop();
        let mut action_refs = vec![first.source];
        let (second_action, second_source) = match second {
            Some(entry) => (Some(entry.action), Some(entry.source)),
            None => (None, None),
        };
        action_refs.extend(second_source);
        let target = create_blank_target(blank_feature_type, first.action, second_action, None);
        pages.push(Page {
            target,
            source: None,
            action_refs,
        });
        padded += 1;
    }
    if padded > 0 {
        tracing::debug!("Padded {} leftover actions into {} blank pages", leftover, padded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::QueuedAction;
    use glance_core::{SubItem, KEY_SHOW_ON_LOCKSCREEN};
    use serde_json::json;

    fn action_with_subtitle(id: &str, subtitle: &str) -> Action {
        let mut action = Action::new(id, id.to_uppercase());
        action.subtitle = Some(subtitle.to_string());
        action
    }

    #[test]
    fn test_single_action_blank() {
        let target = create_blank_target(
            FeatureType::Weather,
            action_with_subtitle("a", "· 10:30"),
            None,
            None,
        );
        assert!(target.id.starts_with(BLANK_TARGET_PREFIX));
        assert!(!target.dismissible);
        assert_eq!(target.feature_type, FeatureType::Weather);
        // Single action pages drop the separator glyph
        assert_eq!(
            target.header_action.unwrap().subtitle.as_deref(),
            Some("10:30")
        );
        // The base slot is filled with a placeholder
        assert_eq!(target.base_action.unwrap(), Action::empty());
    }

    #[test]
    fn test_two_action_blank() {
        let target = create_blank_target(
            FeatureType::Undefined,
            action_with_subtitle("a", "· 10:30"),
            Some(action_with_subtitle("b", "21°")),
            None,
        );
        assert_eq!(
            target.header_action.unwrap().subtitle.as_deref(),
            Some("· 10:30")
        );
        assert_eq!(target.base_action.unwrap().id, "b");
        let template = target.template_data.unwrap();
        assert_eq!(template.header_item.unwrap().text.as_deref(), Some("· 10:30"));
        assert_eq!(template.base_item.unwrap().text.as_deref(), Some("21°"));
    }

    #[test]
    fn test_base_protected_extras_stripped() {
        let mut base = action_with_subtitle("b", "21°");
        base.extras.insert(KEY_SHOW_ON_LOCKSCREEN, json!(true));
        let target = create_blank_target(
            FeatureType::Weather,
            action_with_subtitle("a", "10:30"),
            Some(base),
            None,
        );
        assert!(!target
            .base_action
            .unwrap()
            .extras
            .contains(KEY_SHOW_ON_LOCKSCREEN));
    }

    #[test]
    fn test_carried_template_fills_missing_sub_items() {
        let carried = TemplateData::new(
            Some(SubItem {
                text: Some("carried header".to_string()),
                ..Default::default()
            }),
            Some(SubItem {
                text: Some("carried base".to_string()),
                ..Default::default()
            }),
        );
        let mut header = action_with_subtitle("a", "10:30");
        header.sub_item = Some(SubItem {
            text: Some("own header".to_string()),
            ..Default::default()
        });
        let target =
            create_blank_target(FeatureType::Undefined, header, None, Some(carried));
        let template = target.template_data.unwrap();
        // The action's own sub-item wins; the carried base item fills the gap
        assert_eq!(
            template.header_item.unwrap().text.as_deref(),
            Some("own header")
        );
        assert_eq!(
            template.base_item.unwrap().text.as_deref(),
            Some("carried base")
        );
    }

    #[test]
    fn test_pad_odd_queue() {
        let mut queue = ActionQueue::new(vec![
            QueuedAction {
                action: action_with_subtitle("a", "one"),
                source: "one".into(),
            },
            QueuedAction {
                action: action_with_subtitle("b", "two"),
                source: "two".into(),
            },
            QueuedAction {
                action: action_with_subtitle("c", "three"),
                source: "three".into(),
            },
        ]);
        let mut pages = Vec::new();
        pad_remaining_actions(&mut pages, &mut queue, FeatureType::Weather);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].action_refs.len(), 2);
        assert_eq!(pages[1].action_refs.len(), 1);
        assert!(pages.iter().all(|page| page.source.is_none()));
        assert!(queue.is_empty());
    }
}
