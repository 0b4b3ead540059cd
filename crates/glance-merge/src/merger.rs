//! The merge pass.
//!
//! A single forward walk over the snapshot: uniqueness, policy pre-pass,
//! slot negotiation in arrival order, visibility filtering, padding, policy
//! post-pass. Pure and synchronous; malformed input degrades by omission,
//! never by error.

use glance_core::OpenMode;

use crate::blank::pad_remaining_actions;
use crate::convert::{
    can_take_base_action, can_take_header_action, convert_if_needed, has_no_visible_content,
    reformat_target_bullet, with_previous_base_extras,
};
use crate::feed::{ActionFeed, Page, QueuedAction, SourcedTarget, TargetFeed};
use crate::policy::MergePolicy;
use crate::queue::ActionQueue;
use crate::unique::{make_actions_unique, make_targets_unique};

/// Merge plugin feeds into the final page list.
///
/// Output order is fixed: the policy's leading pages, then ordinary pages
/// in original target order (minus hidden ones), then padding pages.
/// Ordinary and padding pages run through the policy's normalizer.
///
/// `open_mode` is a layout hint the caller threads through to page sizing;
/// negotiation never reads it.
pub fn merge_targets_and_actions(
    policy: &dyn MergePolicy,
    target_feeds: &[TargetFeed],
    action_feeds: &[ActionFeed],
    open_mode: OpenMode,
) -> Vec<Page> {
    let targets = make_targets_unique(target_feeds);
    let actions = make_actions_unique(action_feeds);
    tracing::debug!(
        "Merging {} targets with {} actions (open mode: {:?})",
        targets.len(),
        actions.len(),
        open_mode
    );
    let mut queue = ActionQueue::new(actions);
    let mut pages = policy.extract_leading_pages(&mut queue);
    let mut merged = Vec::new();
    for entry in targets {
        if let Some(page) = merge_one_target(&mut queue, entry) {
            merged.push(page);
        }
    }
    pad_remaining_actions(&mut merged, &mut queue, policy.blank_feature_type());
    pages.extend(merged.into_iter().map(|page| policy.normalize_page(page)));
    pages
}

/// Negotiate both slots for one target and emit its page, or `None` when
/// the target asked to be hidden and ended up with nothing to show.
fn merge_one_target(queue: &mut ActionQueue, entry: SourcedTarget) -> Option<Page> {
    let SourcedTarget { mut target, source } = entry;
    let mut action_refs = Vec::new();

    if can_take_header_action(&target, queue.peek()) {
        if let Some(QueuedAction {
            mut action,
            source: action_source,
        }) = queue.pop()
        {
            target = convert_if_needed(target, &mut action);
            // Keep the title the target set when forcing two actions
            if action.title.is_empty() {
                if let Some(previous) = target.header_action.as_ref() {
                    action.title = previous.title.clone();
                }
            }
            let sub_item = action.sub_item.clone();
            if let Some(template) = target.template_data.as_mut() {
                template.header_item = sub_item;
            }
            target.header_action = Some(action);
            action_refs.push(action_source);
        }
    }

    if can_take_base_action(&target, queue.peek()) {
        if let Some(QueuedAction {
            mut action,
            source: action_source,
        }) = queue.pop()
        {
            target = convert_if_needed(target, &mut action);
            let action = with_previous_base_extras(action, &target);
            let sub_item = action.sub_item.clone();
            if let Some(template) = target.template_data.as_mut() {
                template.base_item = sub_item;
            }
            target.base_action = Some(action);
            action_refs.push(action_source);
        }
    }

    if target.hide_if_no_actions && has_no_visible_content(&target) {
        tracing::debug!("Hiding target {} with no visible content", target.id);
        return None;
    }
    let target = reformat_target_bullet(target, action_refs.len());
    Some(Page {
        target,
        source: Some(source),
        action_refs,
    })
}
