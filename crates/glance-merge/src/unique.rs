//! Uniqueness stage.
//!
//! Plugin feeds are free to reuse ids; before negotiation every target and
//! action id is rewritten to embed its source key so unrelated feeds can
//! never collide. Feed order is preserved, and an absent feed payload
//! contributes nothing.

use glance_core::{SourceRef, Target};

use crate::feed::{ActionFeed, QueuedAction, SourcedTarget, TargetFeed};

/// Prefix marking an id rewritten by the uniqueness stage.
pub const UNIQUE_ID_PREFIX: &str = "glance_";

/// Rewrite an id to be globally unique for its source.
pub fn unique_id(original_id: &str, source: &SourceRef) -> String {
    format!("{}{}_{}", UNIQUE_ID_PREFIX, source.as_str(), original_id)
}

/// Recover the feed-local id from a rewritten one.
///
/// Hosts use this to route dismissals back to the owning plugin. Ids not
/// produced by [`unique_id`] pass through unchanged.
pub fn strip_unique_id(id: &str) -> &str {
    match id.strip_prefix(UNIQUE_ID_PREFIX) {
        Some(rest) => rest.split_once('_').map_or(rest, |(_, local)| local),
        None => id,
    }
}

/// Flatten target feeds in order, rewriting every target id.
pub fn make_targets_unique(feeds: &[TargetFeed]) -> Vec<SourcedTarget> {
    feeds
        .iter()
        .flat_map(|feed| {
            feed.targets.iter().flatten().map(|target| SourcedTarget {
                target: Target {
                    id: unique_id(&target.id, &feed.source),
                    ..target.clone()
                },
                source: feed.source.clone(),
            })
        })
        .collect()
}

/// Flatten action feeds in order, rewriting every action id.
pub fn make_actions_unique(feeds: &[ActionFeed]) -> Vec<QueuedAction> {
    feeds
        .iter()
        .flat_map(|feed| {
            feed.actions.iter().flatten().map(|action| {
                let mut action = action.clone();
                action.id = unique_id(&action.id, &feed.source);
                QueuedAction {
                    action,
                    source: feed.source.clone(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_core::{Action, FeatureType};

    #[test]
    fn test_identical_raw_ids_stay_distinct() {
        let feeds = vec![
            ActionFeed::new("com.example.one", Some(vec![Action::new("next", "A")])),
            ActionFeed::new("com.example.two", Some(vec![Action::new("next", "B")])),
        ];
        let unique = make_actions_unique(&feeds);
        assert_eq!(unique.len(), 2);
        assert_ne!(unique[0].action.id, unique[1].action.id);
    }

    #[test]
    fn test_order_preserved_and_absent_feed_skipped() {
        let feeds = vec![
            TargetFeed::new(
                "one",
                Some(vec![
                    Target::new("a", FeatureType::Undefined),
                    Target::new("b", FeatureType::Undefined),
                ]),
            ),
            TargetFeed::new("empty", None),
            TargetFeed::new("two", Some(vec![Target::new("c", FeatureType::Weather)])),
        ];
        let unique = make_targets_unique(&feeds);
        let ids: Vec<_> = unique
            .iter()
            .map(|entry| strip_unique_id(&entry.target.id))
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(unique[2].source, SourceRef::new("two"));
    }

    #[test]
    fn test_strip_unique_id() {
        let source = SourceRef::new("com.example.plugin");
        assert_eq!(strip_unique_id(&unique_id("card_1", &source)), "card_1");
        assert_eq!(strip_unique_id("untouched"), "untouched");
    }
}
