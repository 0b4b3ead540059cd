//! Surface-based policy selection.

use glance_core::{MergeSettings, Surface};

use crate::feed::{ActionFeed, Page, TargetFeed};
use crate::merger::merge_targets_and_actions;
use crate::policy::{RegularPolicy, SplitPolicy, UndefinedPolicy};

/// Merge feeds for a given surface.
///
/// Lock screens on devices with split smartspace get the split merger.
/// Otherwise `native` decides the blank tagging: native surfaces render
/// weather-tagged blanks inside the default date text, generic clients
/// get untagged ones.
pub fn merge_for_surface(
    target_feeds: &[TargetFeed],
    action_feeds: &[ActionFeed],
    settings: &MergeSettings,
    surface: Surface,
    native: bool,
) -> Vec<Page> {
    let open_mode = settings.open_mode_for(surface);
    if settings.split_smartspace && surface == Surface::Lockscreen {
        merge_targets_and_actions(&SplitPolicy, target_feeds, action_feeds, open_mode)
    } else if native {
        merge_targets_and_actions(&RegularPolicy, target_feeds, action_feeds, open_mode)
    } else {
        merge_targets_and_actions(&UndefinedPolicy, target_feeds, action_feeds, open_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_core::{Action, FeatureType};

    fn two_actions() -> Vec<ActionFeed> {
        let mut first = Action::new("first", "First");
        first.subtitle = Some("one".to_string());
        let mut second = Action::new("second", "Second");
        second.subtitle = Some("two".to_string());
        vec![ActionFeed::new("feed", Some(vec![first, second]))]
    }

    #[test]
    fn test_split_selected_on_lockscreen() {
        let settings = MergeSettings {
            split_smartspace: true,
            ..Default::default()
        };
        let pages = merge_for_surface(&[], &two_actions(), &settings, Surface::Lockscreen, true);
        // Dedicated split page first, then the leftover padded untagged
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].target.feature_type, FeatureType::Weather);
        assert_eq!(pages[0].action_refs.len(), 1);
        assert_eq!(pages[1].target.feature_type, FeatureType::Undefined);
    }

    #[test]
    fn test_split_not_selected_on_homescreen() {
        let settings = MergeSettings {
            split_smartspace: true,
            ..Default::default()
        };
        let pages = merge_for_surface(&[], &two_actions(), &settings, Surface::Homescreen, true);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].target.feature_type, FeatureType::Weather);
        assert_eq!(pages[0].action_refs.len(), 2);
    }

    #[test]
    fn test_generic_client_gets_untagged_blanks() {
        let settings = MergeSettings::default();
        let pages = merge_for_surface(&[], &two_actions(), &settings, Surface::Homescreen, false);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].target.feature_type, FeatureType::Undefined);
    }
}
