//! Untyped extras carried by actions.
//!
//! Extras are string-keyed JSON values that ride along with an action for
//! host consumption. A fixed subset of keys drives protected lock-screen,
//! always-on-display and feedback behaviour; those must only ever be set by
//! the host, never accepted from a plugin feed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Shows the owning target on the lock screen.
pub const KEY_SHOW_ON_LOCKSCREEN: &str = "show_on_lockscreen";

/// Hides the owning target's title on the always-on display.
pub const KEY_HIDE_TITLE_ON_AOD: &str = "hide_title_on_aod";

/// Hides the owning target's subtitle on the always-on display.
pub const KEY_HIDE_SUBTITLE_ON_AOD: &str = "hide_subtitle_on_aod";

/// Attaches an "about this content" entry to the target's popup.
pub const KEY_ABOUT_INTENT: &str = "about_intent";

/// Attaches a "feedback" entry to the target's popup.
pub const KEY_FEEDBACK_INTENT: &str = "feedback_intent";

/// Host-internal extras keys, stripped from any plugin-supplied action
/// before it is placed into a slot.
pub const PROTECTED_EXTRAS: [&str; 5] = [
    KEY_SHOW_ON_LOCKSCREEN,
    KEY_HIDE_TITLE_ON_AOD,
    KEY_HIDE_SUBTITLE_ON_AOD,
    KEY_ABOUT_INTENT,
    KEY_FEEDBACK_INTENT,
];

/// Weather state icon identifier.
pub const KEY_WEATHER_STATE_ICON: &str = "weather_state_icon";

/// Weather temperature value.
pub const KEY_WEATHER_TEMPERATURE: &str = "weather_temperature";

/// Whether the temperature is in celsius.
pub const KEY_WEATHER_USE_CELSIUS: &str = "weather_use_celsius";

/// Weather payload keys derived from a complication's weather data. They go
/// stale when a slot is overwritten, so they are cleared before an extras
/// merge.
pub const WEATHER_EXTRAS: [&str; 3] = [
    KEY_WEATHER_STATE_ICON,
    KEY_WEATHER_TEMPERATURE,
    KEY_WEATHER_USE_CELSIUS,
];

/// String-keyed untyped values attached to an action.
///
/// Backed by an ordered map so serialized output and equality checks are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extras(BTreeMap<String, Value>);

impl Extras {
    /// Create an empty extras map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a value, replacing any previous entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Remove a key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Remove the host-internal keys a plugin must not set.
    pub fn strip_protected(&mut self) {
        for key in PROTECTED_EXTRAS {
            self.0.remove(key);
        }
    }

    /// Remove the weather payload keys.
    pub fn clear_weather_payload(&mut self) {
        for key in WEATHER_EXTRAS {
            self.0.remove(key);
        }
    }

    /// Copy `other`'s entries over this map; `other` wins on conflicts.
    pub fn overlay(&mut self, other: &Extras) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Extras {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
