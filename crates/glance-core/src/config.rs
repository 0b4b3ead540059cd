//! Merge configuration types.
//!
//! These represent the host settings that select a merge policy and the
//! layout hint per surface. Persistence belongs to the host; the types are
//! plain serde values.

use serde::{Deserialize, Serialize};

use crate::surface::{OpenMode, Surface};

/// Host configuration consumed when selecting a merge policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Device exposes a dedicated split smartspace slot on the lock screen.
    #[serde(default)]
    pub split_smartspace: bool,

    /// Layout hint for home screen pages.
    #[serde(default)]
    pub open_mode_home: OpenMode,

    /// Layout hint for lock screen pages.
    #[serde(default)]
    pub open_mode_lock: OpenMode,
}

impl MergeSettings {
    /// The layout hint for the given surface.
    pub fn open_mode_for(&self, surface: Surface) -> OpenMode {
        match surface {
            Surface::Homescreen => self.open_mode_home,
            Surface::Lockscreen => self.open_mode_lock,
        }
    }
}
