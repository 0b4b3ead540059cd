//! Feature type tags for targets.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Closed set of card feature types.
///
/// The tag selects layout and behavioural special-casing in the merge
/// engine and the renderer. Most plugin cards use [`FeatureType::Undefined`];
/// [`FeatureType::Weather`] is the one tag the slot rules treat specially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    #[default]
    Undefined,
    Weather,
    Calendar,
    Commute,
    Flight,
    Reminder,
    Alarm,
    Sports,
    Media,
    Timer,
}

impl FeatureType {
    /// The platform's integer wire code for this tag.
    pub fn code(self) -> u32 {
        match self {
            FeatureType::Undefined => 0,
            FeatureType::Weather => 1,
            FeatureType::Calendar => 2,
            FeatureType::Commute => 3,
            FeatureType::Flight => 4,
            FeatureType::Reminder => 6,
            FeatureType::Alarm => 7,
            FeatureType::Sports => 9,
            FeatureType::Media => 15,
            FeatureType::Timer => 21,
        }
    }

    /// Decode a platform integer wire code.
    pub fn from_code(code: u32) -> Result<Self, ModelError> {
        match code {
            0 => Ok(FeatureType::Undefined),
            1 => Ok(FeatureType::Weather),
            2 => Ok(FeatureType::Calendar),
            3 => Ok(FeatureType::Commute),
            4 => Ok(FeatureType::Flight),
            6 => Ok(FeatureType::Reminder),
            7 => Ok(FeatureType::Alarm),
            9 => Ok(FeatureType::Sports),
            15 => Ok(FeatureType::Media),
            21 => Ok(FeatureType::Timer),
            other => Err(ModelError::UnknownFeatureType(other)),
        }
    }

    /// Whether this is the weather tag.
    pub fn is_weather(self) -> bool {
        matches!(self, FeatureType::Weather)
    }
}
