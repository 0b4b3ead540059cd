//! Core types for the Glance smart space host.
//!
//! This crate contains shared data structures used across all Glance crates:
//! - Action and Target card types
//! - Template sub-item payloads
//! - Feature type tags, rendering surfaces and layout hints
//! - Untyped extras with protected-key stripping
//! - Merge configuration types
//! - Error types

mod action;
mod config;
mod error;
mod extras;
mod feature;
mod source;
mod surface;
mod target;
mod template;
mod text;

pub use action::Action;
pub use config::MergeSettings;
pub use error::ModelError;
pub use extras::{
    Extras, KEY_ABOUT_INTENT, KEY_FEEDBACK_INTENT, KEY_HIDE_SUBTITLE_ON_AOD,
    KEY_HIDE_TITLE_ON_AOD, KEY_SHOW_ON_LOCKSCREEN, KEY_WEATHER_STATE_ICON,
    KEY_WEATHER_TEMPERATURE, KEY_WEATHER_USE_CELSIUS, PROTECTED_EXTRAS, WEATHER_EXTRAS,
};
pub use feature::FeatureType;
pub use source::SourceRef;
pub use surface::{OpenMode, Surface};
pub use target::Target;
pub use template::{SubItem, TapAction, TemplateData};
pub use text::{reformat_bullet, BULLET};
