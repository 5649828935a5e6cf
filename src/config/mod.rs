//! Field settings configuration
//!
//! This module contains the configuration types of the selection field:
//! - `SettingsSchema` - Process-wide table of recognized settings and defaults
//! - `SettingDefinition` - One schema entry (name, declared type, default)
//! - `FieldSettings` - Typed view over a validated settings map

mod schema;
mod types;

pub use schema::{SettingDefinition, SettingType, SettingsSchema, keys};

pub use types::FieldSettings;
