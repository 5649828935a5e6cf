//! Common test utilities for enhanced-selection integration tests
//!
//! Provides a shared field type fixture and settings helpers.

#![allow(dead_code)]

use enhanced_selection::SelectionFieldType;
use serde_json::{Map, Value, json};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture holding a field type bound to the shared schema
pub struct TestFixture {
    pub field_type: SelectionFieldType,
}

impl TestFixture {
    /// Create a new fixture; set `RUST_LOG=debug` to see library logs
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            field_type: SelectionFieldType::new(),
        }
    }
}

// =============================================================================
// Settings Helpers
// =============================================================================

/// Turn a `json!` object literal into a settings map
pub fn settings(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("settings fixture must be an object, got {other}"),
    }
}

/// A complete, correctly typed settings map
pub fn full_settings() -> Map<String, Value> {
    settings(json!({
        "isMultiselect": true,
        "delimiter": ", ",
        "query": "SELECT identifier, name FROM colours",
        "basicOptions": ["red", "green"],
        "dbOptions": ["teal"],
        "options": ["red", "green", "teal"],
        "optionsByIdentifier": {
            "red": "Red",
            "green": "Green",
            "teal": "Teal"
        }
    }))
}
