//! Value Lifecycle Integration Tests
//!
//! Tests for the path a field value takes through the host:
//! - Empty values and emptiness
//! - Input coercion and structural checks
//! - Display names and sort keys
//! - Hash conversion at the persistence boundary
//! - Sharing one field type across threads

mod common;

use common::TestFixture;
use enhanced_selection::{
    Error, FieldInput, FieldType, JsonCodec, SelectionFieldType, SelectionValue,
};
use serde_json::json;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Emptiness
// =============================================================================

#[test]
fn test_empty_value_is_empty() {
    let fixture = TestFixture::new();
    let field_type = &fixture.field_type;

    assert!(field_type.is_empty_value(&field_type.empty_value()));
    assert!(!field_type.is_empty_value(&SelectionValue::new(["x"])));
}

// =============================================================================
// Coercion and Structure
// =============================================================================

#[test]
fn test_coerce_bare_integer() {
    let fixture = TestFixture::new();

    let coerced = fixture.field_type.coerce_input(FieldInput::from(5));

    assert_eq!(coerced, FieldInput::Value(SelectionValue::new(["5"])));
    assert!(fixture.field_type.check_structure(&coerced).is_ok());
}

#[test]
fn test_coerce_passes_value_through() {
    let fixture = TestFixture::new();
    let value = SelectionValue::new(["a", "b"]);

    let coerced = fixture.field_type.coerce_input(value.clone().into());

    assert_eq!(coerced, FieldInput::Value(value));
}

#[test]
fn test_unwrapped_scalar_fails_structure_check() {
    let fixture = TestFixture::new();

    let err = fixture
        .field_type
        .check_structure(&FieldInput::Raw(json!("red")))
        .unwrap_err();

    assert!(err.is_structure_error());
    match err {
        Error::InvalidValueStructure {
            property,
            expected,
            actual,
        } => {
            assert_eq!(property, "identifiers");
            assert_eq!(expected, "array");
            assert_eq!(actual, "string");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_string_identifier_needs_scalar_input() {
    let fixture = TestFixture::new();

    let value = fixture.field_type.accept_input(FieldInput::from("red")).unwrap();
    assert_eq!(value.identifiers(), ["red"]);

    let coerced = fixture.field_type.coerce_input(FieldInput::Raw(json!("red")));
    assert_eq!(coerced, FieldInput::Raw(json!("red")));

    let result = fixture.field_type.accept_input(FieldInput::Raw(json!("red")));
    assert!(matches!(
        result,
        Err(Error::InvalidValueStructure { ref actual, .. }) if actual == "string"
    ));
}

#[test]
fn test_accept_input_aborts_on_bad_structure() {
    let fixture = TestFixture::new();

    let result = fixture
        .field_type
        .accept_input(FieldInput::Raw(json!({ "identifiers": "red" })));

    assert!(matches!(result, Err(Error::InvalidValueStructure { .. })));
}

#[test]
fn test_accept_input_from_form_payload() {
    let fixture = TestFixture::new();

    let value = fixture
        .field_type
        .accept_input(FieldInput::Raw(json!(["blue", "red"])))
        .unwrap();

    assert_eq!(value.identifiers(), ["blue", "red"]);
}

// =============================================================================
// Names and Sort Keys
// =============================================================================

#[test]
fn test_display_name_joins_with_spaces() {
    let fixture = TestFixture::new();
    let value = SelectionValue::new(["a", "b", "c"]);

    assert_eq!(fixture.field_type.name(&value), "a b c");
}

#[test]
fn test_sort_key_ignores_delimiter() {
    let fixture = TestFixture::new();
    let value = SelectionValue::new(["b", "a"]);

    assert_eq!(fixture.field_type.sort_key(&value), "b a");
    assert_eq!(
        fixture.field_type.sort_key(&value),
        fixture.field_type.name(&value)
    );
}

// =============================================================================
// Hash Conversion
// =============================================================================

#[test]
fn test_hash_roundtrip_keeps_order() {
    let fixture = TestFixture::new();
    let identifiers = vec!["teal".to_string(), "red".to_string(), "green".to_string()];

    let value = fixture.field_type.from_hash(Some(identifiers.clone()));
    let hash = fixture.field_type.to_hash(&value);

    assert_eq!(hash, Some(identifiers));
}

#[test]
fn test_absence_sentinel() {
    let fixture = TestFixture::new();
    let field_type = &fixture.field_type;

    assert_eq!(field_type.to_hash(&field_type.empty_value()), None);
    assert_eq!(field_type.from_hash(None), field_type.empty_value());
}

#[test]
fn test_encoded_hash_roundtrip() {
    let fixture = TestFixture::new();
    let codec = JsonCodec::pretty();
    let value = SelectionValue::new(["one", "two"]);

    let text = fixture.field_type.encode_hash(&codec, &value).unwrap();
    let decoded = fixture.field_type.decode_hash(&codec, &text).unwrap();

    assert_eq!(decoded, value);
    assert_eq!(
        fixture
            .field_type
            .encode_hash(&codec, &SelectionValue::empty())
            .unwrap(),
        "null"
    );
}

#[test]
fn test_decode_malformed_hash() {
    let fixture = TestFixture::new();

    let result = fixture
        .field_type
        .decode_hash(&JsonCodec::new(), r#"{"identifiers": 3}"#);

    assert!(matches!(result, Err(Error::Parse(_))));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_shared_field_type_across_threads() {
    let field_type = Arc::new(SelectionFieldType::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let field_type = Arc::clone(&field_type);
            thread::spawn(move || {
                let value = field_type.accept_input(FieldInput::from(i)).unwrap();
                field_type.to_hash(&value)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(vec![i.to_string()]));
    }
}
