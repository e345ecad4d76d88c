//! Integration tests for variant creation, extraction, and casting.

use trellis_variant::{Scalar, TypeCode, Variant, VariantError, cast, create, extract, extract_as};

// =============================================================================
// Creation
// =============================================================================

#[test]
fn create_int_from_value() {
    let v = create(5i32, "int").unwrap();
    assert_eq!(v.type_code(), TypeCode::Int);
    assert!(v.is_valid());
}

#[test]
fn create_accepts_both_designator_forms() {
    let by_name = create(5i32, "double").unwrap();
    let by_code = create(5i32, TypeCode::Double).unwrap();
    assert_eq!(by_name.type_code(), by_code.type_code());
}

#[test]
fn create_converts_across_kinds() {
    let v = create("2.5", "double").unwrap();
    assert_eq!(
        extract(&v).and_then(|s| s.as_double()),
        Some(2.5)
    );

    let v = create(7u8, "long long").unwrap();
    assert!(matches!(extract(&v), Some(Scalar::LongLong(7))));
}

#[test]
fn create_unknown_type_fails_without_fallback() {
    let err = create(5i32, "number").unwrap_err();
    assert_eq!(err, VariantError::UnknownType("number".to_string()));
}

#[test]
fn create_unrepresentable_value_fails() {
    let err = create("not a number", "double").unwrap_err();
    assert_eq!(
        err,
        VariantError::ConstructionFailed {
            source: TypeCode::String,
            target: TypeCode::Double,
        }
    );
}

// =============================================================================
// Extraction (projection of the stored type)
// =============================================================================

#[test]
fn extract_round_trips_created_value() {
    // create(5, "int") then extract as "int" returns 5.
    let v = create(5i32, "int").unwrap();
    let extracted = extract_as(&v, "int").unwrap().unwrap();
    assert_eq!(extracted.as_int(), Some(5));
}

#[test]
fn extract_wrong_type_is_none_not_error() {
    // The variant does not hold the string type.
    let v = create(5i32, "int").unwrap();
    assert_eq!(extract_as(&v, "string").unwrap(), None);
}

#[test]
fn extract_defaults_to_native_type() {
    let v = Variant::from(2.5f64);
    assert_eq!(extract(&v).and_then(|s| s.as_double()), Some(2.5));
}

#[test]
fn extract_every_non_native_type_is_none() {
    let v = Variant::from("hello");
    for code in TypeCode::ALL {
        let result = extract_as(&v, code).unwrap();
        if code == TypeCode::String {
            assert!(result.is_some());
        } else {
            assert_eq!(result, None, "extracting {code} from a string variant");
        }
    }
}

#[test]
fn extract_invalid_is_none_for_every_type() {
    for code in TypeCode::ALL {
        let v = Variant::invalid(code);
        assert_eq!(extract(&v), None);
        for target in TypeCode::ALL {
            assert_eq!(extract_as(&v, target).unwrap(), None);
        }
    }
}

#[test]
fn extract_unknown_name_fails_fast() {
    let v = Variant::from(5i32);
    assert!(matches!(
        extract_as(&v, "quaternion"),
        Err(VariantError::UnknownType(_))
    ));
}

// =============================================================================
// Casting (coercion of raw values)
// =============================================================================

#[test]
fn cast_coerces_where_extract_projects() {
    // A string raw value casts to int by parsing; an int variant never
    // extracts as string contents.
    let casted = cast("42", "int").unwrap().unwrap();
    assert_eq!(casted.as_int(), Some(42));

    let v = Variant::from("42");
    assert_eq!(extract_as(&v, "int").unwrap(), None);
}

#[test]
fn cast_numeric_narrowing() {
    assert!(matches!(
        cast(200i32, "unsigned char").unwrap(),
        Some(Scalar::UnsignedChar(200))
    ));
    assert_eq!(cast(300i32, "unsigned char").unwrap(), None);
}

#[test]
fn cast_to_string_formats() {
    let casted = cast(42i32, "string").unwrap().unwrap();
    assert_eq!(casted.as_str(), Some("42"));
}

#[test]
fn cast_undefined_coercion_is_none() {
    assert_eq!(cast("five", "int").unwrap(), None);
    assert_eq!(cast(5i32, "object").unwrap(), None);
}

#[test]
fn cast_unknown_name_fails_fast() {
    assert!(matches!(
        cast(5i32, "quaternion"),
        Err(VariantError::UnknownType(_))
    ));
}
