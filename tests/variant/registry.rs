//! Integration tests for type codes and designator resolution.

use trellis_variant::{TypeCode, TypeDesignator, VariantError, resolve};

// =============================================================================
// Name Resolution
// =============================================================================

#[test]
fn every_registered_name_resolves_stably() {
    for code in TypeCode::ALL {
        assert_eq!(resolve(code.name()), Ok(code));
        // A second resolution returns the same code.
        assert_eq!(resolve(code.name()), Ok(code));
    }
}

#[test]
fn codes_pass_through_unchanged() {
    for code in TypeCode::ALL {
        assert_eq!(resolve(code), Ok(code));
    }
}

#[test]
fn unregistered_names_always_fail() {
    for name in ["quaternion", "Int", "INT", " int", "int ", "", "uint64"] {
        assert_eq!(
            resolve(name),
            Err(VariantError::UnknownType(name.to_string())),
            "name {name:?} should not resolve"
        );
    }
}

#[test]
fn designator_forms_are_interchangeable() {
    let by_name = resolve(TypeDesignator::Name("double")).unwrap();
    let by_code = resolve(TypeDesignator::Code(TypeCode::Double)).unwrap();
    assert_eq!(by_name, by_code);
}

// =============================================================================
// Raw Codes
// =============================================================================

#[test]
fn raw_codes_round_trip() {
    for code in TypeCode::ALL {
        assert_eq!(TypeCode::from_raw(code.as_raw()), Some(code));
    }
}

#[test]
fn out_of_set_raw_codes_are_rejected() {
    for raw in TypeCode::COUNT as u8..=u8::MAX {
        assert_eq!(TypeCode::from_raw(raw), None);
    }
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = TypeCode::ALL.iter().map(|c| c.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TypeCode::COUNT);
}
