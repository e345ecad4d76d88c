//! Integration tests for the ordering and equality protocol.

use std::any::Any;
use std::cmp::Ordering;

use trellis_variant::{
    ObjectRef, ObjectValue, Scalar, TypeCode, Variant, equal, less_than, order, strict_equal,
};

#[derive(Debug, PartialEq)]
struct ColorTable {
    levels: u32,
}

impl ObjectValue for ColorTable {
    fn class_name(&self) -> &str {
        "ColorTable"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn object_eq(&self, other: &dyn ObjectValue) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| self == o)
    }
}

#[derive(Debug, PartialEq)]
struct LookupGrid {
    cells: u32,
}

impl ObjectValue for LookupGrid {
    fn class_name(&self) -> &str {
        "LookupGrid"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn object_eq(&self, other: &dyn ObjectValue) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| self == o)
    }
}

// =============================================================================
// Type Identity Dominates
// =============================================================================

#[test]
fn different_types_never_value_compare() {
    // int 3 vs double 3.0: nonzero order matching the code comparison,
    // and never strictly equal.
    let a = Variant::from(3i32);
    let b = Variant::from(3.0f64);
    assert_eq!(order(&a, &b), TypeCode::Int.cmp(&TypeCode::Double));
    assert_eq!(order(&b, &a), TypeCode::Double.cmp(&TypeCode::Int));
    assert!(!strict_equal(&a, &b));
}

#[test]
fn order_sign_matches_code_comparison() {
    let variants = [
        Variant::from(9i8),
        Variant::from(5i32),
        Variant::from(1.5f64),
        Variant::from("a"),
    ];
    for x in &variants {
        for y in &variants {
            if x.type_code() != y.type_code() {
                assert_eq!(order(x, y), x.type_code().cmp(&y.type_code()));
            }
        }
    }
}

// =============================================================================
// Validity
// =============================================================================

#[test]
fn two_invalid_doubles_are_equal() {
    let a = Variant::invalid(TypeCode::Double);
    let b = Variant::invalid(TypeCode::Double);
    assert_eq!(order(&a, &b), Ordering::Equal);
    assert!(strict_equal(&a, &b));
}

#[test]
fn invalid_sorts_before_valid_of_same_type() {
    let invalid = Variant::invalid(TypeCode::Double);
    let valid = Variant::from(f64::MIN);
    assert_eq!(order(&invalid, &valid), Ordering::Less);
    assert_eq!(order(&valid, &invalid), Ordering::Greater);
    assert!(!strict_equal(&invalid, &valid));
}

// =============================================================================
// Object Kind
// =============================================================================

#[test]
fn object_order_is_by_class_name() {
    let color = Variant::from(ObjectRef::new(ColorTable { levels: 4 }));
    let grid = Variant::from(ObjectRef::new(LookupGrid { cells: 9 }));
    assert_eq!(order(&color, &grid), Ordering::Less);
}

#[test]
fn object_strict_equality_is_by_underlying_value() {
    let a = Variant::from(ObjectRef::new(ColorTable { levels: 4 }));
    let b = Variant::from(ObjectRef::new(ColorTable { levels: 4 }));
    let c = Variant::from(ObjectRef::new(ColorTable { levels: 8 }));

    // Same class name everywhere, so order finds no difference...
    assert_eq!(order(&a, &b), Ordering::Equal);
    assert_eq!(order(&a, &c), Ordering::Equal);
    // ...but strict equality inspects the payloads.
    assert!(strict_equal(&a, &b));
    assert!(!strict_equal(&a, &c));
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn sorting_mixed_variants_is_idempotent() {
    let mut variants = vec![
        Variant::from("zebra"),
        Variant::from(3.5f64),
        Variant::invalid(TypeCode::Double),
        Variant::from(-1i32),
        Variant::from(7i32),
        Variant::invalid(TypeCode::Int),
        Variant::from("apple"),
        Variant::from(ObjectRef::new(ColorTable { levels: 2 })),
        Variant::from(0.5f64),
    ];

    variants.sort_by(|a, b| order(a, b));
    let once: Vec<String> = variants.iter().map(|v| format!("{v:?}")).collect();

    variants.sort_by(|a, b| order(a, b));
    let twice: Vec<String> = variants.iter().map(|v| format!("{v:?}")).collect();

    assert_eq!(once, twice);

    // Types group together in code order, invalids lead their type group.
    assert_eq!(variants[0].type_code(), TypeCode::Int);
    assert!(!variants[0].is_valid());
    assert_eq!(variants[1].payload().and_then(Scalar::as_int), Some(-1));
    assert_eq!(variants[2].payload().and_then(Scalar::as_int), Some(7));
    assert_eq!(variants[3].type_code(), TypeCode::Double);
    assert!(!variants[3].is_valid());
    assert_eq!(variants.last().unwrap().type_code(), TypeCode::Object);
}

// =============================================================================
// Weak Operators
// =============================================================================

#[test]
fn weak_operators_are_not_the_strict_protocol() {
    let three = Variant::from(3i32);
    let three_point_zero = Variant::from(3.0f64);

    // The value system's own operators compare across numeric types...
    assert!(equal(&three, &three_point_zero));
    assert!(less_than(&three, &Variant::from(4.0f64)));

    // ...the strict protocol never does.
    assert!(!strict_equal(&three, &three_point_zero));
    assert_ne!(order(&three, &three_point_zero), Ordering::Equal);
}

#[test]
fn weak_operators_on_incomparable_pairs() {
    let text = Variant::from("3");
    let number = Variant::from(3i32);
    assert!(!equal(&text, &number));
    assert!(!less_than(&text, &number));
    assert!(!less_than(&number, &text));
}
