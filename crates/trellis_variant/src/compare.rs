//! The ordering and equality protocol over variants.
//!
//! [`order`] and [`strict_equal`] are total over the entire value space,
//! invalid variants included, and never panic. Both compare type identity
//! first (variants of different types are never value-compared), then
//! validity, then the extracted native payloads. They diverge on the object
//! kind: `order` compares class names (lexically), `strict_equal` uses the
//! object's underlying equality. That asymmetry is part of the contract.
//!
//! [`less_than`] and [`equal`] are the weaker convenience operators of the
//! underlying value system; do not conflate them with the protocol above.

use std::cmp::Ordering;

use crate::dispatch;
use crate::variant::Variant;

/// Three-way comparison of two variants, stable for sorting.
///
/// 1. Unequal type codes order by their code values.
/// 2. Same type: both invalid are equal; an invalid variant sorts before a
///    valid one.
/// 3. Both valid: natural ordering of the native payloads, except the
///    object kind, which orders by class name only, with no deeper
///    comparison.
///
/// NaN payloads order after every number and equal to each other, so the
/// relation stays total.
#[must_use]
pub fn order(s1: &Variant, s2: &Variant) -> Ordering {
    let (t1, t2) = (s1.type_code(), s2.type_code());

    // check based on type
    match t1.cmp(&t2) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    // check based on validity
    match (s1.is_valid(), s2.is_valid()) {
        (false, false) => return Ordering::Equal,
        (false, true) => return Ordering::Less,
        (true, false) => return Ordering::Greater,
        (true, true) => {}
    }

    // extract and compare the native payloads
    let ops = dispatch::ops(t1);
    match ((ops.convert)(s1), (ops.convert)(s2)) {
        (Some(r1), Some(r2)) => r1.cmp_same_kind(&r2),
        _ => Ordering::Equal,
    }
}

/// Strict equality of type and value.
///
/// Requires equal type codes; two invalid variants of the same type are
/// equal; mixed validity is unequal; otherwise the extracted native
/// payloads are compared, the object kind by its underlying equality rather
/// than the class-name ordering [`order`] uses.
#[must_use]
pub fn strict_equal(s1: &Variant, s2: &Variant) -> bool {
    // check based on type
    if s1.type_code() != s2.type_code() {
        return false;
    }

    // check based on validity
    match (s1.is_valid(), s2.is_valid()) {
        (false, false) => return true,
        (true, true) => {}
        _ => return false,
    }

    // extract and compare the native payloads
    let ops = dispatch::ops(s1.type_code());
    match ((ops.convert)(s1), (ops.convert)(s2)) {
        (Some(r1), Some(r2)) => r1 == r2,
        _ => false,
    }
}

/// Returns true if `s1 < s2` under the value system's own operators.
///
/// Weaker than [`order`]: cross-type numeric comparison is permitted and
/// incomparable pairs are simply false.
#[must_use]
pub fn less_than(s1: &Variant, s2: &Variant) -> bool {
    s1 < s2
}

/// Returns true if `s1 == s2` under the value system's own operators.
///
/// Weaker than [`strict_equal`]: cross-type numeric equality is permitted.
#[must_use]
pub fn equal(s1: &Variant, s2: &Variant) -> bool {
    s1 == s2
}
