//! The tagged variant value and its constructors.
//!
//! A [`Variant`] is a (type code, payload, validity) triple. The payload is
//! optional: an invalid variant keeps its type code but carries no usable
//! value, and is a legitimate, comparable state (empty table cells are
//! represented this way). Variants are immutable once constructed.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::code::TypeCode;
use crate::error::{Result, VariantError};
use crate::registry::{self, TypeDesignator};
use crate::scalar::{ObjectRef, Scalar};

/// A value of exactly one of the registered kinds, plus a validity flag.
///
/// Invariant: a present payload's own kind always equals `code`; every
/// constructor enforces this.
#[derive(Clone)]
pub struct Variant {
    code: TypeCode,
    payload: Option<Scalar>,
}

impl Variant {
    /// Builds a variant tagged with the value's own native kind.
    #[must_use]
    pub fn new(value: impl Into<Scalar>) -> Self {
        let payload = value.into();
        Self {
            code: payload.type_code(),
            payload: Some(payload),
        }
    }

    /// Builds the empty/invalid variant of the given kind.
    #[must_use]
    pub const fn invalid(code: TypeCode) -> Self {
        Self {
            code,
            payload: None,
        }
    }

    /// Builds a variant of the given kind by coercing `value`.
    ///
    /// This is the value system's two-argument constructor: when the
    /// coercion is not defined (see [`Scalar::convert_to`]) the result is
    /// the invalid variant of that kind, observable via [`Self::is_valid`].
    #[must_use]
    pub fn with_type(value: impl Into<Scalar>, code: TypeCode) -> Self {
        Self {
            code,
            payload: value.into().convert_to(code),
        }
    }

    /// Returns the kind this variant is tagged with (its native type).
    #[must_use]
    pub const fn type_code(&self) -> TypeCode {
        self.code
    }

    /// Returns true if this variant holds a usable payload.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.payload.is_some()
    }

    /// Returns the payload, if this variant is valid.
    #[must_use]
    pub const fn payload(&self) -> Option<&Scalar> {
        self.payload.as_ref()
    }

    /// Consumes the variant, returning the payload if valid.
    #[must_use]
    pub fn into_payload(self) -> Option<Scalar> {
        self.payload
    }

    /// Returns the dynamic class name of an object-kind payload.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self.payload() {
            Some(Scalar::Object(o)) => Some(o.class_name()),
            _ => None,
        }
    }
}

/// Creates a variant of the designated type from a raw value.
///
/// The designator is resolved through the registry, then the value system's
/// coercing constructor runs.
///
/// # Errors
///
/// Returns [`VariantError::UnknownType`] for an unregistered name and
/// [`VariantError::ConstructionFailed`] when the value system cannot coerce
/// the raw value to the designated type.
pub fn create<'a>(
    value: impl Into<Scalar>,
    designator: impl Into<TypeDesignator<'a>>,
) -> Result<Variant> {
    let target = registry::resolve(designator)?;
    let raw = value.into();
    let source = raw.type_code();
    let variant = Variant::with_type(raw, target);
    if variant.is_valid() {
        Ok(variant)
    } else {
        Err(VariantError::ConstructionFailed { source, target })
    }
}

// The weak operators of the underlying value system: used by
// `compare::less_than` / `compare::equal`, NOT by the strict protocol.

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self.payload(), other.payload()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.code == other.code,
            _ => false,
        }
    }
}

impl PartialOrd for Variant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.payload(), other.payload()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (None, None) if self.code == other.code => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(payload) => write!(f, "Variant({}, {payload:?})", self.code),
            None => write!(f, "Variant({}, invalid)", self.code),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(payload) => write!(f, "{payload}"),
            None => f.write_str("invalid"),
        }
    }
}

// Convenience From implementations mirroring the Scalar ones.

impl From<i8> for Variant {
    fn from(n: i8) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<u8> for Variant {
    fn from(n: u8) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<i16> for Variant {
    fn from(n: i16) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<u16> for Variant {
    fn from(n: u16) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<i32> for Variant {
    fn from(n: i32) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<u32> for Variant {
    fn from(n: u32) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<i64> for Variant {
    fn from(n: i64) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<u64> for Variant {
    fn from(n: u64) -> Self {
        Self::new(Scalar::from(n))
    }
}

impl From<f32> for Variant {
    fn from(x: f32) -> Self {
        Self::new(Scalar::from(x))
    }
}

impl From<f64> for Variant {
    fn from(x: f64) -> Self {
        Self::new(Scalar::from(x))
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::new(Scalar::from(s))
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Self::new(Scalar::from(s))
    }
}

impl From<Arc<str>> for Variant {
    fn from(s: Arc<str>) -> Self {
        Self::new(Scalar::from(s))
    }
}

impl From<ObjectRef> for Variant {
    fn from(object: ObjectRef) -> Self {
        Self::new(Scalar::from(object))
    }
}

impl From<Scalar> for Variant {
    fn from(payload: Scalar) -> Self {
        Self::new(payload)
    }
}
