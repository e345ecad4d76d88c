//! The scalar payload value system.
//!
//! [`Scalar`] is the raw value a [`crate::Variant`] carries: one of the
//! sixteen kinds registered in [`crate::code`]. This module also defines the
//! conversion rules between kinds ([`Scalar::convert_to`]) and the object
//! payload trait ([`ObjectValue`]).
//!
//! Scalars are immutable and cheaply cloneable; string and object payloads
//! are `Arc`-shared.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::code::TypeCode;

/// Generic object payload.
///
/// The object kind is an escape hatch for toolkit objects that are not
/// primitives. The trait demands exactly what the comparison protocol
/// needs: a class name (used by [`crate::order`]), downcasting, and an
/// underlying equality (used by [`crate::strict_equal`]).
pub trait ObjectValue: fmt::Debug + Send + Sync + 'static {
    /// Returns the name of this object's dynamic class.
    fn class_name(&self) -> &str;

    /// Returns self as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compares this object to another by the underlying value equality.
    ///
    /// Implementations typically downcast `other` and return false on a
    /// class mismatch.
    fn object_eq(&self, other: &dyn ObjectValue) -> bool;
}

/// Shared handle to an [`ObjectValue`].
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn ObjectValue>);

impl ObjectRef {
    /// Wraps an object in a shared handle.
    #[must_use]
    pub fn new(object: impl ObjectValue) -> Self {
        Self(Arc::new(object))
    }

    /// Returns the name of the object's dynamic class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    /// Attempts to downcast to a concrete object type.
    #[must_use]
    pub fn downcast_ref<T: ObjectValue>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Returns true if both handles point at the same object.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.object_eq(other.0.as_ref())
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A raw value of one of the registered kinds.
#[derive(Clone, Debug)]
pub enum Scalar {
    /// C `char` value.
    Char(i8),
    /// Explicitly signed 8-bit value.
    SignedChar(i8),
    /// Unsigned 8-bit value.
    UnsignedChar(u8),
    /// Signed 16-bit value.
    Short(i16),
    /// Unsigned 16-bit value.
    UnsignedShort(u16),
    /// Signed 32-bit value.
    Int(i32),
    /// Unsigned 32-bit value.
    UnsignedInt(u32),
    /// Signed 64-bit `long` value.
    Long(i64),
    /// Unsigned 64-bit `unsigned long` value.
    UnsignedLong(u64),
    /// Signed 64-bit `long long` value.
    LongLong(i64),
    /// Unsigned 64-bit `unsigned long long` value.
    UnsignedLongLong(u64),
    /// 32-bit floating point value.
    Float(f32),
    /// 64-bit floating point value.
    Double(f64),
    /// String value.
    String(Arc<str>),
    /// Unicode string value.
    UnicodeString(Arc<str>),
    /// Generic object value.
    Object(ObjectRef),
}

impl Scalar {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn type_code(&self) -> TypeCode {
        match self {
            Self::Char(_) => TypeCode::Char,
            Self::SignedChar(_) => TypeCode::SignedChar,
            Self::UnsignedChar(_) => TypeCode::UnsignedChar,
            Self::Short(_) => TypeCode::Short,
            Self::UnsignedShort(_) => TypeCode::UnsignedShort,
            Self::Int(_) => TypeCode::Int,
            Self::UnsignedInt(_) => TypeCode::UnsignedInt,
            Self::Long(_) => TypeCode::Long,
            Self::UnsignedLong(_) => TypeCode::UnsignedLong,
            Self::LongLong(_) => TypeCode::LongLong,
            Self::UnsignedLongLong(_) => TypeCode::UnsignedLongLong,
            Self::Float(_) => TypeCode::Float,
            Self::Double(_) => TypeCode::Double,
            Self::String(_) => TypeCode::String,
            Self::UnicodeString(_) => TypeCode::UnicodeString,
            Self::Object(_) => TypeCode::Object,
        }
    }

    /// Returns true for any numeric kind.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.type_code().is_numeric()
    }

    /// Builds a `long` value (distinct code from `long long`).
    #[must_use]
    pub const fn long(n: i64) -> Self {
        Self::Long(n)
    }

    /// Builds an `unsigned long` value.
    #[must_use]
    pub const fn unsigned_long(n: u64) -> Self {
        Self::UnsignedLong(n)
    }

    /// Builds a `signed char` value (distinct code from `char`).
    #[must_use]
    pub const fn signed_char(n: i8) -> Self {
        Self::SignedChar(n)
    }

    /// Builds a unicode string value.
    #[must_use]
    pub fn unicode(s: impl Into<Arc<str>>) -> Self {
        Self::UnicodeString(s.into())
    }

    /// Attempts to extract an `int` value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a `double` value.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract a `float` value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract a string reference (either string kind).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::UnicodeString(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract the object handle.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Converts this value to the given kind.
    ///
    /// Returns `None` when the conversion is not defined: out-of-range
    /// numeric targets, unparseable strings, non-object values into the
    /// object kind, and objects into anything else. Converting to the
    /// value's own kind clones it.
    #[must_use]
    pub fn convert_to(&self, target: TypeCode) -> Option<Self> {
        if self.type_code() == target {
            return Some(self.clone());
        }
        match target {
            t if t.is_integral() => self.to_integral_value().and_then(|n| Self::integral(t, n)),
            #[allow(clippy::cast_possible_truncation)]
            TypeCode::Float => self.to_float_value().map(|x| Self::Float(x as f32)),
            TypeCode::Double => self.to_float_value().map(Self::Double),
            TypeCode::String => self.to_text().map(Self::String),
            TypeCode::UnicodeString => self.to_text().map(Self::UnicodeString),
            // Only the identity conversion (handled above) reaches the
            // object kind.
            _ => None,
        }
    }

    /// Integer interpretation of this value, for integral conversion
    /// targets. Floats truncate toward zero; strings parse.
    fn to_integral_value(&self) -> Option<i128> {
        match self {
            Self::String(s) | Self::UnicodeString(s) => {
                let text = s.trim();
                text.parse::<i128>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(float_to_integral))
            }
            _ => self
                .as_i128()
                .or_else(|| self.as_f64().and_then(float_to_integral)),
        }
    }

    /// Floating interpretation of this value, for float conversion targets.
    fn to_float_value(&self) -> Option<f64> {
        match self {
            Self::String(s) | Self::UnicodeString(s) => s.trim().parse::<f64>().ok(),
            _ => self.as_f64(),
        }
    }

    /// Text rendering of this value, for string conversion targets.
    fn to_text(&self) -> Option<Arc<str>> {
        match self {
            Self::String(s) | Self::UnicodeString(s) => Some(Arc::clone(s)),
            Self::Object(_) => None,
            other => Some(Arc::from(other.to_string().as_str())),
        }
    }

    /// Exact integer value of the integer kinds.
    fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Char(n) | Self::SignedChar(n) => Some(i128::from(*n)),
            Self::UnsignedChar(n) => Some(i128::from(*n)),
            Self::Short(n) => Some(i128::from(*n)),
            Self::UnsignedShort(n) => Some(i128::from(*n)),
            Self::Int(n) => Some(i128::from(*n)),
            Self::UnsignedInt(n) => Some(i128::from(*n)),
            Self::Long(n) | Self::LongLong(n) => Some(i128::from(*n)),
            Self::UnsignedLong(n) | Self::UnsignedLongLong(n) => Some(i128::from(*n)),
            _ => None,
        }
    }

    /// Numeric value of any numeric kind as `f64`.
    ///
    /// Note: converting large 64-bit integers to `f64` may lose precision.
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Char(n) | Self::SignedChar(n) => Some(f64::from(*n)),
            Self::UnsignedChar(n) => Some(f64::from(*n)),
            Self::Short(n) => Some(f64::from(*n)),
            Self::UnsignedShort(n) => Some(f64::from(*n)),
            Self::Int(n) => Some(f64::from(*n)),
            Self::UnsignedInt(n) => Some(f64::from(*n)),
            Self::Long(n) | Self::LongLong(n) => Some(*n as f64),
            Self::UnsignedLong(n) | Self::UnsignedLongLong(n) => Some(*n as f64),
            Self::Float(x) => Some(f64::from(*x)),
            Self::Double(x) => Some(*x),
            _ => None,
        }
    }

    /// Builds an integral scalar of the given kind, range-checked.
    fn integral(target: TypeCode, n: i128) -> Option<Self> {
        let scalar = match target {
            TypeCode::Char => Self::Char(i8::try_from(n).ok()?),
            TypeCode::SignedChar => Self::SignedChar(i8::try_from(n).ok()?),
            TypeCode::UnsignedChar => Self::UnsignedChar(u8::try_from(n).ok()?),
            TypeCode::Short => Self::Short(i16::try_from(n).ok()?),
            TypeCode::UnsignedShort => Self::UnsignedShort(u16::try_from(n).ok()?),
            TypeCode::Int => Self::Int(i32::try_from(n).ok()?),
            TypeCode::UnsignedInt => Self::UnsignedInt(u32::try_from(n).ok()?),
            TypeCode::Long => Self::Long(i64::try_from(n).ok()?),
            TypeCode::UnsignedLong => Self::UnsignedLong(u64::try_from(n).ok()?),
            TypeCode::LongLong => Self::LongLong(i64::try_from(n).ok()?),
            TypeCode::UnsignedLongLong => Self::UnsignedLongLong(u64::try_from(n).ok()?),
            _ => return None,
        };
        Some(scalar)
    }

    /// Total comparison of two values of the same kind, used by the
    /// ordering protocol. Float ties that IEEE comparison leaves undefined
    /// are broken by NaN-ness (NaN sorts after every number); the object
    /// kind compares by class name.
    pub(crate) fn cmp_same_kind(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Char(a), Self::Char(b)) | (Self::SignedChar(a), Self::SignedChar(b)) => a.cmp(b),
            (Self::UnsignedChar(a), Self::UnsignedChar(b)) => a.cmp(b),
            (Self::Short(a), Self::Short(b)) => a.cmp(b),
            (Self::UnsignedShort(a), Self::UnsignedShort(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::UnsignedInt(a), Self::UnsignedInt(b)) => a.cmp(b),
            (Self::Long(a), Self::Long(b)) | (Self::LongLong(a), Self::LongLong(b)) => a.cmp(b),
            (Self::UnsignedLong(a), Self::UnsignedLong(b))
            | (Self::UnsignedLongLong(a), Self::UnsignedLongLong(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => cmp_f64(f64::from(*a), f64::from(*b)),
            (Self::Double(a), Self::Double(b)) => cmp_f64(*a, *b),
            (Self::String(a), Self::String(b)) | (Self::UnicodeString(a), Self::UnicodeString(b)) => {
                a.cmp(b)
            }
            (Self::Object(a), Self::Object(b)) => a.class_name().cmp(b.class_name()),
            // Kind mismatch cannot occur behind the same-type gate.
            _ => Ordering::Equal,
        }
    }
}

/// Truncates a float toward zero for an integral conversion target.
///
/// NaN and infinities have no integer interpretation. The saturating cast
/// is range-checked again against the concrete target width.
#[allow(clippy::cast_possible_truncation)]
fn float_to_integral(x: f64) -> Option<i128> {
    if x.is_finite() { Some(x as i128) } else { None }
}

/// Total float comparison: defined IEEE ordering where it exists, NaN after
/// every number and equal to NaN.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

// The weak operators of the value system: cross-kind numeric comparison is
// permitted, as is cross-kind string comparison; everything else is
// unequal/unordered. The strict protocol lives in `compare.rs`.

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::String(a) | Self::UnicodeString(a), Self::String(b) | Self::UnicodeString(b)) => {
                a == b
            }
            _ if self.type_code().is_integral() && other.type_code().is_integral() => {
                self.as_i128() == other.as_i128()
            }
            _ if self.is_numeric() && other.is_numeric() => self.as_f64() == other.as_f64(),
            _ => false,
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => {
                if a == b {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            }
            (Self::String(a) | Self::UnicodeString(a), Self::String(b) | Self::UnicodeString(b)) => {
                Some(a.cmp(b))
            }
            _ if self.type_code().is_integral() && other.type_code().is_integral() => {
                Some(self.as_i128()?.cmp(&other.as_i128()?))
            }
            _ if self.is_numeric() && other.is_numeric() => {
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(n) | Self::SignedChar(n) => write!(f, "{n}"),
            Self::UnsignedChar(n) => write!(f, "{n}"),
            Self::Short(n) => write!(f, "{n}"),
            Self::UnsignedShort(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UnsignedInt(n) => write!(f, "{n}"),
            Self::Long(n) | Self::LongLong(n) => write!(f, "{n}"),
            Self::UnsignedLong(n) | Self::UnsignedLongLong(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Double(x) => write!(f, "{x}"),
            Self::String(s) | Self::UnicodeString(s) => write!(f, "{s}"),
            Self::Object(o) => write!(f, "{}", o.class_name()),
        }
    }
}

// Convenience From implementations for the common native kinds. The kinds
// without a dedicated Rust source type (`signed char`, `long`,
// `unsigned long`, `unicode string`) have named constructors above.

impl From<i8> for Scalar {
    fn from(n: i8) -> Self {
        Self::Char(n)
    }
}

impl From<u8> for Scalar {
    fn from(n: u8) -> Self {
        Self::UnsignedChar(n)
    }
}

impl From<i16> for Scalar {
    fn from(n: i16) -> Self {
        Self::Short(n)
    }
}

impl From<u16> for Scalar {
    fn from(n: u16) -> Self {
        Self::UnsignedShort(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Self::UnsignedInt(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::LongLong(n)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Self::UnsignedLongLong(n)
    }
}

impl From<f32> for Scalar {
    fn from(x: f32) -> Self {
        Self::Float(x)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Double(x)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Scalar {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<ObjectRef> for Scalar {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}
