//! Type codes and the immutable name registry.
//!
//! Every supported value kind has exactly one [`TypeCode`], one canonical
//! name, and one dispatch pair (see `dispatch.rs`). The mapping is fixed at
//! compile time and process-wide; there is no runtime registration.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Enumerated identifier for the closed set of supported value kinds.
///
/// Discriminants are dense (`0..COUNT`) so dispatch tables can be indexed
/// directly. The derived `Ord` compares the discriminant values; the
/// ordering protocol in [`crate::compare`] relies on it, so the declaration
/// order below is part of the contract.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeCode {
    /// C `char` (stored as `i8`).
    Char = 0,
    /// Explicitly signed 8-bit integer.
    SignedChar = 1,
    /// Unsigned 8-bit integer.
    UnsignedChar = 2,
    /// Signed 16-bit integer.
    Short = 3,
    /// Unsigned 16-bit integer.
    UnsignedShort = 4,
    /// Signed 32-bit integer.
    Int = 5,
    /// Unsigned 32-bit integer.
    UnsignedInt = 6,
    /// Signed 64-bit integer (`long`).
    Long = 7,
    /// Unsigned 64-bit integer (`unsigned long`).
    UnsignedLong = 8,
    /// Signed 64-bit integer (`long long`).
    LongLong = 9,
    /// Unsigned 64-bit integer (`unsigned long long`).
    UnsignedLongLong = 10,
    /// 32-bit floating point.
    Float = 11,
    /// 64-bit floating point.
    Double = 12,
    /// String value.
    String = 13,
    /// Unicode string value.
    UnicodeString = 14,
    /// Generic object value.
    Object = 15,
}

impl TypeCode {
    /// Number of registered type codes.
    pub const COUNT: usize = 16;

    /// All type codes, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Char,
        Self::SignedChar,
        Self::UnsignedChar,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::String,
        Self::UnicodeString,
        Self::Object,
    ];

    /// Returns the canonical name of this type code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::SignedChar => "signed char",
            Self::UnsignedChar => "unsigned char",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::UnicodeString => "unicode string",
            Self::Object => "object",
        }
    }

    /// Looks up a type code by its canonical name.
    ///
    /// Exact string match only; no normalization or fuzzy matching.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let code = match name {
            "char" => Self::Char,
            "signed char" => Self::SignedChar,
            "unsigned char" => Self::UnsignedChar,
            "short" => Self::Short,
            "unsigned short" => Self::UnsignedShort,
            "int" => Self::Int,
            "unsigned int" => Self::UnsignedInt,
            "long" => Self::Long,
            "unsigned long" => Self::UnsignedLong,
            "long long" => Self::LongLong,
            "unsigned long long" => Self::UnsignedLongLong,
            "float" => Self::Float,
            "double" => Self::Double,
            "string" => Self::String,
            "unicode string" => Self::UnicodeString,
            "object" => Self::Object,
            _ => return None,
        };
        Some(code)
    }

    /// Converts a raw integer code back into a [`TypeCode`].
    ///
    /// Returns `None` for integers outside the registered set.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Returns the raw integer value of this code.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Returns true for the integer kinds (char variants included).
    #[must_use]
    pub const fn is_integral(self) -> bool {
        (self as u8) <= (Self::UnsignedLongLong as u8)
    }

    /// Returns true for the floating-point kinds.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Returns true for any numeric kind.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integral() || self.is_floating()
    }

    /// Returns true for either string kind.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::String | Self::UnicodeString)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
