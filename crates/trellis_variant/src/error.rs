//! Error types for variant operations.
//!
//! Note that "the variant
//! does not hold this type" and "the variant is invalid" are NOT errors:
//! accessors report those as `None` (see [`crate::access`]).

use std::fmt;

use crate::code::TypeCode;

/// The error type for variant operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantError {
    /// A type designator given as a name is not in the registry.
    ///
    /// Surfaced immediately; no fallback type is substituted.
    UnknownType(String),

    /// The value system could not build the requested type from the given
    /// raw value (e.g. a non-numeric string into a numeric type).
    ConstructionFailed {
        /// The kind of the raw value.
        source: TypeCode,
        /// The kind that was requested.
        target: TypeCode,
    },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::UnknownType(name) => write!(f, "unknown type name: {name:?}"),
            VariantError::ConstructionFailed { source, target } => {
                write!(f, "cannot construct {target} from {source} value")
            }
        }
    }
}

impl std::error::Error for VariantError {}

/// Result alias for variant operations.
pub type Result<T> = std::result::Result<T, VariantError>;
