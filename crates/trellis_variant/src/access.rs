//! Extraction and casting of variant payloads.
//!
//! `None` from these operations means "the variant does not hold that type"
//! or "the coercion is not defined": a normal outcome of probing
//! heterogeneous data, never an error. The only error path is designator
//! resolution itself.

use crate::dispatch;
use crate::error::Result;
use crate::registry::{self, TypeDesignator};
use crate::scalar::Scalar;
use crate::variant::Variant;

/// Extracts the payload at the variant's own native type.
///
/// Returns `None` for invalid variants.
#[must_use]
pub fn extract(variant: &Variant) -> Option<Scalar> {
    let ops = dispatch::ops(variant.type_code());
    if (ops.is)(variant) {
        (ops.convert)(variant)
    } else {
        None
    }
}

/// Extracts the payload as the designated type.
///
/// This is a projection of the variant's stored type, not a coercion: the
/// designated type's predicate is consulted first, and `None` is returned
/// whenever the variant does not actually hold that type (or is invalid).
/// Use [`cast`] to coerce raw values.
///
/// # Errors
///
/// Returns [`crate::VariantError::UnknownType`] if a name designator is not
/// in the registry.
pub fn extract_as<'a>(
    variant: &Variant,
    designator: impl Into<TypeDesignator<'a>>,
) -> Result<Option<Scalar>> {
    let code = registry::resolve(designator)?;
    let ops = dispatch::ops(code);
    if (ops.is)(variant) {
        Ok((ops.convert)(variant))
    } else {
        Ok(None)
    }
}

/// Coerces a raw value to the designated type.
///
/// A temporary variant of the designated type is constructed from `value`;
/// only if that temporary is valid is the converted result returned.
///
/// # Errors
///
/// Returns [`crate::VariantError::UnknownType`] if a name designator is not
/// in the registry.
pub fn cast<'a>(
    value: impl Into<Scalar>,
    designator: impl Into<TypeDesignator<'a>>,
) -> Result<Option<Scalar>> {
    let code = registry::resolve(designator)?;
    let temporary = Variant::with_type(value, code);
    if temporary.is_valid() {
        Ok((dispatch::ops(code).convert)(&temporary))
    } else {
        Ok(None)
    }
}
