//! Code-keyed operation dispatch.
//!
//! Each type code has exactly one pair of operations: a "does this variant
//! hold this type" predicate and a "convert the payload to this type"
//! operation. The pairs live in one process-wide constant table indexed by
//! the dense code values; accessors and the comparison protocol go through
//! it rather than matching on kinds themselves.

use crate::code::TypeCode;
use crate::scalar::Scalar;
use crate::variant::Variant;

/// The operation pair registered for one type code.
pub(crate) struct TypeOps {
    /// True iff the variant is valid and natively holds this type.
    pub(crate) is: fn(&Variant) -> bool,
    /// The payload converted to this type, when defined.
    pub(crate) convert: fn(&Variant) -> Option<Scalar>,
}

macro_rules! type_ops {
    ($($code:ident),+ $(,)?) => {
        [$(
            TypeOps {
                is: |v: &Variant| v.is_valid() && v.type_code() == TypeCode::$code,
                convert: |v: &Variant| {
                    v.payload().and_then(|s| s.convert_to(TypeCode::$code))
                },
            }
        ),+]
    };
}

// Entry order mirrors the TypeCode discriminants; `ops` indexes by code.
static TYPE_OPS: [TypeOps; TypeCode::COUNT] = type_ops![
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    String,
    UnicodeString,
    Object,
];

/// Returns the operation pair for a type code.
pub(crate) fn ops(code: TypeCode) -> &'static TypeOps {
    &TYPE_OPS[code as usize]
}
