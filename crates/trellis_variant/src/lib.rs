//! Typed variant values for Trellis.
//!
//! This crate provides:
//! - [`TypeCode`] - The closed set of supported value kinds
//! - [`TypeDesignator`] / [`resolve`] - Name-or-code type designation
//! - [`Scalar`] - The payload value system, including [`ObjectValue`] objects
//! - [`Variant`] - The tagged (type, payload, validity) value
//! - [`create`] / [`extract`] / [`extract_as`] / [`cast`] - Type-directed
//!   construction and projection
//! - [`order`] / [`strict_equal`] - The total ordering and strict-equality
//!   protocol over heterogeneous, possibly-invalid values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod code;
pub mod compare;
mod dispatch;
pub mod error;
pub mod registry;
pub mod scalar;
pub mod variant;

pub use access::{cast, extract, extract_as};
pub use code::TypeCode;
pub use compare::{equal, less_than, order, strict_equal};
pub use error::{Result, VariantError};
pub use registry::{TypeDesignator, resolve};
pub use scalar::{ObjectRef, ObjectValue, Scalar};
pub use variant::{Variant, create};
