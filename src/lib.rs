//! Trellis - tagged variant scalar core
//!
//! This crate re-exports the variant value layer for convenient access.
//! For detailed documentation, see the member crate.
//!
//! # Architecture
//!
//! ```text
//! trellis_variant — type codes, registry, variant values, accessors,
//!                   and the ordering/equality protocol
//! ```

pub use trellis_variant as variant;
