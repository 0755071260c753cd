//! Numeric foundation for range values.
//!
//! This module provides the pieces every range type is built on:
//! - [`Width`], [`classify`] - narrowest-representation classification
//! - Truncating casts from [`Decimal`](rust_decimal::Decimal) to the
//!   fixed-width integer types
//!
//! This module has NO dependencies on other rangespec modules.

mod cast;
mod width;

pub use cast::{to_i16_truncated, to_i32_truncated, to_i64_truncated};
pub use width::{Width, classify};
