//! Truncating narrowing casts from `Decimal` to the fixed integer widths.
//!
//! These mirror native `as` narrowing: the fractional part is dropped
//! (truncation toward zero), then the integer is narrowed with
//! wrap-around bit truncation. They never fail; callers that need a
//! lossless view must stay in `Decimal`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Truncate toward zero, then narrow to `i64` with wrap-around.
pub fn to_i64_truncated(value: Decimal) -> i64 {
    // A truncated Decimal always fits i128 (96-bit mantissa), so the
    // fallback is unreachable.
    value.trunc().to_i128().unwrap_or_default() as i64
}

/// Truncate toward zero, then narrow to `i32` with wrap-around.
pub fn to_i32_truncated(value: Decimal) -> i32 {
    value.trunc().to_i128().unwrap_or_default() as i32
}

/// Truncate toward zero, then narrow to `i16` with wrap-around.
pub fn to_i16_truncated(value: Decimal) -> i16 {
    value.trunc().to_i128().unwrap_or_default() as i16
}
