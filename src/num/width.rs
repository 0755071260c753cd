//! Numeric width classification.
//!
//! Decides the narrowest representation that holds a triple of range
//! bounds exactly. Classification never fails: `Width::Decimal` is the
//! universal fallback for non-integral or beyond-64-bit values.

use rust_decimal::Decimal;

/// The narrowest numeric representation for a set of bound values.
///
/// Ordered from narrowest to widest; [`classify`] returns the first
/// entry that represents all inputs exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Arbitrary-precision decimal
    Decimal,
}

impl Width {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Decimal => "decimal",
        }
    }
}

fn within(value: Decimal, min: Decimal, max: Decimal) -> bool {
    min <= value && value <= max
}

/// Classify the narrowest [`Width`] that exactly represents `from`,
/// `to`, and `step`.
///
/// All three must be integral (zero fractional part) and inside the
/// width's bounds; otherwise the next wider candidate is tried, with
/// `Width::Decimal` as the fallback.
pub fn classify(from: Decimal, to: Decimal, step: Decimal) -> Width {
    let bounds = [from, to, step];
    if bounds.iter().any(|v| !v.fract().is_zero()) {
        return Width::Decimal;
    }
    for (width, min, max) in [
        (Width::I16, Decimal::from(i16::MIN), Decimal::from(i16::MAX)),
        (Width::I32, Decimal::from(i32::MIN), Decimal::from(i32::MAX)),
        (Width::I64, Decimal::from(i64::MIN), Decimal::from(i64::MAX)),
    ] {
        if bounds.iter().all(|v| within(*v, min, max)) {
            return width;
        }
    }
    Width::Decimal
}
