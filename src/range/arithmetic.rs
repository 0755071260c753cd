//! Stepped arithmetic range.

use rust_decimal::Decimal;

use super::iter::{DecimalIter, I16Iter, I32Iter, I64Iter};
use crate::num::{Width, classify, to_i16_truncated, to_i32_truncated, to_i64_truncated};

/// An immutable stepped sequence `from, from + step, ..., to`.
///
/// The constructor normalizes a step whose sign disagrees with the
/// direction of `to - from` to zero, which makes the range empty. An
/// empty range contains no values, its iterators yield nothing, and it
/// classifies as the narrowest width regardless of bound magnitude
/// (legacy behavior of the value-class probe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithmeticRange {
    from: Decimal,
    to: Decimal,
    step: Decimal,
    width: Width,
}

impl ArithmeticRange {
    /// Build a range, normalizing a direction-mismatched step to zero.
    ///
    /// Always succeeds: invalid (step, direction) combinations produce
    /// the empty range rather than an error.
    pub fn new(from: Decimal, to: Decimal, step: Decimal) -> Self {
        let mismatched = (step.is_sign_positive() && to < from)
            || (step.is_sign_negative() && to > from);
        let step = if step.is_zero() || mismatched {
            Decimal::ZERO
        } else {
            step
        };
        let width = if step.is_zero() {
            Width::I16
        } else {
            classify(from, to, step)
        };
        Self {
            from,
            to,
            step,
            width,
        }
    }

    /// An empty range has a normalized step of zero.
    pub fn is_empty(&self) -> bool {
        self.step.is_zero()
    }

    /// Sign of the step: `1`, `0` (empty), or `-1`.
    pub fn step_signum(&self) -> i32 {
        if self.step.is_zero() {
            0
        } else if self.step.is_sign_positive() {
            1
        } else {
            -1
        }
    }

    /// Whether the range walks upward (an empty range counts as
    /// incremental).
    pub fn is_incremental(&self) -> bool {
        self.step_signum() >= 0
    }

    /// Narrowest width representing `from`, `to`, and `step`.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Bounding-box membership: `value` lies between `from` and `to`
    /// inclusive, ignoring step alignment. Always false when empty.
    pub fn is_include_value(&self, value: Decimal) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.is_incremental() {
            self.from <= value && value <= self.to
        } else {
            self.to <= value && value <= self.from
        }
    }

    /// Sequence membership: `value` is a bounding-box member and sits
    /// on an exact step-aligned position. Always false when empty.
    pub fn contains_value(&self, value: Decimal) -> bool {
        if !self.is_include_value(value) {
            return false;
        }
        match value
            .checked_sub(self.from)
            .and_then(|distance| distance.checked_rem(self.step))
        {
            Some(remainder) => remainder.is_zero(),
            None => false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Lower bound, lossless.
    pub fn from(&self) -> Decimal {
        self.from
    }

    /// Upper bound, lossless.
    pub fn to(&self) -> Decimal {
        self.to
    }

    /// Step, lossless. Zero for the empty range.
    pub fn step(&self) -> Decimal {
        self.step
    }

    /// `from` narrowed to `i16`; truncates silently when out of range.
    pub fn from_i16(&self) -> i16 {
        to_i16_truncated(self.from)
    }

    /// `from` narrowed to `i32`; truncates silently when out of range.
    pub fn from_i32(&self) -> i32 {
        to_i32_truncated(self.from)
    }

    /// `from` narrowed to `i64`; truncates silently when out of range.
    pub fn from_i64(&self) -> i64 {
        to_i64_truncated(self.from)
    }

    /// `to` narrowed to `i16`; truncates silently when out of range.
    pub fn to_i16(&self) -> i16 {
        to_i16_truncated(self.to)
    }

    /// `to` narrowed to `i32`; truncates silently when out of range.
    pub fn to_i32(&self) -> i32 {
        to_i32_truncated(self.to)
    }

    /// `to` narrowed to `i64`; truncates silently when out of range.
    pub fn to_i64(&self) -> i64 {
        to_i64_truncated(self.to)
    }

    /// `step` narrowed to `i16`; truncates silently when out of range.
    pub fn step_i16(&self) -> i16 {
        to_i16_truncated(self.step)
    }

    /// `step` narrowed to `i32`; truncates silently when out of range.
    pub fn step_i32(&self) -> i32 {
        to_i32_truncated(self.step)
    }

    /// `step` narrowed to `i64`; truncates silently when out of range.
    pub fn step_i64(&self) -> i64 {
        to_i64_truncated(self.step)
    }

    // =========================================================================
    // Iterators (fresh per call, fused on exhaustion)
    // =========================================================================

    /// Iterate the exact sequence values.
    pub fn iter_decimal(&self) -> DecimalIter {
        DecimalIter::new(self.from, self.to, self.step)
    }

    /// Iterate the sequence narrowed to `i16`.
    pub fn iter_i16(&self) -> I16Iter {
        I16Iter(self.iter_decimal())
    }

    /// Iterate the sequence narrowed to `i32`.
    pub fn iter_i32(&self) -> I32Iter {
        I32Iter(self.iter_decimal())
    }

    /// Iterate the sequence narrowed to `i64`.
    pub fn iter_i64(&self) -> I64Iter {
        I64Iter(self.iter_decimal())
    }
}
