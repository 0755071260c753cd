//! Single-value range.

use rust_decimal::Decimal;

use super::iter::{DecimalIter, I16Iter, I32Iter, I64Iter};
use crate::num::{Width, classify, to_i16_truncated, to_i32_truncated, to_i64_truncated};

/// A range that holds exactly one value.
///
/// Logically an arithmetic range with `from == to` and step 1, but
/// never empty, and kept as a distinct variant so canonical formatting
/// emits `"7"` rather than `"7-7"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingletonRange {
    value: Decimal,
    width: Width,
}

impl SingletonRange {
    pub fn new(value: Decimal) -> Self {
        let width = classify(value, value, Decimal::ONE);
        Self { value, width }
    }

    /// The single value, lossless.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Always false: a singleton holds one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Always 1 (nominal step).
    pub fn step_signum(&self) -> i32 {
        1
    }

    /// Always true.
    pub fn is_incremental(&self) -> bool {
        true
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// Equality with the single value.
    pub fn is_include_value(&self, value: Decimal) -> bool {
        self.value == value
    }

    /// Equality with the single value.
    pub fn contains_value(&self, value: Decimal) -> bool {
        self.value == value
    }

    // =========================================================================
    // Accessors (from == to == value, step == 1)
    // =========================================================================

    pub fn from(&self) -> Decimal {
        self.value
    }

    pub fn to(&self) -> Decimal {
        self.value
    }

    pub fn step(&self) -> Decimal {
        Decimal::ONE
    }

    pub fn from_i16(&self) -> i16 {
        to_i16_truncated(self.value)
    }

    pub fn from_i32(&self) -> i32 {
        to_i32_truncated(self.value)
    }

    pub fn from_i64(&self) -> i64 {
        to_i64_truncated(self.value)
    }

    pub fn to_i16(&self) -> i16 {
        self.from_i16()
    }

    pub fn to_i32(&self) -> i32 {
        self.from_i32()
    }

    pub fn to_i64(&self) -> i64 {
        self.from_i64()
    }

    pub fn step_i16(&self) -> i16 {
        1
    }

    pub fn step_i32(&self) -> i32 {
        1
    }

    pub fn step_i64(&self) -> i64 {
        1
    }

    // =========================================================================
    // Iterators (exactly one element each)
    // =========================================================================

    pub fn iter_decimal(&self) -> DecimalIter {
        DecimalIter::singleton(self.value)
    }

    pub fn iter_i16(&self) -> I16Iter {
        I16Iter(self.iter_decimal())
    }

    pub fn iter_i32(&self) -> I32Iter {
        I32Iter(self.iter_decimal())
    }

    pub fn iter_i64(&self) -> I64Iter {
        I64Iter(self.iter_decimal())
    }
}
