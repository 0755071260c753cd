//! Typed iterators over range values.
//!
//! All iterators are finite and fused: once exhausted they keep
//! returning `None` on every pull. A fresh iterator is created per
//! call, so iteration is restartable.

use std::iter::FusedIterator;

use rust_decimal::Decimal;

use crate::num::{to_i16_truncated, to_i32_truncated, to_i64_truncated};

/// Iterator over the exact `Decimal` values of a range.
///
/// Produces `from, from + step, from + 2 * step, ...` up to and
/// including `to`, in the step's direction.
#[derive(Debug, Clone)]
pub struct DecimalIter {
    next: Option<Decimal>,
    to: Decimal,
    step: Decimal,
}

impl DecimalIter {
    pub(crate) fn new(from: Decimal, to: Decimal, step: Decimal) -> Self {
        let next = if step.is_zero() { None } else { Some(from) };
        Self { next, to, step }
    }

    pub(crate) fn empty() -> Self {
        Self {
            next: None,
            to: Decimal::ZERO,
            step: Decimal::ZERO,
        }
    }

    pub(crate) fn singleton(value: Decimal) -> Self {
        Self {
            next: Some(value),
            to: value,
            step: Decimal::ONE,
        }
    }
}

impl Iterator for DecimalIter {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        let current = self.next.take()?;
        self.next = current.checked_add(self.step).filter(|following| {
            if self.step.is_sign_positive() {
                *following <= self.to
            } else {
                *following >= self.to
            }
        });
        Some(current)
    }
}

impl FusedIterator for DecimalIter {}

/// Iterator over range values narrowed to `i16`.
#[derive(Debug, Clone)]
pub struct I16Iter(pub(crate) DecimalIter);

impl Iterator for I16Iter {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        self.0.next().map(to_i16_truncated)
    }
}

impl FusedIterator for I16Iter {}

/// Iterator over range values narrowed to `i32`.
#[derive(Debug, Clone)]
pub struct I32Iter(pub(crate) DecimalIter);

impl Iterator for I32Iter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.0.next().map(to_i32_truncated)
    }
}

impl FusedIterator for I32Iter {}

/// Iterator over range values narrowed to `i64`.
#[derive(Debug, Clone)]
pub struct I64Iter(pub(crate) DecimalIter);

impl Iterator for I64Iter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.0.next().map(to_i64_truncated)
    }
}

impl FusedIterator for I64Iter {}
