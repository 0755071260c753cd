//! Range value types.
//!
//! Two immutable variants share one read contract:
//! - [`ArithmeticRange`] - a stepped sequence `from, from+step, ..., to`
//! - [`SingletonRange`] - exactly one value, never empty
//!
//! [`Range`] is the sum type the canonical set stores; it delegates the
//! shared contract and renders the canonical textual form (`"7"` for
//! singletons, `"10-13"` for spans).

mod arithmetic;
mod iter;
mod singleton;

use std::fmt;

use rust_decimal::Decimal;

pub use arithmetic::ArithmeticRange;
pub use iter::{DecimalIter, I16Iter, I32Iter, I64Iter};
pub use singleton::SingletonRange;

use crate::num::Width;

/// A canonical sub-range: either a stepped span or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    Arithmetic(ArithmeticRange),
    Singleton(SingletonRange),
}

impl Range {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Arithmetic(r) => r.is_empty(),
            Self::Singleton(s) => s.is_empty(),
        }
    }

    pub fn is_incremental(&self) -> bool {
        match self {
            Self::Arithmetic(r) => r.is_incremental(),
            Self::Singleton(s) => s.is_incremental(),
        }
    }

    pub fn step_signum(&self) -> i32 {
        match self {
            Self::Arithmetic(r) => r.step_signum(),
            Self::Singleton(s) => s.step_signum(),
        }
    }

    pub fn width(&self) -> Width {
        match self {
            Self::Arithmetic(r) => r.width(),
            Self::Singleton(s) => s.width(),
        }
    }

    pub fn is_include_value(&self, value: Decimal) -> bool {
        match self {
            Self::Arithmetic(r) => r.is_include_value(value),
            Self::Singleton(s) => s.is_include_value(value),
        }
    }

    pub fn contains_value(&self, value: Decimal) -> bool {
        match self {
            Self::Arithmetic(r) => r.contains_value(value),
            Self::Singleton(s) => s.contains_value(value),
        }
    }

    pub fn from(&self) -> Decimal {
        match self {
            Self::Arithmetic(r) => r.from(),
            Self::Singleton(s) => s.from(),
        }
    }

    pub fn to(&self) -> Decimal {
        match self {
            Self::Arithmetic(r) => r.to(),
            Self::Singleton(s) => s.to(),
        }
    }

    pub fn step(&self) -> Decimal {
        match self {
            Self::Arithmetic(r) => r.step(),
            Self::Singleton(s) => s.step(),
        }
    }

    pub fn from_i16(&self) -> i16 {
        match self {
            Self::Arithmetic(r) => r.from_i16(),
            Self::Singleton(s) => s.from_i16(),
        }
    }

    pub fn from_i32(&self) -> i32 {
        match self {
            Self::Arithmetic(r) => r.from_i32(),
            Self::Singleton(s) => s.from_i32(),
        }
    }

    pub fn from_i64(&self) -> i64 {
        match self {
            Self::Arithmetic(r) => r.from_i64(),
            Self::Singleton(s) => s.from_i64(),
        }
    }

    pub fn to_i16(&self) -> i16 {
        match self {
            Self::Arithmetic(r) => r.to_i16(),
            Self::Singleton(s) => s.to_i16(),
        }
    }

    pub fn to_i32(&self) -> i32 {
        match self {
            Self::Arithmetic(r) => r.to_i32(),
            Self::Singleton(s) => s.to_i32(),
        }
    }

    pub fn to_i64(&self) -> i64 {
        match self {
            Self::Arithmetic(r) => r.to_i64(),
            Self::Singleton(s) => s.to_i64(),
        }
    }

    pub fn step_i16(&self) -> i16 {
        match self {
            Self::Arithmetic(r) => r.step_i16(),
            Self::Singleton(s) => s.step_i16(),
        }
    }

    pub fn step_i32(&self) -> i32 {
        match self {
            Self::Arithmetic(r) => r.step_i32(),
            Self::Singleton(s) => s.step_i32(),
        }
    }

    pub fn step_i64(&self) -> i64 {
        match self {
            Self::Arithmetic(r) => r.step_i64(),
            Self::Singleton(s) => s.step_i64(),
        }
    }

    pub fn iter_decimal(&self) -> DecimalIter {
        match self {
            Self::Arithmetic(r) => r.iter_decimal(),
            Self::Singleton(s) => s.iter_decimal(),
        }
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

impl From<ArithmeticRange> for Range {
    fn from(range: ArithmeticRange) -> Self {
        Self::Arithmetic(range)
    }
}

impl From<SingletonRange> for Range {
    fn from(range: SingletonRange) -> Self {
        Self::Singleton(range)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton(s) => write!(f, "{}", s.value()),
            Self::Arithmetic(r) => write!(f, "{}-{}", r.from(), r.to()),
        }
    }
}
