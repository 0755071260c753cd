//! Canonical, immutable aggregate of parsed ranges.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::num::{Width, to_i16_truncated, to_i32_truncated, to_i64_truncated};
use crate::parser::{RangeError, RangeSetBuilder};
use crate::range::{DecimalIter, Range};

/// An ordered collection of disjoint, merged sub-ranges.
///
/// Invariants, maintained by the builder and immutable afterwards:
/// entries are strictly ascending by `from`, mutually non-overlapping,
/// and no two adjacent entries are mergeable. Equality and hashing are
/// defined over the canonical serialized form, so sets built from
/// differently-ordered but semantically identical input compare equal.
///
/// A `RangeSet` is a pure value: it owns no I/O or shared state and may
/// be freely shared across threads read-only.
#[derive(Debug, Clone)]
pub struct RangeSet {
    ranges: Vec<Range>,
    max_value: Decimal,
}

impl Default for RangeSet {
    /// The empty set with the default upper bound.
    fn default() -> Self {
        Self {
            ranges: Vec::new(),
            max_value: Self::default_max(),
        }
    }
}

impl RangeSet {
    /// Parse a specification string into a canonical set.
    ///
    /// See [`RangeSetBuilder::parse`] for the grammar and failure
    /// modes.
    pub fn parse(spec: Option<&str>, max_value: Option<Decimal>) -> Result<Self, RangeError> {
        RangeSetBuilder::parse(spec, max_value)
    }

    /// Default upper bound for open items: `i64::MAX`.
    pub fn default_max() -> Decimal {
        Decimal::from(i64::MAX)
    }

    pub(crate) fn from_parts(ranges: Vec<Range>, max_value: Decimal) -> Self {
        Self { ranges, max_value }
    }

    /// True when the set holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of canonical sub-ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Read-only view of the canonical sub-ranges, ascending.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// The upper bound open items were expanded against.
    pub fn max_value(&self) -> Decimal {
        self.max_value
    }

    /// Smallest value in the set; `None` when empty.
    pub fn from(&self) -> Option<Decimal> {
        self.ranges.first().map(|range| range.from())
    }

    /// Largest value in the set; `None` when empty.
    pub fn to(&self) -> Option<Decimal> {
        self.ranges.last().map(|range| range.to())
    }

    /// Nominal aggregate step. The aggregate is not itself a single
    /// arithmetic sequence; its step is always 1.
    pub fn step(&self) -> Decimal {
        Decimal::ONE
    }

    /// Classification of the first (dominant) sub-range; the narrowest
    /// width for the empty set.
    pub fn value_class(&self) -> Width {
        self.ranges.first().map(Range::width).unwrap_or(Width::I16)
    }

    /// Sequence membership across the set. Entries are ascending, so
    /// the scan stops at the first entry starting past `value`.
    pub fn contains_value(&self, value: Decimal) -> bool {
        for range in &self.ranges {
            if range.from() > value {
                return false;
            }
            if range.contains_value(value) {
                return true;
            }
        }
        false
    }

    /// Bounding-box membership across the set.
    pub fn is_include_value(&self, value: Decimal) -> bool {
        for range in &self.ranges {
            if range.from() > value {
                return false;
            }
            if range.is_include_value(value) {
                return true;
            }
        }
        false
    }

    // =========================================================================
    // Iteration (each sub-range in ascending order, concatenated)
    // =========================================================================

    /// Iterate every value of the set as exact decimals.
    pub fn iter_decimal(&self) -> SetIter<'_> {
        SetIter {
            ranges: self.ranges.iter(),
            current: DecimalIter::empty(),
        }
    }

    /// Iterate every value narrowed to `i16`.
    pub fn iter_i16(&self) -> impl Iterator<Item = i16> + '_ {
        self.iter_decimal().map(to_i16_truncated)
    }

    /// Iterate every value narrowed to `i32`.
    pub fn iter_i32(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter_decimal().map(to_i32_truncated)
    }

    /// Iterate every value narrowed to `i64`.
    pub fn iter_i64(&self) -> impl Iterator<Item = i64> + '_ {
        self.iter_decimal().map(to_i64_truncated)
    }

    /// Canonical serialization: sub-ranges rendered as `"N"` or
    /// `"FROM-TO"`, joined by `,`, ascending. This is the form used for
    /// equality, hashing, and display; re-parsing it yields an equal
    /// set.
    pub fn to_range_string(&self) -> String {
        let items: Vec<String> = self.ranges.iter().map(ToString::to_string).collect();
        items.join(",")
    }
}

/// Iterator over every value of a [`RangeSet`] in ascending order.
pub struct SetIter<'a> {
    ranges: std::slice::Iter<'a, Range>,
    current: DecimalIter,
}

impl<'a> Iterator for SetIter<'a> {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            self.current = self.ranges.next()?.iter_decimal();
        }
    }
}

impl std::iter::FusedIterator for SetIter<'_> {}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = Decimal;
    type IntoIter = SetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_decimal()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_range_string())
    }
}

impl PartialEq for RangeSet {
    fn eq(&self, other: &Self) -> bool {
        self.to_range_string() == other.to_range_string()
    }
}

impl Eq for RangeSet {}

impl Hash for RangeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_range_string().hash(state);
    }
}

impl FromStr for RangeSet {
    type Err = RangeError;

    /// Parse with the default `max_value`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s), None)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RangeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_range_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RangeSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        spec.parse().map_err(serde::de::Error::custom)
    }
}
