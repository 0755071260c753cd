//! Grammar-driven builder for canonical range sets.
//!
//! Grammar:
//!
//! ```text
//! spec ::= "" | item ("," item)*
//! item ::= NUMBER | NUMBER "-" NUMBER | NUMBER "-" | "-" NUMBER
//! ```
//!
//! A leading `-N` denotes the natural-number range `1..N`; a trailing
//! `N-` denotes `N..max_value`. Each parsed item is inserted into a
//! sorted collection with merge-on-insert: overlapping or numerically
//! adjacent entries coalesce, transitively, so the finished set is
//! always canonical.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::error::RangeError;
use super::lexer::{RangeTokenizer, TokenKind};
use crate::range::{ArithmeticRange, Range, SingletonRange};
use crate::set::RangeSet;

/// Parser state for one specification string.
pub struct RangeSetBuilder<'a> {
    input: &'a str,
    tokens: RangeTokenizer<'a>,
    max_value: Decimal,
    ranges: Vec<Range>,
}

impl<'a> RangeSetBuilder<'a> {
    /// Parse a specification into a canonical [`RangeSet`].
    ///
    /// A `spec` of `None` or the empty string yields an empty, valid
    /// set. `max_value` bounds open upper items (`N-`); it defaults to
    /// `i64::MAX` and must be a non-negative integral decimal.
    pub fn parse(spec: Option<&'a str>, max_value: Option<Decimal>) -> Result<RangeSet, RangeError> {
        let max_value = match max_value {
            None => RangeSet::default_max(),
            Some(value) => {
                if value < Decimal::ZERO || !value.fract().is_zero() {
                    return Err(RangeError::invalid_max_value(value));
                }
                value
            }
        };
        let input = spec.unwrap_or("");
        debug!(spec = input, %max_value, "parsing range specification");

        let mut builder = Self {
            input,
            tokens: RangeTokenizer::new(input),
            max_value,
            ranges: Vec::new(),
        };
        builder.run()?;
        let set = RangeSet::from_parts(builder.ranges, builder.max_value);
        debug!(canonical = %set, "parsed range specification");
        Ok(set)
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// spec = "" | item ("," item)*
    fn run(&mut self) -> Result<(), RangeError> {
        if self.tokens.advance() == TokenKind::Eot {
            return Ok(());
        }
        loop {
            self.item()?;
            match self.tokens.token_kind() {
                TokenKind::Eot => return Ok(()),
                TokenKind::Delimiter => {
                    self.tokens.advance();
                }
                _ => return Err(self.unexpected_here()),
            }
        }
    }

    /// item = NUMBER | NUMBER "-" NUMBER | NUMBER "-" | "-" NUMBER
    ///
    /// Entered with the item's first token current; leaves the item's
    /// follower (delimiter or end of text) current.
    fn item(&mut self) -> Result<(), RangeError> {
        match self.tokens.token_kind() {
            TokenKind::Number => {
                let from = self.number()?;
                match self.tokens.advance() {
                    TokenKind::Serial => match self.tokens.advance() {
                        TokenKind::Number => {
                            let to = self.number()?;
                            self.tokens.advance();
                            self.insert_span(from, to);
                        }
                        // open upper bound runs to the configured maximum
                        TokenKind::Delimiter | TokenKind::Eot => {
                            self.insert_span(from, self.max_value);
                        }
                        _ => return Err(self.unexpected_here()),
                    },
                    TokenKind::Delimiter | TokenKind::Eot => {
                        self.insert(SingletonRange::new(from).into());
                    }
                    _ => return Err(self.unexpected_here()),
                }
            }
            // leading '-N' denotes the natural-number range 1..N
            TokenKind::Serial => match self.tokens.advance() {
                TokenKind::Number => {
                    let to = self.number()?;
                    self.tokens.advance();
                    self.insert_span(Decimal::ONE, to);
                }
                _ => return Err(self.unexpected_here()),
            },
            // an item cannot start with ',', end of text, or garbage
            _ => return Err(self.illegal_format_here()),
        }
        Ok(())
    }

    /// Parse the current NUMBER token into a decimal.
    fn number(&mut self) -> Result<Decimal, RangeError> {
        let text = self.tokens.token_text().unwrap_or("");
        text.parse::<Decimal>()
            .map_err(|_| RangeError::illegal_number(self.token_pos(), text))
    }

    // =========================================================================
    // Canonical insertion
    // =========================================================================

    fn insert_span(&mut self, from: Decimal, to: Decimal) {
        let range = ArithmeticRange::new(from, to, Decimal::ONE);
        if range.is_empty() {
            trace!(%from, %to, "skipping empty candidate range");
            return;
        }
        if from == to {
            self.insert(SingletonRange::new(from).into());
        } else {
            self.insert(range.into());
        }
    }

    /// Insert a candidate into the sorted collection, coalescing with
    /// every entry it overlaps or touches (gap 1) on either side.
    fn insert(&mut self, range: Range) {
        trace!(item = %range, "inserting item");
        let mut lo = range.from();
        let mut hi = range.to();

        // entries strictly left of the candidate stay untouched; bounds
        // may sit at the decimal maximum, so adjacency checks must not
        // overflow
        let start = self.ranges.partition_point(|entry| {
            entry
                .to()
                .checked_add(Decimal::ONE)
                .is_some_and(|bound| bound < lo)
        });
        let mut end = start;
        while end < self.ranges.len()
            && hi
                .checked_add(Decimal::ONE)
                .is_none_or(|bound| self.ranges[end].from() <= bound)
        {
            lo = lo.min(self.ranges[end].from());
            hi = hi.max(self.ranges[end].to());
            end += 1;
        }

        let merged: Range = if lo == hi {
            SingletonRange::new(lo).into()
        } else if start == end {
            range
        } else {
            debug!(coalesced = end - start, %lo, %hi, "merged overlapping entries");
            ArithmeticRange::new(lo, hi, Decimal::ONE).into()
        };
        self.ranges.splice(start..end, std::iter::once(merged));
    }

    // =========================================================================
    // Error helpers
    // =========================================================================

    /// 1-based position of the current token, one past the end at EOT.
    fn token_pos(&self) -> usize {
        self.tokens
            .token_offset()
            .map(|offset| usize::from(offset) + 1)
            .unwrap_or(self.input.len() + 1)
    }

    fn token_text_owned(&self) -> String {
        self.tokens.token_text().unwrap_or("").to_string()
    }

    fn illegal_format_here(&self) -> RangeError {
        RangeError::illegal_format(self.token_pos(), self.token_text_owned())
    }

    /// Invalid-character runs outside item position report themselves;
    /// every other stray token is a grammar violation.
    fn unexpected_here(&self) -> RangeError {
        if self.tokens.token_kind() == TokenKind::Invalid {
            RangeError::invalid_characters(self.token_pos(), self.token_text_owned())
        } else {
            self.illegal_format_here()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_and_span() {
        let set = RangeSetBuilder::parse(Some("7,10-13"), None).unwrap();
        assert_eq!(set.to_range_string(), "7,10-13");
    }

    #[test]
    fn test_merge_on_insert_is_transitive() {
        let set = RangeSetBuilder::parse(Some("3-4,1-2,0-4"), None).unwrap();
        assert_eq!(set.to_range_string(), "0-4");
    }

    #[test]
    fn test_adjacent_entries_coalesce() {
        let set = RangeSetBuilder::parse(Some("1-2,4,3"), None).unwrap();
        assert_eq!(set.to_range_string(), "1-4");
    }

    #[test]
    fn test_merged_single_value_collapses_to_singleton() {
        let set = RangeSetBuilder::parse(Some("5,5"), None).unwrap();
        assert_eq!(set.to_range_string(), "5");
    }

    #[test]
    fn test_empty_spec_is_valid() {
        let set = RangeSetBuilder::parse(None, None).unwrap();
        assert!(set.is_empty());
        let set = RangeSetBuilder::parse(Some(""), None).unwrap();
        assert!(set.is_empty());
        let set = RangeSetBuilder::parse(Some("   "), None).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_inverted_span_contributes_nothing() {
        let set = RangeSetBuilder::parse(Some("5-3"), None).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_around_decimal_max_does_not_overflow() {
        // an open item against Decimal::MAX puts the maximum itself in
        // the collection; adjacency scans on later inserts must cope
        let set = RangeSetBuilder::parse(Some("9,5-"), Some(Decimal::MAX)).unwrap();
        assert_eq!(set.to_range_string(), format!("5-{}", Decimal::MAX));

        let set = RangeSetBuilder::parse(Some("5-,1"), Some(Decimal::MAX)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.from(), Some(Decimal::ONE));
        assert_eq!(set.to(), Some(Decimal::MAX));
    }

    #[test]
    fn test_invalid_max_value() {
        let err = RangeSetBuilder::parse(Some("1"), Some(Decimal::from(-1))).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidMaxValue {
                value: Decimal::from(-1)
            }
        );

        let half: Decimal = "1.5".parse().unwrap();
        let err = RangeSetBuilder::parse(Some("1"), Some(half)).unwrap_err();
        assert!(matches!(err, RangeError::InvalidMaxValue { .. }));
    }

    #[test]
    fn test_garbage_at_item_start_is_illegal_format() {
        let err = RangeSetBuilder::parse(Some("1-3,abc,4"), None).unwrap_err();
        assert_eq!(
            err,
            RangeError::IllegalFormat {
                pos: 5,
                text: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_garbage_after_item_is_invalid_characters() {
        let err = RangeSetBuilder::parse(Some("1abc"), None).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidCharacters {
                pos: 2,
                text: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_premature_end_of_text() {
        let err = RangeSetBuilder::parse(Some("1,"), None).unwrap_err();
        assert_eq!(
            err,
            RangeError::IllegalFormat {
                pos: 3,
                text: String::new()
            }
        );
    }

    #[test]
    fn test_two_numbers_without_separator() {
        let err = RangeSetBuilder::parse(Some("1 2"), None).unwrap_err();
        assert_eq!(
            err,
            RangeError::IllegalFormat {
                pos: 3,
                text: "2".to_string()
            }
        );
    }

    #[test]
    fn test_bare_serial_is_illegal() {
        let err = RangeSetBuilder::parse(Some("-"), None).unwrap_err();
        assert!(matches!(err, RangeError::IllegalFormat { .. }));
    }

    #[test]
    fn test_oversized_number_is_illegal_number() {
        // 32 digits exceed the decimal mantissa
        let err =
            RangeSetBuilder::parse(Some("99999999999999999999999999999999"), None).unwrap_err();
        assert!(matches!(err, RangeError::IllegalNumber { pos: 1, .. }));
    }
}
