//! # rangespec
//!
//! Parsing, canonicalization, and iteration of natural-number range
//! specifications such as `"-3,5,7,10-13,20-"`.
//!
//! A specification string is tokenized, parsed item by item, and folded
//! into a canonical set of disjoint, ascending, merged sub-ranges. The
//! canonical form round-trips: serializing a parsed set and re-parsing
//! the output yields the same set.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! set       → RangeSet aggregate (canonical, merged, sorted)
//!   ↓
//! parser    → Logos lexer, grammar-driven builder, RangeError
//!   ↓
//! range     → ArithmeticRange, SingletonRange, typed iterators
//!   ↓
//! num       → Width classifier, truncating casts
//! ```
//!
//! ## Example
//!
//! ```
//! use rangespec::RangeSet;
//!
//! let set = RangeSet::parse(Some("3-4,1-2,7"), None).unwrap();
//! assert_eq!(set.to_range_string(), "1-4,7");
//! let values: Vec<i64> = set.iter_i64().collect();
//! assert_eq!(values, vec![1, 2, 3, 4, 7]);
//! ```

// ============================================================================
// MODULES (dependency order: num → range → parser → set)
// ============================================================================

/// Numeric foundation: Width classifier, truncating casts
pub mod num;

/// Range value types: ArithmeticRange, SingletonRange, iterators
pub mod range;

/// Parser: Logos lexer, grammar-driven set builder, RangeError
pub mod parser;

/// Canonical aggregate: RangeSet
pub mod set;

// Re-export commonly needed items
pub use num::{Width, classify};
pub use parser::{RangeError, RangeSetBuilder, RangeTokenizer, Token, TokenKind};
pub use range::{ArithmeticRange, Range, SingletonRange};
pub use set::RangeSet;

/// Re-export foundation types for convenience
pub use rust_decimal::Decimal;
pub use text_size::TextSize;
