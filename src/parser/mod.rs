//! Range specification parser
//!
//! This module turns a specification string into a canonical range set:
//! - **logos** lexes the string into positioned tokens
//! - the builder drives the item grammar and merges ranges on insert
//!
//! ```text
//! Source Text
//!     ↓
//! RangeTokenizer (logos) → positioned tokens
//!     ↓
//! RangeSetBuilder → per-item ranges, merge-on-insert
//!     ↓
//! RangeSet → canonical, sorted, disjoint
//! ```
//!
//! The lexer never errors; malformed input surfaces as `Invalid` tokens
//! that the builder converts into positioned [`RangeError`]s.

mod builder;
mod error;
mod lexer;

pub use builder::RangeSetBuilder;
pub use error::RangeError;
pub use lexer::{RangeTokenizer, Token, TokenKind, tokenize};
