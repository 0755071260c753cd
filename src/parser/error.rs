//! Error types for range specification parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while parsing a range specification.
///
/// All variants are immediate construction failures: a malformed
/// specification yields no set, never a partially-built one. `pos` is
/// the 1-based position of the offending token's first character in the
/// original input (one past the end for a premature end of text).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A token in number position failed decimal parsing. The lexer
    /// only emits digit runs, so this is defensive; it still fires for
    /// digit runs too long for the decimal type.
    #[error("Illegal number [pos:{pos}, str:\"{text}\"]")]
    IllegalNumber { pos: usize, text: String },

    /// An invalid-character run where no item could be formed from it.
    #[error("Invalid characters [pos:{pos}, str:\"{text}\"]")]
    InvalidCharacters { pos: usize, text: String },

    /// A structurally unexpected token for the range grammar.
    #[error("Illegal number range format [pos:{pos}, str:\"{text}\"]")]
    IllegalFormat { pos: usize, text: String },

    /// The supplied maximum value is negative or not integral.
    #[error("Invalid maximum value: {value}")]
    InvalidMaxValue { value: Decimal },
}

impl RangeError {
    /// Create an illegal-number error.
    pub fn illegal_number(pos: usize, text: impl Into<String>) -> Self {
        Self::IllegalNumber {
            pos,
            text: text.into(),
        }
    }

    /// Create an invalid-characters error.
    pub fn invalid_characters(pos: usize, text: impl Into<String>) -> Self {
        Self::InvalidCharacters {
            pos,
            text: text.into(),
        }
    }

    /// Create an illegal-format error.
    pub fn illegal_format(pos: usize, text: impl Into<String>) -> Self {
        Self::IllegalFormat {
            pos,
            text: text.into(),
        }
    }

    /// Create an invalid-maximum-value error.
    pub fn invalid_max_value(value: Decimal) -> Self {
        Self::InvalidMaxValue { value }
    }

    /// 1-based position of the offending token, if the error carries one.
    pub fn pos(&self) -> Option<usize> {
        match self {
            Self::IllegalNumber { pos, .. }
            | Self::InvalidCharacters { pos, .. }
            | Self::IllegalFormat { pos, .. } => Some(*pos),
            Self::InvalidMaxValue { .. } => None,
        }
    }
}
