//! Logos-based lexer for range specification strings
//!
//! Fast tokenization using the logos crate. The lexer never errors:
//! runs of characters that cannot start any token surface as
//! [`TokenKind::Invalid`] for the grammar layer to reject with position
//! information.

use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Token kinds of the range specification grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Maximal run of decimal digits.
    Number,
    /// The range-join operator `-`.
    Serial,
    /// The item separator `,`.
    Delimiter,
    /// Maximal run of characters that cannot start any other token.
    Invalid,
    /// End of input. Terminal; further advances are idempotent.
    Eot,
}

impl TokenKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Serial => "'-'",
            Self::Delimiter => "','",
            Self::Invalid => "invalid characters",
            Self::Eot => "end of text",
        }
    }
}

/// Logos token enum - maps to TokenKind
///
/// The four character classes cover every possible input byte, so the
/// logos error branch is unreachable; it is mapped to `Invalid` anyway.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"[0-9]+")]
    Number,

    #[token("-")]
    Serial,

    #[token(",")]
    Delimiter,

    #[regex(r"[^0-9,\- \t\r\n]+")]
    Invalid,
}

/// Pull-style tokenizer over a specification string.
///
/// Each [`advance`](Self::advance) skips surrounding whitespace, moves
/// to the next token, and returns its kind. The last token's kind,
/// text, and offset stay observable between advances:
///
/// - before the first advance: text is `Some("")`, offset is `None`
/// - at end of text: text and offset are `None`, and further advances
///   keep returning [`TokenKind::Eot`]
///
/// Offsets are byte positions of the token's first non-whitespace
/// character in the original string.
pub struct RangeTokenizer<'a> {
    inner: logos::Lexer<'a, RawToken>,
    kind: TokenKind,
    text: Option<&'a str>,
    offset: Option<TextSize>,
}

impl<'a> RangeTokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: RawToken::lexer(input),
            kind: TokenKind::Eot,
            text: Some(""),
            offset: None,
        }
    }

    /// Advance past whitespace to the next token and return its kind.
    pub fn advance(&mut self) -> TokenKind {
        while let Some(raw) = self.inner.next() {
            let kind = match raw {
                Ok(RawToken::Whitespace) => continue,
                Ok(RawToken::Number) => TokenKind::Number,
                Ok(RawToken::Serial) => TokenKind::Serial,
                Ok(RawToken::Delimiter) => TokenKind::Delimiter,
                Ok(RawToken::Invalid) | Err(()) => TokenKind::Invalid,
            };
            self.kind = kind;
            self.text = Some(self.inner.slice());
            self.offset = Some(TextSize::new(self.inner.span().start as u32));
            return kind;
        }
        self.kind = TokenKind::Eot;
        self.text = None;
        self.offset = None;
        TokenKind::Eot
    }

    /// Kind of the last token returned by [`advance`](Self::advance).
    pub fn token_kind(&self) -> TokenKind {
        self.kind
    }

    /// Text of the last token; `None` at end of text, `Some("")` before
    /// the first advance.
    pub fn token_text(&self) -> Option<&'a str> {
        self.text
    }

    /// Byte offset of the last token's first character; `None` when no
    /// token is current.
    pub fn token_offset(&self) -> Option<TextSize> {
        self.offset
    }
}

/// Tokenize an entire string into a Vec, whitespace skipped
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut tokenizer = RangeTokenizer::new(input);
    while tokenizer.advance() != TokenKind::Eot {
        // advance just produced a token, so text and offset are set
        if let (Some(text), Some(offset)) = (tokenizer.token_text(), tokenizer.token_offset()) {
            tokens.push(Token {
                kind: tokenizer.token_kind(),
                text,
                offset,
            });
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_spec() {
        let tokens = tokenize("1-3,20-");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Serial,
                TokenKind::Number,
                TokenKind::Delimiter,
                TokenKind::Number,
                TokenKind::Serial,
            ]
        );
        assert_eq!(tokens[0].text, "1");
        assert_eq!(tokens[4].text, "20");
    }

    #[test]
    fn test_lex_skips_whitespace_but_keeps_positions() {
        let tokens = tokenize("  12 , 34");
        assert_eq!(tokens[0].text, "12");
        assert_eq!(tokens[0].offset, TextSize::new(2));
        assert_eq!(tokens[1].text, ",");
        assert_eq!(tokens[1].offset, TextSize::new(5));
        assert_eq!(tokens[2].text, "34");
        assert_eq!(tokens[2].offset, TextSize::new(7));
    }

    #[test]
    fn test_lex_invalid_run_is_maximal() {
        let tokens = tokenize("1-3,abc,4");
        assert_eq!(tokens[4].kind, TokenKind::Invalid);
        assert_eq!(tokens[4].text, "abc");
        assert_eq!(tokens[4].offset, TextSize::new(4));
    }

    #[test]
    fn test_lex_invalid_stops_at_valid_tokens() {
        let tokens = tokenize("12ab34");
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["12", "ab", "34"]);
        assert_eq!(tokens[1].kind, TokenKind::Invalid);
    }

    #[test]
    fn test_initial_state() {
        let tokenizer = RangeTokenizer::new("1,2");
        assert_eq!(tokenizer.token_text(), Some(""));
        assert_eq!(tokenizer.token_offset(), None);
    }

    #[test]
    fn test_eot_is_idempotent() {
        let mut tokenizer = RangeTokenizer::new("7");
        assert_eq!(tokenizer.advance(), TokenKind::Number);
        assert_eq!(tokenizer.advance(), TokenKind::Eot);
        assert_eq!(tokenizer.advance(), TokenKind::Eot);
        assert_eq!(tokenizer.token_text(), None);
        assert_eq!(tokenizer.token_offset(), None);
    }

    #[test]
    fn test_empty_input_is_immediately_eot() {
        let mut tokenizer = RangeTokenizer::new("");
        assert_eq!(tokenizer.advance(), TokenKind::Eot);
    }

    #[test]
    fn test_whitespace_splits_numbers() {
        let tokens = tokenize("1 2");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }
}
