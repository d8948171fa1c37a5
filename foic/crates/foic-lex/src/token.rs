//! Token type definitions.
//!
//! A [`Token`] is a classified, positioned run of source text. Offsets are
//! zero-based character offsets, inclusive on both ends, so the values of all
//! tokens of one pass concatenate back to the exact input.

use std::fmt;

use foic_util::Span;
use serde::{Deserialize, Serialize};

use crate::tables;

/// The closed set of token kinds.
///
/// Punctuation kinds map one-to-one onto a single source character (plus the
/// fused `::`, `..` and `...`). `General` is raw identifier-like text; it is
/// specialized into [`TokenKind::Native`], [`TokenKind::Keyword`],
/// [`TokenKind::Builtin`] or [`TokenKind::Comprehension`] when the token is
/// emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `~`
    Tilde,
    /// `!`
    Exmark,
    /// `#`
    Hash,
    /// `$`
    Dollar,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `&`
    Ampersand,
    /// `*`
    Star,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `-`
    Hyphen,
    /// `+`
    Plus,
    /// `=`
    Equal,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `|`
    Pipe,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `;`
    Semicolon,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `` ` ``
    Backtick,
    /// `<`
    OpenAngle,
    /// `>`
    CloseAngle,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `..`
    DoublePeriod,
    /// `...`
    TriplePeriod,
    /// `?`
    Qmark,
    /// `/`
    ForwardSlash,
    /// `@`
    At,
    /// A run of whitespace characters
    Whitespace,
    /// Identifier-like text
    General,
    /// Literal text inside a string
    String,
    /// A doubled quote or backtick standing for one literal character
    StringEscapedChar,
    /// A numeric literal, possibly signed or with a decimal point
    Number,
    /// A backslash escape prefix such as `\`, `\h` or `` \` ``
    Escape,
    /// A line, block or doc-block comment
    Comment,
    /// `empty`, `true`, `false`
    Native,
    /// A reserved word, including colon-prefixed forms like `:as`
    Keyword,
    /// A builtin type or monad name
    Builtin,
    /// A tilde-prefixed comprehension such as `~map`
    Comprehension,
    /// A named boolean operator such as `?and` or `!empty`
    BooleanOper,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 45] = [
        TokenKind::Tilde,
        TokenKind::Exmark,
        TokenKind::Hash,
        TokenKind::Dollar,
        TokenKind::Percent,
        TokenKind::Caret,
        TokenKind::Ampersand,
        TokenKind::Star,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Hyphen,
        TokenKind::Plus,
        TokenKind::Equal,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Pipe,
        TokenKind::Colon,
        TokenKind::DoubleColon,
        TokenKind::Semicolon,
        TokenKind::SingleQuote,
        TokenKind::DoubleQuote,
        TokenKind::Backtick,
        TokenKind::OpenAngle,
        TokenKind::CloseAngle,
        TokenKind::Comma,
        TokenKind::Period,
        TokenKind::DoublePeriod,
        TokenKind::TriplePeriod,
        TokenKind::Qmark,
        TokenKind::ForwardSlash,
        TokenKind::At,
        TokenKind::Whitespace,
        TokenKind::General,
        TokenKind::String,
        TokenKind::StringEscapedChar,
        TokenKind::Number,
        TokenKind::Escape,
        TokenKind::Comment,
        TokenKind::Native,
        TokenKind::Keyword,
        TokenKind::Builtin,
        TokenKind::Comprehension,
        TokenKind::BooleanOper,
    ];

    /// Returns the kind for a single punctuation character.
    ///
    /// Characters with context-dependent meaning (`\`, `` ` ``, `"`, `@`,
    /// digits, whitespace, letters) are not covered here; the base state
    /// decides those itself.
    ///
    /// # Example
    ///
    /// ```
    /// use foic_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::punctuation('('), Some(TokenKind::OpenParen));
    /// assert_eq!(TokenKind::punctuation('a'), None);
    /// ```
    pub fn punctuation(ch: char) -> Option<TokenKind> {
        let kind = match ch {
            '~' => TokenKind::Tilde,
            '!' => TokenKind::Exmark,
            '#' => TokenKind::Hash,
            '$' => TokenKind::Dollar,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '&' => TokenKind::Ampersand,
            '*' => TokenKind::Star,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '-' => TokenKind::Hyphen,
            '+' => TokenKind::Plus,
            '=' => TokenKind::Equal,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '|' => TokenKind::Pipe,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '\'' => TokenKind::SingleQuote,
            '<' => TokenKind::OpenAngle,
            '>' => TokenKind::CloseAngle,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Period,
            '?' => TokenKind::Qmark,
            '/' => TokenKind::ForwardSlash,
            _ => return None,
        };
        Some(kind)
    }

    /// The wire name of the kind, e.g. `"DOUBLE_QUOTE"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Tilde => "TILDE",
            TokenKind::Exmark => "EXMARK",
            TokenKind::Hash => "HASH",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Percent => "PERCENT",
            TokenKind::Caret => "CARET",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Star => "STAR",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Hyphen => "HYPHEN",
            TokenKind::Plus => "PLUS",
            TokenKind::Equal => "EQUAL",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::Pipe => "PIPE",
            TokenKind::Colon => "COLON",
            TokenKind::DoubleColon => "DOUBLE_COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::SingleQuote => "SINGLE_QUOTE",
            TokenKind::DoubleQuote => "DOUBLE_QUOTE",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::OpenAngle => "OPEN_ANGLE",
            TokenKind::CloseAngle => "CLOSE_ANGLE",
            TokenKind::Comma => "COMMA",
            TokenKind::Period => "PERIOD",
            TokenKind::DoublePeriod => "DOUBLE_PERIOD",
            TokenKind::TriplePeriod => "TRIPLE_PERIOD",
            TokenKind::Qmark => "QMARK",
            TokenKind::ForwardSlash => "FORWARD_SLASH",
            TokenKind::At => "AT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::General => "GENERAL",
            TokenKind::String => "STRING",
            TokenKind::StringEscapedChar => "STRING_ESCAPED_CHAR",
            TokenKind::Number => "NUMBER",
            TokenKind::Escape => "ESCAPE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Native => "NATIVE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Builtin => "BUILTIN",
            TokenKind::Comprehension => "COMPREHENSION",
            TokenKind::BooleanOper => "BOOLEAN_OPER",
        }
    }

    /// Whether consumers should display this kind as an operator.
    pub fn is_operator(self) -> bool {
        tables::OPERATORS.contains(&self)
    }

    /// Whether a token of this kind can close an expression, so that a
    /// following `-` reads as binary minus rather than a sign.
    pub const fn ends_expression(self) -> bool {
        matches!(
            self,
            TokenKind::General
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::DoubleQuote
                | TokenKind::CloseParen
                | TokenKind::CloseBracket
                | TokenKind::CloseBrace
        )
    }

    /// Kinds that never influence the minus/sign decision.
    pub(crate) const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of source text.
///
/// Serializes as `{ "type": "GENERAL", "value": "x", "start": 4, "end": 4 }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's classification
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// The exact source text
    pub value: String,
    /// Offset of the first character
    pub start: usize,
    /// Offset of the last character (inclusive)
    pub end: usize,
}

impl Token {
    /// Creates a token for `value` starting at `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use foic_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::General, "log", 11);
    /// assert_eq!(token.end, 13);
    /// ```
    pub fn new(kind: TokenKind, value: impl Into<String>, start: usize) -> Self {
        let value = value.into();
        let len = value.chars().count();
        Self {
            kind,
            value,
            start,
            end: start + len.saturating_sub(1),
        }
    }

    /// Creates a single-character token.
    pub fn from_char(kind: TokenKind, ch: char, start: usize) -> Self {
        Self {
            kind,
            value: ch.to_string(),
            start,
            end: start,
        }
    }

    /// Appends one character, keeping `end` in step with `value`.
    pub(crate) fn push(&mut self, ch: char) {
        self.value.push(ch);
        self.end += 1;
    }

    /// Appends the text of a token that directly follows this one.
    pub(crate) fn absorb(&mut self, next: Token) {
        debug_assert!(self.span().is_followed_by(next.span()), "absorbed token must be adjacent");
        self.value.push_str(&next.value);
        self.end = next.end;
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Tokens always cover at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The source range of the token.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}..={}", self.kind, self.value, self.start, self.end)
    }
}
