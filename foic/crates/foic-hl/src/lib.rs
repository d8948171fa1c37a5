//! foic-hl - HTML Syntax Highlighting for Foi
//!
//! Maps each token kind to one of nine display classes (`t0` to `t8`) and
//! renders tokens as HTML fragments. Rendering is lazy: [`highlight`] adapts
//! any token iterator, so it composes directly with the streaming lexer.
//!
//! # Example
//!
//! ```
//! use foic_hl::highlight;
//! use foic_lex::Lexer;
//!
//! let html: String = highlight(Lexer::new("def x: 1;")).collect();
//! assert_eq!(
//!     html,
//!     "<i class=\"t6\" title=\"KEYWORD\">def</i> \
//!      <i class=\"t1\" title=\"GENERAL\">x</i>\
//!      <i class=\"t6\" title=\"COLON\">:</i> \
//!      <i class=\"t7\" title=\"NUMBER\">1</i>\
//!      <i class=\"t6\" title=\"SEMICOLON\">;</i>"
//! );
//! ```

#![warn(missing_docs)]

use std::borrow::Cow;
use std::fmt;

use foic_lex::{Lexer, Token, TokenKind};

/// Display class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightClass {
    /// Comments, double quotes, parentheses
    T0,
    /// Plain identifiers
    T1,
    /// String text
    T2,
    /// Escapes and braces
    T3,
    /// Builtins
    T4,
    /// Natives
    T5,
    /// Keywords, colons, semicolons, comprehensions, boolean operators
    T6,
    /// Numbers
    T7,
    /// Remaining operators
    T8,
    /// A kind with no assigned class
    Unassigned,
}

impl HighlightClass {
    /// CSS class name.
    pub const fn as_str(self) -> &'static str {
        match self {
            HighlightClass::T0 => "t0",
            HighlightClass::T1 => "t1",
            HighlightClass::T2 => "t2",
            HighlightClass::T3 => "t3",
            HighlightClass::T4 => "t4",
            HighlightClass::T5 => "t5",
            HighlightClass::T6 => "t6",
            HighlightClass::T7 => "t7",
            HighlightClass::T8 => "t8",
            HighlightClass::Unassigned => "oops",
        }
    }
}

impl fmt::Display for HighlightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed kind-to-class mapping.
pub fn class_for(kind: TokenKind) -> HighlightClass {
    use TokenKind::*;

    match kind {
        Comment | DoubleQuote | OpenParen | CloseParen => HighlightClass::T0,
        General => HighlightClass::T1,
        String | StringEscapedChar => HighlightClass::T2,
        Escape | OpenBrace | CloseBrace => HighlightClass::T3,
        Builtin => HighlightClass::T4,
        Native => HighlightClass::T5,
        Keyword | Colon | DoubleColon | Semicolon | Comprehension | BooleanOper => {
            HighlightClass::T6
        },
        Number => HighlightClass::T7,
        kind if kind.is_operator() => HighlightClass::T8,
        _ => HighlightClass::Unassigned,
    }
}

/// Escapes `&`, `<` and `>`.
///
/// # Example
///
/// ```
/// use foic_hl::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Renders one token. WHITESPACE passes through unchanged.
pub fn fragment(token: &Token) -> String {
    if token.kind == TokenKind::Whitespace {
        return token.value.clone();
    }
    format!(
        "<i class=\"{}\" title=\"{}\">{}</i>",
        class_for(token.kind),
        token.kind,
        escape_html(&token.value)
    )
}

/// Lazy adapter yielding one HTML fragment per token.
#[derive(Debug, Clone)]
pub struct Highlight<I> {
    tokens: I,
}

impl<I> Iterator for Highlight<I>
where
    I: Iterator<Item = Token>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next().map(|token| fragment(&token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

/// Highlights a token stream.
pub fn highlight<I>(tokens: I) -> Highlight<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    Highlight {
        tokens: tokens.into_iter(),
    }
}

/// Lexes and highlights a whole source string.
pub fn render(source: &str) -> String {
    highlight(Lexer::new(source)).collect()
}
