//! Fixed classification tables.
//!
//! These are data, not derived: the assembler consults them when it releases a
//! GENERAL token, when it decides whether a `:`-prefixed word is a keyword,
//! and when it decides whether a `?`/`!`-prefixed word is a named boolean
//! operator. Consumers use [`OPERATORS`] to decide which kinds to display as
//! operators.

use crate::token::TokenKind;

/// Kinds displayed as operators.
pub const OPERATORS: &[TokenKind] = &[
    TokenKind::Tilde,
    TokenKind::Exmark,
    TokenKind::Hash,
    TokenKind::Dollar,
    TokenKind::Percent,
    TokenKind::Caret,
    TokenKind::Ampersand,
    TokenKind::Star,
    TokenKind::Hyphen,
    TokenKind::Plus,
    TokenKind::Equal,
    TokenKind::OpenBracket,
    TokenKind::CloseBracket,
    TokenKind::Pipe,
    TokenKind::SingleQuote,
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
];

/// Native literal names.
pub const NATIVES: &[&str] = &["empty", "true", "false"];

/// Reserved words, including the colon-prefixed forms.
pub const KEYWORDS: &[&str] = &["def", "defn", "deft", "import", "export", "as", "over", ":as", ":over"];

/// Builtin type and monad names.
pub const BUILTINS: &[&str] = &[
    "Id",
    "Value",
    "Number",
    "None",
    "Maybe",
    "Either",
    "Left",
    "Right",
    "Promise",
    "IO",
    "Gen",
    "PushStream",
    "PullStream",
    "Channel",
    "List",
    "Tuple",
    "Record",
    "Int",
    "Integer",
    "Float",
    "Bool",
    "String",
    "BigInt",
    "Type",
];

/// Tilde-prefixed comprehension names.
pub const COMPREHENSIONS: &[&str] = &[
    "~each", "~map", "~filter", "~fold", "~foldR", "~chain", "~bind", "~flatMap", "~ap", "~cata",
    "~do",
];

/// Words that fuse with a leading `?` or `!` into a BOOLEAN_OPER.
pub const BOOLEAN_NAMED_OPERATORS: &[&str] = &["and", "or", "as", "in", "has", "empty"];

/// Codepoints lexed as WHITESPACE.
pub const WHITESPACE: &[char] = &[
    '\u{0009}', '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0020}', '\u{0085}', '\u{00A0}',
    '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}',
    '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}',
    '\u{3000}', '\u{180E}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}',
];

/// Specializes released GENERAL text.
///
/// Natives win over keywords, keywords over builtins, builtins over
/// comprehensions; anything else stays [`TokenKind::General`].
///
/// # Example
///
/// ```
/// use foic_lex::{tables, TokenKind};
///
/// assert_eq!(tables::classify("def"), TokenKind::Keyword);
/// assert_eq!(tables::classify("~map"), TokenKind::Comprehension);
/// assert_eq!(tables::classify("log"), TokenKind::General);
/// ```
pub fn classify(text: &str) -> TokenKind {
    if NATIVES.contains(&text) {
        TokenKind::Native
    } else if KEYWORDS.contains(&text) {
        TokenKind::Keyword
    } else if BUILTINS.contains(&text) {
        TokenKind::Builtin
    } else if COMPREHENSIONS.contains(&text) {
        TokenKind::Comprehension
    } else {
        TokenKind::General
    }
}

/// Whether `ch` belongs to the whitespace set.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    WHITESPACE.contains(&ch)
}
