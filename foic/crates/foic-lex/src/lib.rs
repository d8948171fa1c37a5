//! foic-lex - Streaming Lexer for the Foi Language
//!
//! This crate turns Foi source text into a lazily produced stream of typed
//! tokens, for syntax highlighting and for downstream parsing. It does not
//! build a tree and does not validate grammar: every character ends up in
//! exactly one token, and malformed input simply lexes as something.
//!
//! # Example Usage
//!
//! ```
//! use foic_lex::{Lexer, TokenKind};
//!
//! let source = r#"def x: "Hello world!"; log(x);"#;
//!
//! for token in Lexer::new(source) {
//!     println!("{:>20} {:?}", token.kind, token.value);
//! }
//!
//! let first = Lexer::new(source).next().unwrap();
//! assert_eq!(first.kind, TokenKind::Keyword);
//! assert_eq!((first.start, first.end), (0, 2));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token-kind definitions
//! - [`tables`] - Fixed classification tables
//! - [`lexer`] - State stack, per-state handlers and the token assembler
//! - [`cursor`] - Character cursor over a streaming input
//!
//! # How Tokens Are Formed
//!
//! Each character is handed to the handler of the current lexing mode
//! (top-level code, string, escaped string, interpolated region, escaped
//! number, comment). The handler produces a raw one-character token, grows
//! the newest pending token, or asks for the character to be replayed in
//! another mode. Raw tokens then pass through an assembler holding up to two
//! pending tokens, which resolves the context-sensitive cases:
//!
//! - `1.5` is one NUMBER, `1..5` is NUMBER, DOUBLE_PERIOD, NUMBER
//! - `3 - 4` has a minus operator, `(-4)` a negative number
//! - `123abc` and `x1` are identifiers
//! - `:as` is a keyword, `?and` and `!empty` are boolean operators
//! - `~map` is a comprehension
//!
//! ## Escapes
//!
//! - `\"..."` escaped string, whitespace lexed separately
//! - `` \`"... `expr` ..." `` interpolated string
//! - `` \\`"..." `` interpolated string with whitespace lexed separately
//! - `\12`, `\h1F`, `\u263A`, `\b101`, `\o17`, `\@ff` escaped numbers
//!
//! ## Comments
//!
//! - `// line`
//! - `/* block */`
//! - `/// doc block ///`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::state::{StateKind, StringMode};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect `(kind, value)` pairs from source.
    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source).map(|t| (t.kind, t.value)).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        use TokenKind::*;

        let tokens = lex_all(r#"def x: "Hello world!"; log(x);"#);
        let expected = vec![
            (Keyword, "def"),
            (Whitespace, " "),
            (General, "x"),
            (Colon, ":"),
            (Whitespace, " "),
            (DoubleQuote, "\""),
            (String, "Hello world!"),
            (DoubleQuote, "\""),
            (Semicolon, ";"),
            (Whitespace, " "),
            (General, "log"),
            (OpenParen, "("),
            (General, "x"),
            (CloseParen, ")"),
            (Semicolon, ";"),
        ];
        let expected: Vec<_> = expected.into_iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_scenario_offsets() {
        let tokens = tokenize(r#"def x: "Hello world!"; log(x);"#);
        let string = &tokens[6];
        assert_eq!(string.kind, TokenKind::String);
        assert_eq!((string.start, string.end), (8, 19));
        let log = &tokens[10];
        assert_eq!((log.start, log.end), (23, 25));
    }

    #[test]
    fn test_number_literal_boundary() {
        assert_eq!(lex_all("123abc"), vec![(TokenKind::General, "123abc".to_string())]);
    }

    #[test]
    fn test_decimal_vs_range() {
        assert_eq!(lex_all("1.5"), vec![(TokenKind::Number, "1.5".to_string())]);
        assert_eq!(
            lex_all("1..5"),
            vec![
                (TokenKind::Number, "1".to_string()),
                (TokenKind::DoublePeriod, "..".to_string()),
                (TokenKind::Number, "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_sign_disambiguation() {
        use TokenKind::*;
        assert_eq!(kinds("3 - 4"), vec![Number, Whitespace, Hyphen, Whitespace, Number]);
        assert_eq!(
            lex_all("(-4)"),
            vec![
                (OpenParen, "(".to_string()),
                (Number, "-4".to_string()),
                (CloseParen, ")".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_fusion() {
        assert_eq!(lex_all(":as"), vec![(TokenKind::Keyword, ":as".to_string())]);
        assert_eq!(
            lex_all(":zzz"),
            vec![(TokenKind::Colon, ":".to_string()), (TokenKind::General, "zzz".to_string())]
        );
    }

    #[test]
    fn test_boolean_operator_fusion() {
        assert_eq!(lex_all("?and"), vec![(TokenKind::BooleanOper, "?and".to_string())]);
        assert_eq!(lex_all("!empty"), vec![(TokenKind::BooleanOper, "!empty".to_string())]);
        assert_eq!(kinds("?xyz"), vec![TokenKind::Qmark, TokenKind::General]);
    }

    #[test]
    fn test_binary_escape_gating() {
        use TokenKind::*;
        assert_eq!(
            lex_all(r"\b102"),
            vec![
                (Escape, r"\b".to_string()),
                (Number, "10".to_string()),
                (General, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_interpolated_string() {
        use TokenKind::*;
        let tokens = lex_all("\\`\"a `x + 1` b\"");
        let expected = vec![
            (Escape, "\\`"),
            (DoubleQuote, "\""),
            (String, "a "),
            (Backtick, "`"),
            (General, "x"),
            (Whitespace, " "),
            (Plus, "+"),
            (Whitespace, " "),
            (Number, "1"),
            (Backtick, "`"),
            (String, " b"),
            (DoubleQuote, "\""),
        ];
        let expected: Vec<_> = expected.into_iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_specialization() {
        use TokenKind::*;
        assert_eq!(
            kinds("true Maybe ~map defn"),
            vec![Native, Whitespace, Builtin, Whitespace, Comprehension, Whitespace, Keyword]
        );
    }
}
