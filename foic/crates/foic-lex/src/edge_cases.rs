//! Edge case tests for foic-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, StateKind, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source).into_iter().map(|t| (t.kind, t.value)).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn pair(kind: TokenKind, value: &str) -> (TokenKind, String) {
        (kind, value.to_string())
    }

    fn assert_covers(source: &str, tokens: &[Token]) {
        let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(joined, source);
        for window in tokens.windows(2) {
            assert_eq!(
                window[1].start,
                window[0].end + 1,
                "gap between {} and {}",
                window[0],
                window[1]
            );
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![pair(TokenKind::General, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = tokenize(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].end, 9999);
    }

    #[test]
    fn test_edge_identifier_continuation() {
        assert_eq!(lex_all("x1"), vec![pair(TokenKind::General, "x1")]);
        assert_eq!(lex_all("a_b2"), vec![pair(TokenKind::General, "a_b2")]);
    }

    #[test]
    fn test_edge_triple_period() {
        assert_eq!(kinds("...xs"), vec![TokenKind::TriplePeriod, TokenKind::General]);
    }

    #[test]
    fn test_edge_double_colon() {
        assert_eq!(
            kinds("a::b"),
            vec![TokenKind::General, TokenKind::DoubleColon, TokenKind::General]
        );
    }

    #[test]
    fn test_edge_colon_over_keyword() {
        assert_eq!(lex_all(":over"), vec![pair(TokenKind::Keyword, ":over")]);
        assert_eq!(
            lex_all(":def"),
            vec![pair(TokenKind::Colon, ":"), pair(TokenKind::Keyword, "def")]
        );
    }

    #[test]
    fn test_edge_minus_after_identifier_and_close_paren() {
        use TokenKind::*;
        assert_eq!(kinds("x-1"), vec![General, Hyphen, Number]);
        assert_eq!(kinds("(a)-1"), vec![OpenParen, General, CloseParen, Hyphen, Number]);
        assert_eq!(kinds("[-1]"), vec![OpenBracket, Number, CloseBracket]);
    }

    #[test]
    fn test_edge_minus_sees_through_whitespace() {
        use TokenKind::*;
        assert_eq!(kinds("= -1"), vec![Equal, Whitespace, Number]);
        assert_eq!(kinds("2 -1"), vec![Number, Whitespace, Hyphen, Number]);
    }

    #[test]
    fn test_edge_negative_decimal() {
        assert_eq!(lex_all("-1.25"), vec![pair(TokenKind::Number, "-1.25")]);
    }

    #[test]
    fn test_edge_decimal_then_period() {
        use TokenKind::*;
        assert_eq!(kinds("1.5.x"), vec![Number, Period, General]);
    }

    #[test]
    fn test_edge_number_then_member_access() {
        use TokenKind::*;
        assert_eq!(kinds("1.x"), vec![Number, Period, General]);
    }

    #[test]
    fn test_edge_tilde_alone() {
        use TokenKind::*;
        assert_eq!(kinds("~ x"), vec![Tilde, Whitespace, General]);
        assert_eq!(kinds("~foo"), vec![General]);
    }

    #[test]
    fn test_edge_doubled_quote_in_string() {
        use TokenKind::*;
        assert_eq!(
            lex_all(r#""a""b""#),
            vec![
                pair(DoubleQuote, "\""),
                pair(String, "a"),
                pair(StringEscapedChar, "\"\""),
                pair(String, "b"),
                pair(DoubleQuote, "\""),
            ]
        );
    }

    #[test]
    fn test_edge_empty_string() {
        use TokenKind::*;
        assert_eq!(kinds(r#""";"#), vec![DoubleQuote, DoubleQuote, Semicolon]);
    }

    #[test]
    fn test_edge_unterminated_string() {
        use TokenKind::*;
        let mut lexer = Lexer::new("\"abc");
        let tokens: Vec<_> = lexer.by_ref().collect();
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![DoubleQuote, String]);
        assert_eq!(lexer.state(), StateKind::String);
    }

    #[test]
    fn test_edge_escaped_string_collapses_whitespace() {
        use TokenKind::*;
        assert_eq!(
            lex_all("\\\"a  b\""),
            vec![
                pair(Escape, "\\"),
                pair(DoubleQuote, "\""),
                pair(String, "a"),
                pair(Whitespace, "  "),
                pair(String, "b"),
                pair(DoubleQuote, "\""),
            ]
        );
    }

    #[test]
    fn test_edge_spacing_interpolation() {
        use TokenKind::*;
        assert_eq!(
            kinds("\\\\`\"a `b`\""),
            vec![Escape, DoubleQuote, String, Whitespace, Backtick, General, Backtick, DoubleQuote]
        );
    }

    #[test]
    fn test_edge_backtick_literal_in_interpolated_string() {
        use TokenKind::*;
        assert_eq!(
            lex_all("\\`\"a``b\""),
            vec![
                pair(Escape, "\\`"),
                pair(DoubleQuote, "\""),
                pair(String, "a"),
                pair(StringEscapedChar, "``"),
                pair(String, "b"),
                pair(DoubleQuote, "\""),
            ]
        );
    }

    #[test]
    fn test_edge_backtick_in_regular_escaped_string_is_text() {
        use TokenKind::*;
        assert_eq!(kinds("\\\"a`b\""), vec![Escape, DoubleQuote, String, DoubleQuote]);
    }

    #[test]
    fn test_edge_string_inside_interpolation() {
        use TokenKind::*;
        assert_eq!(
            kinds("\\`\"`\"x\"`\""),
            vec![
                Escape,
                DoubleQuote,
                Backtick,
                DoubleQuote,
                String,
                DoubleQuote,
                Backtick,
                DoubleQuote,
            ]
        );
    }

    #[test]
    fn test_edge_hex_and_monad_escapes() {
        use TokenKind::*;
        assert_eq!(
            lex_all(r"\h1Fz"),
            vec![pair(Escape, r"\h"), pair(Number, "1F"), pair(General, "z")]
        );
        assert_eq!(lex_all(r"\@ff.8"), vec![pair(Escape, r"\@"), pair(Number, "ff.8")]);
    }

    #[test]
    fn test_edge_escaped_decimal_with_separators() {
        use TokenKind::*;
        assert_eq!(lex_all(r"\1_000.5"), vec![pair(Escape, r"\"), pair(Number, "1_000.5")]);
    }

    #[test]
    fn test_edge_octal_rejects_eight() {
        use TokenKind::*;
        assert_eq!(
            lex_all(r"\o178"),
            vec![pair(Escape, r"\o"), pair(Number, "17"), pair(General, "8")]
        );
    }

    #[test]
    fn test_edge_negative_escaped_number() {
        use TokenKind::*;
        assert_eq!(lex_all(r"\h-A"), vec![pair(Escape, r"\h"), pair(Number, "-A")]);
        assert_eq!(kinds(r"\u1-1"), vec![Escape, Number, Hyphen, Number]);
    }

    #[test]
    fn test_edge_escaped_number_range() {
        use TokenKind::*;
        assert_eq!(kinds(r"\1..5"), vec![Escape, Number, DoublePeriod, Number]);
    }

    #[test]
    fn test_edge_escaped_number_ends_at_operator() {
        use TokenKind::*;
        assert_eq!(kinds(r"\b11+1"), vec![Escape, Number, Plus, Number]);
    }

    #[test]
    fn test_edge_line_comment() {
        use TokenKind::*;
        assert_eq!(
            lex_all("x // note\ny"),
            vec![
                pair(General, "x"),
                pair(Whitespace, " "),
                pair(Comment, "// note"),
                pair(Whitespace, "\n"),
                pair(General, "y"),
            ]
        );
    }

    #[test]
    fn test_edge_block_comment() {
        use TokenKind::*;
        assert_eq!(
            lex_all("/* a\nb */c"),
            vec![pair(Comment, "/* a\nb */"), pair(General, "c")]
        );
    }

    #[test]
    fn test_edge_doc_block_comment() {
        use TokenKind::*;
        assert_eq!(
            lex_all("/// doc\nmore ///x"),
            vec![pair(Comment, "/// doc\nmore ///"), pair(General, "x")]
        );
    }

    #[test]
    fn test_edge_comment_is_transparent_to_minus() {
        use TokenKind::*;
        assert_eq!(kinds("x -1"), vec![General, Whitespace, Hyphen, Number]);
        assert_eq!(
            kinds("x /*c*/ -1"),
            vec![General, Whitespace, Comment, Whitespace, Hyphen, Number]
        );
        assert_eq!(
            kinds("x //c\n-1"),
            vec![General, Whitespace, Comment, Whitespace, Hyphen, Number]
        );
        assert_eq!(
            lex_all("= /*c*/ -1"),
            vec![
                pair(Equal, "="),
                pair(Whitespace, " "),
                pair(Comment, "/*c*/"),
                pair(Whitespace, " "),
                pair(Number, "-1"),
            ]
        );
        assert_eq!(kinds("(/**/-1)"), vec![OpenParen, Comment, Number, CloseParen]);
    }

    #[test]
    fn test_edge_division_is_not_comment() {
        use TokenKind::*;
        assert_eq!(kinds("a / b"), vec![General, Whitespace, ForwardSlash, Whitespace, General]);
    }

    #[test]
    fn test_edge_unicode_whitespace_and_offsets() {
        let source = "a\u{3000}λ\u{00A0}b";
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[3].kind, TokenKind::Whitespace);
        assert_eq!((tokens[4].start, tokens[4].end), (4, 4));
        assert_covers(source, &tokens);
    }

    #[test]
    fn test_edge_at_and_other_punctuation() {
        use TokenKind::*;
        assert_eq!(
            kinds("@#$%^&*|<>,'"),
            vec![
                At, Hash, Dollar, Percent, Caret, Ampersand, Star, Pipe, OpenAngle, CloseAngle,
                Comma, SingleQuote,
            ]
        );
    }

    #[test]
    fn test_edge_mixed_program_is_covered() {
        let source = "defn add(x,y) ^(x + y);\n\
                      def list: < 1, -2, 3.5 >;\n\
                      def msg: \\`\"total: `add(1,2)` \"\"units\"\"\";\n\
                      list ~each (x) { log(x) }; // done\n\
                      /* trailing */ ?in !has :over ::\\h-fF \\b1012";
        let tokens = tokenize(source);
        assert_covers(source, &tokens);
    }

    #[test]
    fn test_edge_streaming_matches_whole_string() {
        let source = "def x: \\`\"a `1.5 + -2` b\";";
        let whole = tokenize(source);
        let chars: Vec<char> = source.chars().collect();
        let streamed: Vec<_> = Lexer::from_chars(chars.into_iter()).collect();
        assert_eq!(whole, streamed);
    }
}
