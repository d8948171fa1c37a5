//! Token assembler.
//!
//! Raw tokens produced by the state handlers are not final: a `1` may be the
//! start of `1.5`, a `:` may be the start of the keyword `:as`, a `-` may be
//! the sign of `-4`. The assembler holds at most two such tokens, merges
//! incoming raw tokens into them, and releases them once no rule can extend
//! them any more. Released GENERAL tokens are specialized through
//! [`tables::classify`].

use std::collections::VecDeque;
use std::mem;

use tracing::trace;

use super::state::State;
use crate::tables;
use crate::token::{Token, TokenKind};

/// Tokens awaiting a final decision.
#[derive(Debug, Clone, Default)]
enum Pending {
    #[default]
    Empty,
    One(Token),
    /// A two-token candidate: `NUMBER PERIOD` (decimal) or
    /// `COLON|QMARK|EXMARK GENERAL` (keyword or boolean operator).
    Two(Token, Token),
}

/// Merges raw tokens and decides when they are final.
#[derive(Debug, Clone, Default)]
pub(crate) struct Assembler {
    pending: Pending,
    /// Whether the last significant token can end an expression, making a
    /// following `-` a binary minus.
    minus_op_allowed: bool,
    /// The pending NUMBER came from an escaped number literal.
    escaped_literal: bool,
    /// `minus_op_allowed` as it was before the last FORWARD_SLASH, restored
    /// when that slash turns out to open a comment.
    minus_before_slash: bool,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The newest pending token.
    pub fn last(&self) -> Option<&Token> {
        match &self.pending {
            Pending::Empty => None,
            Pending::One(token) | Pending::Two(_, token) => Some(token),
        }
    }

    /// Routes a raw token, pushing whatever becomes final onto `out`.
    pub fn assemble(&mut self, raw: Token, state: &State, out: &mut VecDeque<Token>) {
        let sign_candidate = raw.kind == TokenKind::Hyphen && !self.minus_op_allowed;
        self.track(raw.kind);

        match mem::take(&mut self.pending) {
            Pending::Empty => self.hold_or_release(raw, sign_candidate, state, out),
            Pending::One(prev) => self.merge_one(prev, raw, sign_candidate, state, out),
            Pending::Two(first, second) => {
                self.merge_two(first, second, raw, sign_candidate, state, out)
            },
        }
    }

    /// Appends `ch` to the newest pending token and retags it as `kind`.
    pub fn extend(
        &mut self,
        kind: TokenKind,
        ch: char,
        pos: usize,
        state: &State,
        out: &mut VecDeque<Token>,
    ) {
        let opens_comment = kind == TokenKind::Comment
            && self.last().is_some_and(|t| t.kind == TokenKind::ForwardSlash);
        if opens_comment {
            self.minus_op_allowed = self.minus_before_slash;
        } else {
            self.track(kind);
        }

        match mem::take(&mut self.pending) {
            Pending::Empty => {
                self.hold_or_release(Token::from_char(kind, ch, pos), false, state, out)
            },
            Pending::One(mut token) => {
                token.push(ch);
                token.kind = kind;
                self.settle(token, state, out);
            },
            Pending::Two(first, mut second) => {
                second.push(ch);
                second.kind = kind;
                if defers(kind, false, state) {
                    self.pending = Pending::Two(first, second);
                } else {
                    release(first, out);
                    release(second, out);
                }
            },
        }
    }

    /// Releases everything still pending. Called once at end of input.
    pub fn flush(&mut self, out: &mut VecDeque<Token>) {
        match mem::take(&mut self.pending) {
            Pending::Empty => {},
            Pending::One(token) => release(token, out),
            Pending::Two(first, second) => resolve_pair(first, second, out),
        }
        self.escaped_literal = false;
        trace!(emitted = out.len(), "flushed pending tokens");
    }

    fn track(&mut self, kind: TokenKind) {
        if kind == TokenKind::ForwardSlash {
            self.minus_before_slash = self.minus_op_allowed;
        }
        if !kind.is_trivia() {
            self.minus_op_allowed = kind.ends_expression();
        }
    }

    fn merge_one(
        &mut self,
        mut prev: Token,
        raw: Token,
        sign_candidate: bool,
        state: &State,
        out: &mut VecDeque<Token>,
    ) {
        use TokenKind::*;

        let merged = match (prev.kind, raw.kind) {
            (Number, Number) | (General, Number) => prev.kind,
            (Hyphen, Number) => Number,
            (Number, General)
                if !self.escaped_literal
                    && !prev.value.contains('.')
                    && !prev.value.starts_with('-') =>
            {
                General
            },
            (Tilde, General) => General,
            (Colon, Colon) => DoubleColon,
            (Period, Period) => DoublePeriod,
            (DoublePeriod, Period) => TriplePeriod,
            (Number, Period)
                if !prev.value.contains('.')
                    && (!self.escaped_literal || matches!(state, State::EscapedNumber(_))) =>
            {
                self.pending = Pending::Two(prev, raw);
                return;
            },
            (Colon | Qmark | Exmark, General) => {
                self.pending = Pending::Two(prev, raw);
                return;
            },
            (a, b) if a == b && matches!(a, Whitespace | General | String | Comment) => a,
            _ => {
                release(prev, out);
                self.hold_or_release(raw, sign_candidate, state, out);
                return;
            },
        };

        prev.absorb(raw);
        prev.kind = merged;
        self.settle(prev, state, out);
    }

    fn merge_two(
        &mut self,
        mut first: Token,
        mut second: Token,
        raw: Token,
        sign_candidate: bool,
        state: &State,
        out: &mut VecDeque<Token>,
    ) {
        use TokenKind::*;

        match (first.kind, second.kind, raw.kind) {
            // 1 . 5
            (Number, Period, Number) => {
                first.absorb(second);
                first.absorb(raw);
                self.pending = Pending::One(first);
            },
            // 1 . . : the number is whole, the periods form a range
            (Number, Period, Period) => {
                release(first, out);
                second.absorb(raw);
                second.kind = DoublePeriod;
                self.escaped_literal = false;
                self.pending = Pending::One(second);
            },
            (Colon | Qmark | Exmark, General, General | Number) => {
                second.absorb(raw);
                self.pending = Pending::Two(first, second);
            },
            _ => {
                resolve_pair(first, second, out);
                self.hold_or_release(raw, sign_candidate, state, out);
            },
        }
    }

    /// Keeps a merged token pending if its kind may still grow.
    fn settle(&mut self, token: Token, state: &State, out: &mut VecDeque<Token>) {
        if defers(token.kind, false, state) {
            self.pending = Pending::One(token);
        } else {
            release(token, out);
        }
    }

    /// Starts a fresh pending token, or releases `raw` straight away.
    fn hold_or_release(
        &mut self,
        raw: Token,
        sign_candidate: bool,
        state: &State,
        out: &mut VecDeque<Token>,
    ) {
        if defers(raw.kind, sign_candidate, state) {
            self.escaped_literal =
                raw.kind == TokenKind::Number && matches!(state, State::EscapedNumber(_));
            self.pending = Pending::One(raw);
        } else {
            release(raw, out);
        }
    }
}

/// Whether a token of `kind` must wait for the next token before it is final.
fn defers(kind: TokenKind, sign_candidate: bool, state: &State) -> bool {
    use TokenKind::*;

    match kind {
        DoubleQuote | Escape | Whitespace | General | String | Number | ForwardSlash | Comment
        | Period | DoublePeriod | Tilde | Qmark | Exmark | Colon => true,
        Hyphen => sign_candidate,
        Backtick => matches!(state, State::EscapedString(_)),
        _ => false,
    }
}

/// Emits a two-token candidate, fusing it when the table says so.
fn resolve_pair(mut first: Token, second: Token, out: &mut VecDeque<Token>) {
    let fused = match first.kind {
        TokenKind::Colon => {
            let word = format!(":{}", second.value);
            tables::KEYWORDS.contains(&word.as_str()).then_some(TokenKind::Keyword)
        },
        TokenKind::Qmark | TokenKind::Exmark => tables::BOOLEAN_NAMED_OPERATORS
            .contains(&second.value.as_str())
            .then_some(TokenKind::BooleanOper),
        _ => None,
    };

    match fused {
        Some(kind) => {
            first.absorb(second);
            first.kind = kind;
            out.push_back(first);
        },
        None => {
            release(first, out);
            release(second, out);
        },
    }
}

/// Final specialization, then emission.
fn release(mut token: Token, out: &mut VecDeque<Token>) {
    match token.kind {
        TokenKind::General => token.kind = tables::classify(&token.value),
        TokenKind::String if token.value == "\"\"" || token.value == "``" => {
            token.kind = TokenKind::StringEscapedChar
        },
        _ => {},
    }
    out.push_back(token);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::state::{EscapedNumber, NumberBase, StringMode};

    fn feed(raws: &[(TokenKind, &str)]) -> Vec<(TokenKind, std::string::String)> {
        let mut assembler = Assembler::new();
        let mut out = VecDeque::new();
        let mut pos = 0;
        for (kind, value) in raws {
            let token = Token::new(*kind, *value, pos);
            pos = token.end + 1;
            assembler.assemble(token, &State::Base, &mut out);
        }
        assembler.flush(&mut out);
        out.into_iter().map(|t| (t.kind, t.value)).collect()
    }

    fn kinds(raws: &[(TokenKind, &str)]) -> Vec<TokenKind> {
        feed(raws).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_digit_runs_merge() {
        use TokenKind::*;
        assert_eq!(
            feed(&[(Number, "1"), (Number, "2"), (Number, "3")]),
            vec![(Number, "123".to_string())]
        );
    }

    #[test]
    fn test_decimal_and_range() {
        use TokenKind::*;
        assert_eq!(
            feed(&[(Number, "1"), (Period, "."), (Number, "5")]),
            vec![(Number, "1.5".to_string())]
        );
        assert_eq!(
            kinds(&[(Number, "1"), (Period, "."), (Period, "."), (Number, "5")]),
            vec![Number, DoublePeriod, Number]
        );
        assert_eq!(kinds(&[(Period, "."), (Period, "."), (Period, ".")]), vec![TriplePeriod]);
    }

    #[test]
    fn test_sign_depends_on_previous_token() {
        use TokenKind::*;
        assert_eq!(
            kinds(&[(OpenParen, "("), (Hyphen, "-"), (Number, "4"), (CloseParen, ")")]),
            vec![OpenParen, Number, CloseParen]
        );
        assert_eq!(
            kinds(&[(Number, "3"), (Whitespace, " "), (Hyphen, "-"), (Number, "4")]),
            vec![Number, Whitespace, Hyphen, Number]
        );
    }

    #[test]
    fn test_minus_operator_is_emitted_at_once() {
        let mut assembler = Assembler::new();
        let mut out = VecDeque::new();
        assembler.assemble(Token::new(TokenKind::General, "x", 0), &State::Base, &mut out);
        assembler.assemble(Token::new(TokenKind::Hyphen, "-", 1), &State::Base, &mut out);
        let kinds: Vec<_> = out.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::General, TokenKind::Hyphen]);
        assert!(assembler.last().is_none());
    }

    #[test]
    fn test_identifier_override() {
        use TokenKind::*;
        assert_eq!(
            feed(&[(Number, "1"), (Number, "2"), (General, "a"), (General, "b")]),
            vec![(General, "12ab".to_string())]
        );
        assert_eq!(
            kinds(&[(Hyphen, "-"), (Number, "1"), (General, "a")]),
            vec![Number, General]
        );
    }

    #[test]
    fn test_colon_keyword_fusion() {
        use TokenKind::*;
        assert_eq!(
            feed(&[(Colon, ":"), (General, "a"), (General, "s")]),
            vec![(Keyword, ":as".to_string())]
        );
        assert_eq!(
            kinds(&[(Colon, ":"), (General, "z"), (Whitespace, " ")]),
            vec![Colon, General, Whitespace]
        );
        assert_eq!(kinds(&[(Colon, ":"), (Colon, ":")]), vec![DoubleColon]);
    }

    #[test]
    fn test_boolean_operator_fusion() {
        use TokenKind::*;
        assert_eq!(kinds(&[(Qmark, "?"), (General, "in")]), vec![BooleanOper]);
        assert_eq!(kinds(&[(Exmark, "!"), (General, "has")]), vec![BooleanOper]);
        assert_eq!(kinds(&[(Exmark, "!"), (General, "x")]), vec![Exmark, General]);
    }

    #[test]
    fn test_tilde_fusion_and_specialization() {
        use TokenKind::*;
        assert_eq!(
            feed(&[(Tilde, "~"), (General, "m"), (General, "ap")]),
            vec![(Comprehension, "~map".to_string())]
        );
        assert_eq!(kinds(&[(Tilde, "~"), (Whitespace, " ")]), vec![Tilde, Whitespace]);
    }

    #[test]
    fn test_homogeneous_runs() {
        use TokenKind::*;
        assert_eq!(
            feed(&[(Whitespace, " "), (Whitespace, "\n"), (String, "a"), (String, "b")]),
            vec![(Whitespace, " \n".to_string()), (String, "ab".to_string())]
        );
    }

    #[test]
    fn test_escaped_literal_is_not_an_identifier() {
        let mut assembler = Assembler::new();
        let mut out = VecDeque::new();
        let binary = State::EscapedNumber(EscapedNumber {
            base: NumberBase::Binary,
            unicode: false,
        });
        assembler.assemble(Token::new(TokenKind::Number, "1", 2), &binary, &mut out);
        assembler.assemble(Token::new(TokenKind::General, "2", 3), &binary, &mut out);
        assembler.flush(&mut out);
        let kinds: Vec<_> = out.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::General]);
    }

    #[test]
    fn test_extend_retags_newest_pending() {
        let mut assembler = Assembler::new();
        let mut out = VecDeque::new();
        assembler.assemble(Token::new(TokenKind::DoubleQuote, "\"", 4), &State::Base, &mut out);
        assembler.extend(TokenKind::StringEscapedChar, '"', 5, &State::Base, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, TokenKind::StringEscapedChar);
        assert_eq!((out[0].start, out[0].end), (4, 5));
    }

    #[test]
    fn test_comment_opener_keeps_minus_decision() {
        let mut assembler = Assembler::new();
        let mut out = VecDeque::new();
        assembler.assemble(Token::new(TokenKind::General, "x", 0), &State::Base, &mut out);
        assembler.assemble(Token::new(TokenKind::ForwardSlash, "/", 1), &State::Base, &mut out);
        assert!(!assembler.minus_op_allowed);
        assembler.extend(TokenKind::Comment, '*', 2, &State::Base, &mut out);
        assert!(assembler.minus_op_allowed);
    }

    #[test]
    fn test_backtick_defers_only_in_escaped_strings() {
        let mut assembler = Assembler::new();
        let mut out = VecDeque::new();
        assembler.assemble(Token::new(TokenKind::Backtick, "`", 0), &State::Base, &mut out);
        assert_eq!(out.len(), 1);
        let string = State::EscapedString(StringMode::Interpolated);
        assembler.assemble(Token::new(TokenKind::Backtick, "`", 1), &string, &mut out);
        assert_eq!(out.len(), 1);
        assert!(assembler.last().is_some());
    }
}
