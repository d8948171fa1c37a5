//! Lexer states, the state stack and the per-character handler protocol.

use std::fmt;

use tracing::trace;

use crate::token::{Token, TokenKind};

/// The open escape sequence, remembered across characters until it is
/// either extended or consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeSeq {
    /// `\`
    Plain,
    /// `\\`
    Double,
    /// `` \` ``
    Interpolated,
    /// `` \\` ``
    InterpolatedSpacing,
    /// `\u`
    Unicode,
    /// `\h`
    Hex,
    /// `\b`
    Binary,
    /// `\o`
    Octal,
    /// `\@`
    Monad,
}

/// How an escaped string treats whitespace and backticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringMode {
    /// Opened by `\"`: whitespace collapses, no interpolation.
    Regular,
    /// Opened by `` \`" ``: interpolation, whitespace is string text.
    Interpolated,
    /// Opened by `` \\`" ``: interpolation and whitespace collapsing.
    InterpolatedSpacing,
}

impl StringMode {
    /// Whether a backtick opens an interpolated region.
    pub const fn interpolates(self) -> bool {
        !matches!(self, StringMode::Regular)
    }

    /// Whether whitespace is lexed as WHITESPACE rather than STRING text.
    pub const fn collapses_whitespace(self) -> bool {
        !matches!(self, StringMode::Interpolated)
    }
}

/// Digit set of an escaped number literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberBase {
    /// `\` followed by a digit: decimal.
    Regular,
    /// `\h` and `\u`
    Hex,
    /// `\b`
    Binary,
    /// `\o`
    Octal,
    /// `\@`: hex digits plus decimal points and separators.
    Monad,
}

impl NumberBase {
    /// Numeric radix of the digit set.
    pub const fn radix(self) -> u32 {
        match self {
            NumberBase::Regular => 10,
            NumberBase::Hex | NumberBase::Monad => 16,
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
        }
    }

    /// Whether `.` and `_` may appear inside the literal.
    pub const fn allows_fraction(self) -> bool {
        matches!(self, NumberBase::Regular | NumberBase::Monad)
    }
}

/// Payload of the escaped-number state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapedNumber {
    /// Accepted digit set
    pub base: NumberBase,
    /// Opened by `\u`; such literals cannot be negative
    pub unicode: bool,
}

impl EscapedNumber {
    /// Payload for the escape that introduces the literal, if it is a
    /// numeric one.
    pub const fn for_escape(escape: EscapeSeq) -> Option<Self> {
        let (base, unicode) = match escape {
            EscapeSeq::Plain => (NumberBase::Regular, false),
            EscapeSeq::Unicode => (NumberBase::Hex, true),
            EscapeSeq::Hex => (NumberBase::Hex, false),
            EscapeSeq::Binary => (NumberBase::Binary, false),
            EscapeSeq::Octal => (NumberBase::Octal, false),
            EscapeSeq::Monad => (NumberBase::Monad, false),
            _ => return None,
        };
        Some(Self { base, unicode })
    }
}

/// One entry of the state stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Top-level code; the permanent bottom of the stack.
    Base,
    /// Inside `"..."`.
    String,
    /// Inside an escape-prefixed string.
    EscapedString(StringMode),
    /// Inside a backtick-delimited region of an interpolated string.
    InterpolatedBase,
    /// Inside an escape-prefixed number literal.
    EscapedNumber(EscapedNumber),
    /// Inside a comment; the form is read back from the pending COMMENT.
    Comment,
}

impl State {
    /// The payload-free kind of this state.
    pub const fn kind(&self) -> StateKind {
        match self {
            State::Base => StateKind::Base,
            State::String => StateKind::String,
            State::EscapedString(_) => StateKind::EscapedString,
            State::InterpolatedBase => StateKind::InterpolatedBase,
            State::EscapedNumber(_) => StateKind::EscapedNumber,
            State::Comment => StateKind::Comment,
        }
    }

    /// Whether this is one of the string-literal states.
    pub const fn is_string(&self) -> bool {
        matches!(self, State::String | State::EscapedString(_))
    }
}

/// Discriminant of [`State`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// [`State::Base`]
    Base,
    /// [`State::String`]
    String,
    /// [`State::EscapedString`]
    EscapedString,
    /// [`State::InterpolatedBase`]
    InterpolatedBase,
    /// [`State::EscapedNumber`]
    EscapedNumber,
    /// [`State::Comment`]
    Comment,
}

impl StateKind {
    /// Display name of the state kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            StateKind::Base => "base",
            StateKind::String => "string",
            StateKind::EscapedString => "escaped_string",
            StateKind::InterpolatedBase => "interpolated_base",
            StateKind::EscapedNumber => "escaped_number",
            StateKind::Comment => "comment",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested change to the state stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Enter a nested state.
    Push(State),
    /// Return to the enclosing state.
    Pop,
}

/// Stack of lexer states with [`State::Base`] at the bottom.
#[derive(Debug, Clone)]
pub struct StateStack {
    states: Vec<State>,
    prev: Option<State>,
}

impl StateStack {
    /// Creates a stack holding only [`State::Base`].
    pub fn new() -> Self {
        Self {
            states: vec![State::Base],
            prev: None,
        }
    }

    /// The current state.
    pub fn top(&self) -> State {
        self.states.last().copied().unwrap_or(State::Base)
    }

    /// The state most recently left, by a pop or by a push over it.
    pub fn prev(&self) -> Option<State> {
        self.prev
    }

    /// Number of states, the base included.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Applies a transition.
    ///
    /// Popping never removes the base. Pushing a state whose kind equals the
    /// current top's kind is a no-op.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Pop => {
                if self.states.len() > 1 {
                    let left = self.states.pop();
                    trace!(state = ?left, depth = self.states.len(), "pop state");
                    self.prev = left;
                }
            },
            Transition::Push(state) => {
                let top = self.top();
                if top.kind() != state.kind() {
                    self.prev = Some(top);
                    self.states.push(state);
                    trace!(state = ?state, depth = self.states.len(), "push state");
                }
            },
        }
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-pass context shared by the handlers.
#[derive(Debug, Clone, Default)]
pub struct LexerContext {
    /// The escape sequence still open, if any.
    pub escape: Option<EscapeSeq>,
}

/// Everything a handler sees for one character.
pub(crate) struct Scan<'a> {
    pub ch: char,
    pub pos: usize,
    pub ctx: &'a mut LexerContext,
    /// The newest pending token.
    pub last: Option<&'a Token>,
    pub prev_state: Option<State>,
}

impl Scan<'_> {
    /// Whether the newest pending token has the given kind.
    pub fn last_is(&self, kind: TokenKind) -> bool {
        self.last.is_some_and(|t| t.kind == kind)
    }

    /// A raw single-character token of `kind` at the current position.
    pub fn token(&self, kind: TokenKind) -> Token {
        Token::from_char(kind, self.ch, self.pos)
    }
}

/// Outcome of one handler invocation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// A raw token for the assembler; the character is consumed.
    Token(Token, Option<Transition>),
    /// Append the character to the newest pending token and retag it; the
    /// character is consumed.
    Extend(TokenKind, Option<Transition>),
    /// Re-dispatch the same character after the transition.
    Retry(Transition),
}

impl Step {
    pub fn emit(scan: &Scan<'_>, kind: TokenKind) -> Self {
        Step::Token(scan.token(kind), None)
    }

    pub fn emit_then(scan: &Scan<'_>, kind: TokenKind, transition: Transition) -> Self {
        Step::Token(scan.token(kind), Some(transition))
    }
}
