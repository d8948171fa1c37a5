//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the character dispatcher that
//! drives the state handlers, and the pull-based token interface.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::str::Chars;

use tracing::trace;

use super::assembler::Assembler;
use super::state::{LexerContext, Scan, State, StateKind, StateStack, Step};
use super::{comment, number, operator, string};
use crate::cursor::Cursor;
use crate::token::Token;

/// Streaming lexer for Foi source text.
///
/// The lexer pulls characters from its input only until at least one token
/// is final, so it works over any `char` iterator and never buffers the whole
/// source. Tokens cover the input without gaps: concatenating their values
/// reproduces it exactly.
///
/// # Example
///
/// ```
/// use foic_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("def x: 1;").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Keyword,
///         TokenKind::Whitespace,
///         TokenKind::General,
///         TokenKind::Colon,
///         TokenKind::Whitespace,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///     ]
/// );
/// ```
pub struct Lexer<I> {
    /// Character source.
    cursor: Cursor<I>,

    /// Nested lexing modes; `Base` at the bottom.
    states: StateStack,

    /// Escape sequence carried between characters.
    context: LexerContext,

    /// Tokens not yet final.
    assembler: Assembler,

    /// Final tokens not yet handed out.
    ready: VecDeque<Token>,
}

impl<'a> Lexer<Chars<'a>> {
    /// Creates a lexer over a string slice.
    pub fn new(source: &'a str) -> Self {
        Self::from_chars(source.chars())
    }
}

impl<I> Lexer<I>
where
    I: Iterator<Item = char>,
{
    /// Creates a lexer over any character source.
    ///
    /// # Example
    ///
    /// ```
    /// use foic_lex::Lexer;
    ///
    /// let chunks = ["1", ".", "5"];
    /// let tokens: Vec<_> = Lexer::from_chars(chunks.iter().flat_map(|c| c.chars())).collect();
    /// assert_eq!(tokens.len(), 1);
    /// assert_eq!(tokens[0].value, "1.5");
    /// ```
    pub fn from_chars(chars: I) -> Self {
        Self {
            cursor: Cursor::new(chars),
            states: StateStack::new(),
            context: LexerContext::default(),
            assembler: Assembler::new(),
            ready: VecDeque::new(),
        }
    }

    /// Returns the next final token, or `None` once the input is exhausted
    /// and everything pending has been flushed.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }
            // The flush runs on the bump that exhausts the cursor.
            if self.cursor.is_at_end() {
                return None;
            }

            match self.cursor.bump() {
                Some((pos, ch)) => self.advance(ch, pos),
                None => {
                    self.assembler.flush(&mut self.ready);
                    trace!(
                        chars = self.cursor.position(),
                        open_states = self.states.depth() - 1,
                        "end of input"
                    );
                },
            }
        }
    }

    /// Feeds one character through the handlers until it is consumed.
    fn advance(&mut self, ch: char, pos: usize) {
        loop {
            let state = self.states.top();
            let step = {
                let mut scan = Scan {
                    ch,
                    pos,
                    ctx: &mut self.context,
                    last: self.assembler.last(),
                    prev_state: self.states.prev(),
                };
                dispatch(state, &mut scan)
            };

            match step {
                Step::Token(raw, transition) => {
                    self.assembler.assemble(raw, &state, &mut self.ready);
                    if let Some(transition) = transition {
                        self.states.apply(transition);
                    }
                    return;
                },
                Step::Extend(kind, transition) => {
                    self.assembler.extend(kind, ch, pos, &state, &mut self.ready);
                    if let Some(transition) = transition {
                        self.states.apply(transition);
                    }
                    return;
                },
                Step::Retry(transition) => {
                    trace!(ch = ?ch, pos, from = %state.kind(), "retry");
                    self.states.apply(transition);
                },
            }
        }
    }

    /// Kind of the current lexing mode.
    pub fn state(&self) -> StateKind {
        self.states.top().kind()
    }

    /// Offset of the next character to be read.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Line of the next character to be read (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Column of the next character to be read (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

fn dispatch(state: State, scan: &mut Scan<'_>) -> Step {
    match state {
        State::Base => operator::base(scan),
        State::String => string::string(scan),
        State::EscapedString(mode) => string::escaped_string(scan, mode),
        State::InterpolatedBase => string::interpolated_base(scan),
        State::EscapedNumber(number) => number::escaped_number(scan, number),
        State::Comment => comment::comment(scan),
    }
}

impl<I> Iterator for Lexer<I>
where
    I: Iterator<Item = char>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<I> FusedIterator for Lexer<I> where I: Iterator<Item = char> {}

/// Lexes a whole string into a vector of tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
