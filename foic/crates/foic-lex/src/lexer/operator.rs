//! Base-state handler: punctuation, escapes, quotes and plain text.

use super::state::{
    EscapeSeq, EscapedNumber, NumberBase, Scan, State, Step, StringMode, Transition,
};
use crate::tables;
use crate::token::TokenKind;

/// Handles one character in top-level code.
///
/// Any open escape is consumed here: branches that extend it put the longer
/// sequence back into the context, every other branch leaves it closed.
pub(crate) fn base(scan: &mut Scan<'_>) -> Step {
    let escape = scan.ctx.escape.take();

    match scan.ch {
        '0'..='9' if escape == Some(EscapeSeq::Plain) => {
            Step::Retry(Transition::Push(State::EscapedNumber(EscapedNumber {
                base: NumberBase::Regular,
                unicode: false,
            })))
        },
        '0'..='9' => Step::emit(scan, TokenKind::Number),

        'u' | 'h' | 'b' | 'o' | '@' if escape == Some(EscapeSeq::Plain) => {
            let seq = match scan.ch {
                'u' => EscapeSeq::Unicode,
                'h' => EscapeSeq::Hex,
                'b' => EscapeSeq::Binary,
                'o' => EscapeSeq::Octal,
                _ => EscapeSeq::Monad,
            };
            scan.ctx.escape = Some(seq);
            let push = EscapedNumber::for_escape(seq).map(|n| Transition::Push(State::EscapedNumber(n)));
            Step::Extend(TokenKind::Escape, push)
        },
        '@' => Step::emit(scan, TokenKind::At),

        '\\' if escape == Some(EscapeSeq::Plain) => {
            scan.ctx.escape = Some(EscapeSeq::Double);
            Step::Extend(TokenKind::Escape, None)
        },
        '\\' => {
            scan.ctx.escape = Some(EscapeSeq::Plain);
            Step::emit(scan, TokenKind::Escape)
        },

        '`' => match escape {
            Some(EscapeSeq::Plain) => {
                scan.ctx.escape = Some(EscapeSeq::Interpolated);
                Step::Extend(TokenKind::Escape, None)
            },
            Some(EscapeSeq::Double) => {
                scan.ctx.escape = Some(EscapeSeq::InterpolatedSpacing);
                Step::Extend(TokenKind::Escape, None)
            },
            _ => Step::emit(scan, TokenKind::Backtick),
        },

        '"' => double_quote(scan, escape),

        '/' | '*' if scan.last_is(TokenKind::ForwardSlash) => {
            Step::Extend(TokenKind::Comment, Some(Transition::Push(State::Comment)))
        },

        ch if tables::is_whitespace(ch) => Step::emit(scan, TokenKind::Whitespace),

        ch => match TokenKind::punctuation(ch) {
            Some(kind) => Step::emit(scan, kind),
            None => Step::emit(scan, TokenKind::General),
        },
    }
}

fn double_quote(scan: &mut Scan<'_>, escape: Option<EscapeSeq>) -> Step {
    let mode = match escape {
        Some(EscapeSeq::Plain) => Some(StringMode::Regular),
        Some(EscapeSeq::Interpolated) => Some(StringMode::Interpolated),
        Some(EscapeSeq::InterpolatedSpacing) => Some(StringMode::InterpolatedSpacing),
        _ => None,
    };
    if let Some(mode) = mode {
        return Step::emit_then(
            scan,
            TokenKind::DoubleQuote,
            Transition::Push(State::EscapedString(mode)),
        );
    }

    // `""` right after a string closed: the quote is literal text and the
    // string it belonged to resumes.
    if scan.last_is(TokenKind::DoubleQuote) {
        if let Some(prev) = scan.prev_state.filter(State::is_string) {
            return Step::Extend(TokenKind::StringEscapedChar, Some(Transition::Push(prev)));
        }
    }

    Step::emit_then(scan, TokenKind::DoubleQuote, Transition::Push(State::String))
}
