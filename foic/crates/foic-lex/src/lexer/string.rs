//! String-literal handlers: plain strings, escaped strings and the
//! backtick-delimited code regions inside interpolated strings.

use super::operator;
use super::state::{EscapeSeq, Scan, State, Step, StringMode, Transition};
use crate::tables;
use crate::token::TokenKind;

/// Inside `"..."`: everything is text up to the closing quote.
pub(crate) fn string(scan: &mut Scan<'_>) -> Step {
    scan.ctx.escape = None;
    match scan.ch {
        '"' => Step::emit_then(scan, TokenKind::DoubleQuote, Transition::Pop),
        _ => Step::emit(scan, TokenKind::String),
    }
}

/// Inside an escape-prefixed string.
pub(crate) fn escaped_string(scan: &mut Scan<'_>, mode: StringMode) -> Step {
    match scan.ch {
        ch if tables::is_whitespace(ch) => {
            scan.ctx.escape = None;
            if mode.collapses_whitespace() {
                Step::emit(scan, TokenKind::Whitespace)
            } else {
                Step::emit(scan, TokenKind::String)
            }
        },
        '`' if mode.interpolates() => {
            scan.ctx.escape = None;
            Step::emit_then(
                scan,
                TokenKind::Backtick,
                Transition::Push(State::InterpolatedBase),
            )
        },
        _ => string(scan),
    }
}

/// Inside a backtick-delimited region: base rules up to the closing
/// backtick.
pub(crate) fn interpolated_base(scan: &mut Scan<'_>) -> Step {
    if scan.ch != '`' {
        return operator::base(scan);
    }

    if scan.last_is(TokenKind::Backtick) {
        // An empty region is a literal backtick in the enclosing string.
        scan.ctx.escape = None;
        return Step::Extend(TokenKind::StringEscapedChar, Some(Transition::Pop));
    }

    match scan.ctx.escape {
        Some(EscapeSeq::Plain | EscapeSeq::Double) => operator::base(scan),
        _ => {
            scan.ctx.escape = None;
            Step::emit_then(scan, TokenKind::Backtick, Transition::Pop)
        },
    }
}
