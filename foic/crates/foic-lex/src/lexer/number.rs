//! Escaped number literals such as `\12`, `\h1F`, `\b101`, `\o17` and `\@ff.8`.

use super::state::{EscapedNumber, Scan, Step, Transition};
use crate::token::TokenKind;

/// Checks if a character is a digit of the given radix.
///
/// # Example
///
/// ```
/// use foic_lex::lexer::is_digit_in_radix;
///
/// assert!(is_digit_in_radix('7', 8));
/// assert!(!is_digit_in_radix('8', 8));
/// assert!(is_digit_in_radix('F', 16));
/// assert!(!is_digit_in_radix('2', 2));
/// ```
pub fn is_digit_in_radix(c: char, radix: u32) -> bool {
    match radix {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Handles one character of an escaped number literal.
///
/// A digit outside the literal's base ends the literal and is emitted as
/// GENERAL. Characters that are not digits end the literal and are retried in
/// the enclosing state.
pub(crate) fn escaped_number(scan: &mut Scan<'_>, number: EscapedNumber) -> Step {
    scan.ctx.escape = None;
    let radix = number.base.radix();
    let last_number = scan.last.filter(|t| t.kind == TokenKind::Number);

    match scan.ch {
        ch if ch.is_ascii_hexdigit() => {
            if is_digit_in_radix(ch, radix) {
                Step::emit(scan, TokenKind::Number)
            } else {
                Step::emit_then(scan, TokenKind::General, Transition::Pop)
            }
        },
        '.' => match last_number {
            Some(t) if number.base.allows_fraction() && !t.value.contains('.') => {
                Step::emit(scan, TokenKind::Period)
            },
            _ => Step::Retry(Transition::Pop),
        },
        '_' => match last_number {
            Some(t)
                if number.base.allows_fraction()
                    && t.value.chars().last().is_some_and(|c| c.is_ascii_hexdigit()) =>
            {
                Step::emit(scan, TokenKind::Number)
            },
            _ => Step::Retry(Transition::Pop),
        },
        '-' if last_number.is_none() && !number.unicode => Step::emit(scan, TokenKind::Number),
        '-' => Step::emit_then(scan, TokenKind::Hyphen, Transition::Pop),
        _ => Step::Retry(Transition::Pop),
    }
}
