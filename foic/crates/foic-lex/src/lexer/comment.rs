//! Comment handler.
//!
//! The pending COMMENT token carries the opener, so the form of the comment
//! is read back from its text on every character:
//!
//! - `//` line comment, closed by a newline (which is lexed as WHITESPACE)
//! - `///` doc-block, closed by a second `///`
//! - `/*` block comment, closed by `*/`

use super::state::{Scan, Step, Transition};
use crate::token::TokenKind;

/// The three comment forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CommentForm {
    /// `// ...`
    Line,
    /// `/// ... ///`
    DocBlock,
    /// `/* ... */`
    Block,
}

impl CommentForm {
    /// Determines the form from the comment text accumulated so far.
    pub(crate) fn of(text: &str) -> Self {
        if text.starts_with("///") {
            CommentForm::DocBlock
        } else if text.starts_with("/*") {
            CommentForm::Block
        } else {
            CommentForm::Line
        }
    }
}

pub(crate) fn comment(scan: &mut Scan<'_>) -> Step {
    let text = scan
        .last
        .filter(|t| t.kind == TokenKind::Comment)
        .map_or("//", |t| t.value.as_str());

    match (CommentForm::of(text), scan.ch) {
        (CommentForm::Line, '/') if text == "//" => Step::Extend(TokenKind::Comment, None),
        (CommentForm::Line, '\n' | '\r') => {
            Step::emit_then(scan, TokenKind::Whitespace, Transition::Pop)
        },
        (CommentForm::DocBlock, '/') if text.chars().count() >= 5 && text.ends_with("//") => {
            Step::emit_then(scan, TokenKind::Comment, Transition::Pop)
        },
        (CommentForm::Block, '/') if text.chars().count() >= 3 && text.ends_with('*') => {
            Step::emit_then(scan, TokenKind::Comment, Transition::Pop)
        },
        _ => Step::emit(scan, TokenKind::Comment),
    }
}
