//! Character cursor over a streaming input.
//!
//! The lexer never looks ahead: it pulls exactly one character at a time, so
//! the cursor only has to hand out characters together with their offset and
//! keep line/column bookkeeping current.

/// A cursor that numbers the characters of any `char` iterator.
///
/// # Example
///
/// ```
/// use foic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb".chars());
/// assert_eq!(cursor.bump(), Some((0, 'a')));
/// assert_eq!(cursor.bump(), Some((1, '\n')));
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<I> {
    /// The underlying character source.
    chars: I,

    /// Offset of the next character to be pulled.
    position: usize,

    /// Line of the next character (1-based).
    line: u32,

    /// Column of the next character (1-based, in characters).
    column: u32,

    /// Set once the source has reported its end.
    exhausted: bool,
}

impl<I> Cursor<I>
where
    I: Iterator<Item = char>,
{
    /// Creates a cursor at offset zero, line 1, column 1.
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            position: 0,
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    /// Pulls the next character and its offset.
    ///
    /// Returns `None` once the source is exhausted, and keeps returning `None`
    /// even if the underlying iterator is not fused.
    pub fn bump(&mut self) -> Option<(usize, char)> {
        if self.exhausted {
            return None;
        }
        let Some(ch) = self.chars.next() else {
            self.exhausted = true;
            return None;
        };

        let pos = self.position;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some((pos, ch))
    }

    /// Offset of the next character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the next character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Whether the source has been fully consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.exhausted
    }
}
