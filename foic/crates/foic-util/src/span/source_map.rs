//! Source files and line/column lookup.
//!
//! This module provides the [`SourceFile`] type, which precomputes the
//! character offset of every line start so that token offsets can be turned
//! into human-readable positions.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and line index
///
/// # Examples
///
/// ```
/// use foic_util::span::SourceFile;
///
/// let file = SourceFile::new("main.foi", "def x: 1;");
/// assert_eq!(file.name(), "main.foi");
/// assert_eq!(file.char_len(), 9);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Number of characters in the content
    char_len: usize,
    /// Character offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let (line_starts, char_len) = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            char_len,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> (Arc<[usize]>, usize) {
        let mut line_starts = vec![0];
        let mut len = 0;

        for (i, ch) in content.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
            len = i + 1;
        }

        (line_starts.into(), len)
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of characters in the file
    #[inline]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use foic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.foi", "a\nb\nc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a character offset to 1-based (line, column) coordinates
    ///
    /// Offsets past the end are clamped onto the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use foic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.foi", "def x;\nlog(x);");
    /// assert_eq!(file.line_col(0), (1, 1));
    /// assert_eq!(file.line_col(7), (2, 1));
    /// assert_eq!(file.line_col(11), (2, 5));
    /// ```
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point >= 1 here
                let line = insert_point - 1;
                let col = offset - self.line_starts[line] + 1;
                (line + 1, col)
            },
        }
    }

    /// Checked variant of [`SourceFile::line_col`]
    pub fn try_line_col(&self, offset: usize) -> SourceMapResult<(usize, usize)> {
        if offset >= self.char_len {
            return Err(SourceMapError::OffsetOutOfBounds {
                offset,
                len: self.char_len,
            });
        }
        Ok(self.line_col(offset))
    }

    /// Extract the characters covered by a span
    ///
    /// # Examples
    ///
    /// ```
    /// use foic_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.foi", "def x;");
    /// assert_eq!(file.snippet(Span::new(0, 2)).unwrap(), "def");
    /// assert!(file.snippet(Span::new(4, 9)).is_err());
    /// ```
    pub fn snippet(&self, span: Span) -> SourceMapResult<String> {
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end >= self.char_len {
            return Err(SourceMapError::OffsetOutOfBounds {
                offset: span.end,
                len: self.char_len,
            });
        }
        Ok(self.content.chars().skip(span.start).take(span.len()).collect())
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("char_len", &self.char_len)
            .field("line_count", &self.line_count())
            .finish()
    }
}
