//! Span module - Source location tracking.
//!
//! Offsets count Unicode scalar values (characters), not bytes, and a span
//! includes both of its ends. This is the convention of the Foi token stream:
//! a token `{ start: 4, end: 6 }` covers the characters 4, 5 and 6.
//!
//! # Examples
//!
//! ```
//! use foic_util::span::Span;
//!
//! let span = Span::new(4, 6);
//! assert_eq!(span.len(), 3);
//! assert!(span.is_followed_by(Span::new(7, 7)));
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span with inclusive character offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First character offset
    pub start: usize,
    /// Last character offset (inclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span covering `start..=end`
    ///
    /// # Examples
    ///
    /// ```
    /// use foic_util::span::Span;
    ///
    /// let span = Span::new(0, 2);
    /// assert_eq!(span.start, 0);
    /// assert_eq!(span.end, 2);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by the span
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Inclusive spans always cover at least one character
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check whether `next` starts right after this span ends
    ///
    /// # Examples
    ///
    /// ```
    /// use foic_util::span::Span;
    ///
    /// assert!(Span::new(0, 2).is_followed_by(Span::new(3, 3)));
    /// assert!(!Span::new(0, 2).is_followed_by(Span::new(4, 5)));
    /// ```
    #[inline]
    pub const fn is_followed_by(&self, next: Span) -> bool {
        next.start == self.end + 1
    }
}
