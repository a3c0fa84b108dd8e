use crate::error::ParseError;
use std::borrow::Cow;

/// Generic cursor trait for parser combinators
///
/// A cursor is a suffix view of an immutable token sequence. Parsers never
/// mutate the sequence; they hand back a new cursor that is the same or a
/// shorter suffix of the one they were given.
pub trait Cursor<'code>: Copy + Sized {
    /// The type of elements this cursor iterates over
    type Element: 'code;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence
    fn value(&self) -> Result<&'code Self::Element, ParseError>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// The whole sequence this cursor is a view of
    fn source(&self) -> &'code [Self::Element];

    /// The suffix not yet consumed
    fn remaining(&self) -> &'code [Self::Element] {
        &self.source()[self.position()..]
    }

    /// Consume the cursor and return its source and position
    fn inner(self) -> (&'code [Self::Element], usize) {
        (self.source(), self.position())
    }

    /// A failure anchored at this cursor's position
    fn no_match(&self, message: impl Into<Cow<'static, str>>) -> ParseError {
        ParseError::new(self.position(), message)
    }
}
