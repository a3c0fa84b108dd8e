use crate::atomic::Atomic;
use std::borrow::Cow;
use thiserror::Error;

/// The single failure kind of the engine: no parser matched at `position`.
///
/// Failures never consume input. The position is the cursor of the parser
/// that rejected: a primitive reports where it was applied, and combinators
/// that propagate a failure (`caten`, `caten_list`, `word`, `map`) hand it
/// through unchanged, so it can lie past their own start. `guard`, `diff` and
/// `not_followed_by` report their own starting cursor. The message is
/// diagnostic only and never influences combinator behaviour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no match at position {position}: {message}")]
pub struct ParseError {
    position: usize,
    message: Cow<'static, str>,
}

/// Human oriented location of an error inside a token source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    /// Offset in tokens from the start of `line`
    pub offset: usize,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The prefix of `source` accepted before the failing attempt
    pub fn accepted<'a, T>(&self, source: &'a [T]) -> &'a [T] {
        &source[..self.position.min(source.len())]
    }

    /// The suffix of `source` the failing attempt was looking at
    pub fn remaining<'a, T>(&self, source: &'a [T]) -> &'a [T] {
        &source[self.position.min(source.len())..]
    }

    /// Calculate line number and token offset within that line
    ///
    /// Offsets are counted in tokens, not display columns; tab width and
    /// combining characters are left to the caller.
    pub fn locate<T: Atomic>(&self, source: &[T]) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, token) in self.accepted(source).iter().enumerate() {
            if token.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.position.min(source.len()) - line_start,
        }
    }
}
