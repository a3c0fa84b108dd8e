use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::TokenCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};
use std::fmt;

/// Token equality used to build single-token matchers
pub type Equality<T> = fn(&T, &T) -> bool;

/// Builds single-token matchers, literals and sets from one notion of equality
///
/// Instantiate with [`exact`] for case-sensitive matching or with
/// [`case_insensitive`] for matching under case folding.
pub struct TokenMatcher<T> {
    eq: Equality<T>,
}

impl<T> Clone for TokenMatcher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TokenMatcher<T> {}

impl<T> TokenMatcher<T> {
    pub const fn new(eq: Equality<T>) -> Self {
        TokenMatcher { eq }
    }

    /// A parser matching exactly one token equal to `expected`
    pub fn token(&self, expected: T) -> IsToken<T> {
        IsToken {
            expected,
            eq: self.eq,
        }
    }
}

/// Matcher comparing tokens with `==`
pub fn exact<T: PartialEq>() -> TokenMatcher<T> {
    TokenMatcher::new(|a, b| a == b)
}

/// Matcher comparing tokens after case folding
pub fn case_insensitive<T: Atomic>() -> TokenMatcher<T> {
    TokenMatcher::new(|a, b| a.eq_ignore_case(*b))
}

/// Parser that matches one specific token
pub struct IsToken<T> {
    expected: T,
    eq: Equality<T>,
}

impl<'code, T> Parser<'code> for IsToken<T>
where
    T: Clone + fmt::Debug + 'code,
{
    type Cursor = TokenCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        satisfy(|token: &T| (self.eq)(&self.expected, token))
            .parse(cursor)
            .map_err(|_| cursor.no_match(format!("expected {:?}", self.expected)))
    }
}

/// Parser accepting any single token
pub fn any_token<T: Clone>() -> Satisfy<T, fn(&T) -> bool> {
    let accept: fn(&T) -> bool = |_| true;
    Satisfy::new(accept)
}
