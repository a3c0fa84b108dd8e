use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::TokenCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::fmt;

/// Token ordering used to build range matchers
pub type LessOrEqual<T> = fn(&T, &T) -> bool;

/// Builds inclusive range matchers from a less-or-equal relation
pub struct RangeMatcher<T> {
    leq: LessOrEqual<T>,
}

impl<T> Clone for RangeMatcher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RangeMatcher<T> {}

impl<T> RangeMatcher<T> {
    pub const fn new(leq: LessOrEqual<T>) -> Self {
        RangeMatcher { leq }
    }

    /// A parser matching one token `t` with `low <= t <= high`
    pub fn range(&self, low: T, high: T) -> InRange<T> {
        InRange {
            low,
            high,
            leq: self.leq,
        }
    }
}

/// Parser that matches one token inside an inclusive range
pub struct InRange<T> {
    low: T,
    high: T,
    leq: LessOrEqual<T>,
}

impl<'code, T> Parser<'code> for InRange<T>
where
    T: Clone + fmt::Debug + 'code,
{
    type Cursor = TokenCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let token = cursor.value()?;
        if (self.leq)(&self.low, token) && (self.leq)(token, &self.high) {
            Ok((token.clone(), cursor.next()))
        } else {
            Err(cursor.no_match(format!(
                "expected token in range {:?}..={:?}",
                self.low, self.high
            )))
        }
    }
}

/// Range comparing ordinals
pub fn range<T: Atomic>(low: T, high: T) -> InRange<T> {
    RangeMatcher::new(|a: &T, b: &T| a.ordinal() <= b.ordinal()).range(low, high)
}

/// Range comparing case-folded ordinals
pub fn range_ci<T: Atomic>(low: T, high: T) -> InRange<T> {
    RangeMatcher::new(|a: &T, b: &T| a.fold_case().ordinal() <= b.fold_case().ordinal())
        .range(low, high)
}
