//! Operator sugar over the named combinators
//!
//! Wrap a parser with [`rule`] to compose it with operators:
//!
//! | operator       | combinator                                   |
//! |----------------|----------------------------------------------|
//! | `a + b`        | [`caten`](crate::caten::caten)               |
//! | `a \| b`       | [`disj`](crate::disj::disj)                  |
//! | `!a`           | [`maybe`](crate::maybe::maybe)               |
//! | `a - b`        | [`diff`](crate::diff::diff)                  |
//! | `a ^ b`        | [`not_followed_by`](crate::not_followed_by::not_followed_by) |
//! | `a >> f`       | [`map`](crate::map::map)                     |
//! | `&a << input`  | [`parse`](crate::parser::parse)              |
//!
//! The result of every operator is again a `Rule`, so expressions chain.
//!
//! ```
//! use tokcomb::ops::rule;
//! use tokcomb::text::{digit, exact};
//!
//! let sign = rule(exact().token('-'));
//! let number = !sign + digit::<char>();
//! let input: Vec<char> = "-7".chars().collect();
//!
//! let ((sign, digit), rest) = (&number << &input[..]).unwrap();
//! assert_eq!(sign, Some('-'));
//! assert_eq!(digit, '7');
//! assert!(rest.is_empty());
//! ```

use crate::caten::Caten;
use crate::cursors::TokenCursor;
use crate::diff::Diff;
use crate::disj::Disj;
use crate::error::ParseError;
use crate::map::Map;
use crate::maybe::Maybe;
use crate::not_followed_by::NotFollowedBy;
use crate::parser::{Parser, parse};
use std::ops::{Add, BitOr, BitXor, Not, Shl, Shr, Sub};

/// A parser that composes with operators
pub struct Rule<P>(pub P);

impl<P> Rule<P> {
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<'code, P> Parser<'code> for Rule<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        self.0.parse(cursor)
    }
}

/// Wrap a parser so it can be combined with operators
pub fn rule<P>(parser: P) -> Rule<P> {
    Rule(parser)
}

impl<P, Q> Add<Q> for Rule<P> {
    type Output = Rule<Caten<P, Q>>;

    fn add(self, rhs: Q) -> Self::Output {
        Rule(Caten::new(self.0, rhs))
    }
}

impl<P, Q> BitOr<Q> for Rule<P> {
    type Output = Rule<Disj<P, Q>>;

    fn bitor(self, rhs: Q) -> Self::Output {
        Rule(Disj::new(self.0, rhs))
    }
}

impl<P> Not for Rule<P> {
    type Output = Rule<Maybe<P>>;

    fn not(self) -> Self::Output {
        Rule(Maybe::new(self.0))
    }
}

impl<P, Q> Sub<Q> for Rule<P> {
    type Output = Rule<Diff<P, Q>>;

    fn sub(self, rhs: Q) -> Self::Output {
        Rule(Diff::new(self.0, rhs))
    }
}

impl<P, Q> BitXor<Q> for Rule<P> {
    type Output = Rule<NotFollowedBy<P, Q>>;

    fn bitxor(self, rhs: Q) -> Self::Output {
        Rule(NotFollowedBy::new(self.0, rhs))
    }
}

impl<P, F> Shr<F> for Rule<P> {
    type Output = Rule<Map<P, F>>;

    fn shr(self, mapper: F) -> Self::Output {
        Rule(Map::new(self.0, mapper))
    }
}

impl<'code, P, T> Shl<&'code [T]> for &Rule<P>
where
    T: 'code,
    P: Parser<'code, Cursor = TokenCursor<'code, T>>,
{
    type Output = Result<(P::Output, &'code [T]), ParseError>;

    fn shl(self, input: &'code [T]) -> Self::Output {
        parse(&self.0, input)
    }
}
