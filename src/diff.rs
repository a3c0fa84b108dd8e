use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Set difference: what `parser` matches, minus what `excluded` matches
///
/// `excluded` runs on the same starting cursor as `parser`, not on its
/// remainder. If both succeed the result is a failure; if only `parser`
/// succeeds its result is returned unchanged.
pub struct Diff<P, Q> {
    parser: P,
    excluded: Q,
}

impl<P, Q> Diff<P, Q> {
    pub fn new(parser: P, excluded: Q) -> Self {
        Diff { parser, excluded }
    }
}

impl<'code, P, Q> Parser<'code> for Diff<P, Q>
where
    P: Parser<'code>,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let result = self.parser.parse(cursor)?;
        match self.excluded.parse(cursor) {
            Ok(_) => Err(cursor.no_match("match excluded by difference")),
            Err(_) => Ok(result),
        }
    }
}

/// Convenience function to create a Diff parser
pub fn diff<'code, P, Q>(parser: P, excluded: Q) -> Diff<P, Q>
where
    P: Parser<'code>,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    Diff::new(parser, excluded)
}

/// Extension trait to add .diff() method support for parsers
pub trait DiffExt<'code>: Parser<'code> + Sized {
    fn diff<Q>(self, excluded: Q) -> Diff<Self, Q>
    where
        Q: Parser<'code, Cursor = Self::Cursor>,
    {
        Diff::new(self, excluded)
    }
}

/// Implement DiffExt for all parsers
impl<'code, P> DiffExt<'code> for P where P: Parser<'code> {}
