use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both run on the same starting cursor. A success of the first parser always
/// wins, even if the second would have consumed more.
pub struct Disj<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Disj<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Disj { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Disj<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .disj() method support for parsers
pub trait DisjExt<'code>: Parser<'code> + Sized {
    fn disj<P>(self, other: P) -> Disj<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Disj::new(self, other)
    }
}

/// Implement DisjExt for all parsers
impl<'code, P> DisjExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Disj parser
pub fn disj<'code, P1, P2>(parser1: P1, parser2: P2) -> Disj<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Disj::new(parser1, parser2)
}
