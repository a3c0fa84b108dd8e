use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Ordered alternation over a list of same-typed parsers
///
/// Behaves as the right fold of `disj` over the list with
/// [`none`](crate::none::none) as seed: every parser is tried on the same
/// starting cursor and the first success in list order wins. An empty list
/// fails on every input.
pub struct DisjList<P> {
    parsers: Vec<P>,
}

impl<P> DisjList<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        DisjList { parsers }
    }
}

impl<'code, P> Parser<'code> for DisjList<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        self.parsers
            .iter()
            .find_map(|parser| parser.parse(cursor).ok())
            .ok_or_else(|| cursor.no_match("no alternative matched"))
    }
}

/// Convenience function to create a DisjList parser
pub fn disj_list<'code, P>(parsers: impl IntoIterator<Item = P>) -> DisjList<P>
where
    P: Parser<'code>,
{
    DisjList::new(parsers.into_iter().collect())
}
