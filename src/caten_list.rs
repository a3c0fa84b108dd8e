use crate::error::ParseError;
use crate::parser::Parser;

/// Sequence of same-typed parsers collecting one value per parser
///
/// Behaves as the right fold of `caten` over the list with
/// [`epsilon`](crate::epsilon::epsilon) as seed, each step prepending the new
/// value: parsers run first to last, each on the previous remainder, and the
/// first failure is propagated. Each value is kept as a single element, never
/// spliced into the result. An empty list behaves exactly as `epsilon`.
///
/// Mix parser types by boxing them (see [`BoxedExt`](crate::parser::BoxedExt)).
pub struct CatenList<P> {
    parsers: Vec<P>,
}

impl<P> CatenList<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        CatenList { parsers }
    }
}

impl<'code, P> Parser<'code> for CatenList<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a CatenList parser
pub fn caten_list<'code, P>(parsers: impl IntoIterator<Item = P>) -> CatenList<P>
where
    P: Parser<'code>,
{
    CatenList::new(parsers.into_iter().collect())
}
