use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a pair
///
/// The second parser runs on the remainder left by the first. Chaining
/// `.caten()` calls nests pairs to the left, `(((a, b), c), d)`; use
/// [`caten_list`](crate::caten_list::caten_list) when the parts share a type
/// and a flat `Vec` is wanted.
///
/// Example:
/// ```
/// use tokcomb::caten::CatenExt;
/// use tokcomb::parser::parse;
/// use tokcomb::text::exact;
///
/// let input: Vec<char> = "ab!".chars().collect();
/// let parser = exact().token('a').caten(exact().token('b'));
/// let ((a, b), rest) = parse(&parser, &input).unwrap();
/// assert_eq!((a, b), ('a', 'b'));
/// assert_eq!(rest, &['!']);
/// ```
pub struct Caten<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Caten<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Caten { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Caten<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create a Caten parser
pub fn caten<'code, P1, P2>(parser1: P1, parser2: P2) -> Caten<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    Caten::new(parser1, parser2)
}

/// Extension trait to add .caten() method support for parsers
pub trait CatenExt<'code>: Parser<'code> + Sized {
    fn caten<P>(self, other: P) -> Caten<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Caten::new(self, other)
    }
}

/// Implement CatenExt for all parsers
impl<'code, P> CatenExt<'code> for P where P: Parser<'code> {}
