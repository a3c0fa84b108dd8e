use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional
///
/// Never fails. Success is forwarded as `Some(value)`; failure becomes `None`
/// with the cursor unchanged.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement MaybeExt for all parsers
impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}
