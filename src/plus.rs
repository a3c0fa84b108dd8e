use crate::error::ParseError;
use crate::parser::Parser;
use crate::star::repeat;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// One mandatory match followed by [`Star`](crate::star::Star), with all values
/// in a single `Vec`. Shares the non-consuming precondition of `Star`.
pub struct Plus<P> {
    parser: P,
}

impl<P> Plus<P> {
    pub fn new(parser: P) -> Self {
        Plus { parser }
    }
}

impl<'code, P> Parser<'code> for Plus<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Plus parser
pub fn plus<'code, P>(parser: P) -> Plus<P>
where
    P: Parser<'code>,
{
    Plus::new(parser)
}

/// Extension trait to add .plus() method support for parsers
pub trait PlusExt<'code>: Parser<'code> + Sized {
    fn plus(self) -> Plus<Self> {
        Plus::new(self)
    }
}

/// Implement PlusExt for all parsers
impl<'code, P> PlusExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TokenCursor;
    use crate::text::{exact, lower};
    use proptest::prelude::*;

    #[test]
    fn test_plus_zero_matches_fails() {
        let data = b"xyz";
        let cursor = TokenCursor::new(data);
        let parser = plus(exact().token(b'a'));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_plus_one_match() {
        let data = b"abc";
        let cursor = TokenCursor::new(data);
        let parser = exact().token(b'a').plus();

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b'a']);
        assert_eq!(cursor.value().unwrap(), &b'b');
    }

    #[test]
    fn test_plus_multiple_matches() {
        let data: Vec<char> = "hello World".chars().collect();
        let cursor = TokenCursor::new(&data);
        let parser = lower::<char>().plus();

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(cursor.value().unwrap(), &' ');
    }

    #[test]
    fn test_plus_empty_input() {
        let data: &[u8] = b"";
        let cursor = TokenCursor::new(data);
        let parser = exact().token(b'a').plus();

        assert!(parser.parse(cursor).is_err());
    }

    proptest! {
        #[test]
        fn prop_plus_fails_where_star_is_empty(input in "[b-z]{0,12}") {
            let data: Vec<char> = input.chars().collect();
            let cursor = TokenCursor::new(&data);

            prop_assert!(exact().token('a').plus().parse(cursor).is_err());
        }
    }
}
