use crate::cursor::Cursor;
use crate::cursors::TokenCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that consumes a single token for which a predicate holds
///
/// This is the only primitive that looks at tokens; every other parser in the
/// crate is built by combining it.
pub struct Satisfy<T, F> {
    predicate: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> Satisfy<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<'code, T, F> Parser<'code> for Satisfy<T, F>
where
    T: Clone + 'code,
    F: Fn(&T) -> bool,
{
    type Cursor = TokenCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let token = cursor.value()?;
        if (self.predicate)(token) {
            Ok((token.clone(), cursor.next()))
        } else {
            Err(cursor.no_match("token rejected by predicate"))
        }
    }
}

/// Convenience function to create a single-token parser from a predicate
pub fn satisfy<T, F>(predicate: F) -> Satisfy<T, F>
where
    F: Fn(&T) -> bool,
{
    Satisfy::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Ident(String),
        Number(i64),
    }

    #[test]
    fn test_satisfy_matches_one_token() {
        let data: Vec<char> = "ab".chars().collect();
        let cursor = TokenCursor::new(&data);
        let parser = satisfy(|c: &char| c.is_alphabetic());

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_satisfy_rejects_without_consuming() {
        let data = b"1a";
        let cursor = TokenCursor::new(data);
        let parser = satisfy(|b: &u8| b.is_ascii_alphabetic());

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_satisfy_at_end_of_input() {
        let data: [char; 0] = [];
        let cursor = TokenCursor::new(&data);
        let parser = satisfy(|_: &char| true);

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_satisfy_over_symbols() {
        let data = vec![Token::Number(42), Token::Ident("x".into())];
        let cursor = TokenCursor::new(&data);
        let parser = satisfy(|t: &Token| matches!(t, Token::Number(_)));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Number(42));
        assert_eq!(cursor.value().unwrap(), &Token::Ident("x".into()));
    }
}
