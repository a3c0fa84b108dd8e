use crate::cursor::Cursor;
use crate::cursors::TokenCursor;
use crate::error::ParseError;
use tracing::debug;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value; parsing the same cursor twice gives the
/// same result.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures never consume input.
    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError>;
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser over a slice of `T`
///
/// Used for recursive rules and for lists mixing parsers of different types.
pub type BoxedParser<'code, T, O> =
    Box<dyn Parser<'code, Cursor = TokenCursor<'code, T>, Output = O> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> Box<dyn Parser<'code, Cursor = Self::Cursor, Output = Self::Output> + 'code> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Apply `parser` to `input`, returning the value and the unconsumed suffix
pub fn parse<'code, T, P>(
    parser: &P,
    input: &'code [T],
) -> Result<(P::Output, &'code [T]), ParseError>
where
    T: 'code,
    P: Parser<'code, Cursor = TokenCursor<'code, T>> + ?Sized,
{
    let (value, cursor) = parser.parse(TokenCursor::new(input))?;
    Ok((value, cursor.remaining()))
}

/// Apply `parser` to `input` and require that it consumes every token
///
/// This is the boundary where a no-match becomes the caller's hard error:
/// either the parser failed, or it left trailing input behind.
pub fn parse_complete<'code, T, P>(parser: &P, input: &'code [T]) -> Result<P::Output, ParseError>
where
    T: 'code,
    P: Parser<'code, Cursor = TokenCursor<'code, T>> + ?Sized,
{
    match parser.parse(TokenCursor::new(input)) {
        Ok((value, cursor)) if cursor.eos() => {
            debug!(tokens = input.len(), "parsed complete input");
            Ok(value)
        }
        Ok((_, cursor)) => {
            debug!(
                position = cursor.position(),
                trailing = cursor.remaining().len(),
                "parse stopped before end of input"
            );
            Err(cursor.no_match("expected end of input"))
        }
        Err(error) => {
            debug!(position = error.position(), %error, "parse failed");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caten::CatenExt;
    use crate::satisfy::satisfy;
    use crate::star::StarExt;
    use pretty_assertions::assert_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_parse_returns_suffix() {
        let input: Vec<char> = "abc".chars().collect();
        let parser = satisfy(|c: &char| *c == 'a');

        let (value, rest) = parse(&parser, &input).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(rest, &['b', 'c']);
    }

    #[test]
    fn test_parse_complete_accepts_full_input() {
        init_tracing();
        let input: Vec<char> = "aaa".chars().collect();
        let parser = satisfy(|c: &char| *c == 'a').star();

        assert_eq!(parse_complete(&parser, &input).unwrap(), vec!['a', 'a', 'a']);
    }

    #[test]
    fn test_parse_complete_rejects_trailing_input() {
        init_tracing();
        let input: Vec<char> = "aab".chars().collect();
        let parser = satisfy(|c: &char| *c == 'a').star();

        let error = parse_complete(&parser, &input).unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.remaining(&input), &['b']);
    }

    #[test]
    fn test_parse_complete_propagates_failure() {
        init_tracing();
        let input = b"xy";
        let parser = satisfy(|b: &u8| *b == b'x').caten(satisfy(|b: &u8| *b == b'z'));

        let error = parse_complete(&parser, input).unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_boxed_parser() {
        let input = b"q";
        let parser: BoxedParser<'_, u8, u8> = satisfy(|b: &u8| *b == b'q').boxed();

        let (value, rest) = parse(&parser, input).unwrap();
        assert_eq!(value, b'q');
        assert!(rest.is_empty());
    }

    #[test]
    fn test_reference_is_a_parser() {
        let input = b"qq";
        let single = satisfy(|b: &u8| *b == b'q');
        let parser = (&single).caten(&single);

        let ((a, b), rest) = parse(&parser, input).unwrap();
        assert_eq!((a, b), (b'q', b'q'));
        assert!(rest.is_empty());
    }
}
