use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Greedy and never fails: with zero matches it returns an empty `Vec` and the
/// original cursor. Each value becomes one element of the result, even when
/// the inner value is itself a sequence.
///
/// The inner parser must consume at least one token whenever it succeeds. An
/// iteration that succeeds without advancing ends the repetition instead of
/// looping forever, and its value is dropped.
pub struct Star<P> {
    parser: P,
}

impl<P> Star<P> {
    pub fn new(parser: P) -> Self {
        Star { parser }
    }
}

impl<'code, P> Parser<'code> for Star<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Apply `parser` until it fails, pushing every value into `results`
///
/// Returns the cursor after the last successful, advancing match.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: P::Cursor,
    results: &mut Vec<P::Output>,
) -> P::Cursor
where
    P: Parser<'code>,
{
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        if next_cursor.position() == cursor.position() {
            trace!(
                position = cursor.position(),
                "repetition matched without consuming input, stopping"
            );
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    cursor
}

/// Convenience function to create a Star parser
pub fn star<'code, P>(parser: P) -> Star<P>
where
    P: Parser<'code>,
{
    Star::new(parser)
}

/// Extension trait to add .star() method support for parsers
pub trait StarExt<'code>: Parser<'code> + Sized {
    fn star(self) -> Star<Self> {
        Star::new(self)
    }
}

/// Implement StarExt for all parsers
impl<'code, P> StarExt<'code> for P where P: Parser<'code> {}
