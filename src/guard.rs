use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that keeps the output of another parser only if a predicate accepts it
///
/// A rejected value is discarded and the result is a failure at the original
/// position, so nothing counts as consumed.
pub struct Guard<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Guard<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for Guard<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(cursor.no_match("value rejected by guard"))
        }
    }
}

/// Extension trait to add guard method to all parsers
pub trait GuardExt<'code>: Parser<'code> + Sized {
    fn guard<F>(self, predicate: F) -> Guard<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Guard::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> GuardExt<'code> for P {}

/// Convenience function to create a guarded parser
pub fn guard<'code, P, F>(parser: P, predicate: F) -> Guard<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Guard::new(parser, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::TokenCursor;
    use crate::map::MapExt;
    use crate::text::{alpha_word, any_token, word};

    #[test]
    fn test_guard_success() {
        let data: Vec<char> = "a".chars().collect();
        let cursor = TokenCursor::new(&data);

        let parser = any_token::<char>().guard(|c| c.is_alphabetic());
        let (result, _) = parser.parse(cursor).unwrap();
        assert_eq!(result, 'a');
    }

    #[test]
    fn test_guard_failure_consumes_nothing() {
        let data: Vec<char> = "1".chars().collect();
        let cursor = TokenCursor::new(&data);

        let parser = any_token::<char>().guard(|c| c.is_alphabetic());
        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_guard_excludes_keywords() {
        let identifier = alpha_word::<char>().guard(|word| word != "let" && word != "fn");

        let data: Vec<char> = "letter".chars().collect();
        let (word, _) = identifier.parse(TokenCursor::new(&data)).unwrap();
        assert_eq!(word, "letter");

        let data: Vec<char> = "let".chars().collect();
        assert!(identifier.parse(TokenCursor::new(&data)).is_err());
    }

    #[test]
    fn test_guard_reports_own_start_not_inner_position() {
        let data: Vec<char> = "cow".chars().collect();
        let cursor = TokenCursor::new(&data);

        // A sequence passes on the position where its inner token failed
        let error = word("cat").parse(cursor).unwrap_err();
        assert_eq!(error.position(), 1);
        assert_eq!(error.accepted(&data), &['c']);

        let error = word("cow").guard(|_| false).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
        assert!(error.accepted(&data).is_empty());
    }

    #[test]
    fn test_chained_guards() {
        let data: Vec<char> = "a".chars().collect();
        let cursor = TokenCursor::new(&data);

        let parser = any_token::<char>()
            .guard(|c| c.is_alphabetic())
            .guard(|c| c.is_uppercase());

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_function_syntax() {
        let data = b"7";
        let cursor = TokenCursor::new(data);
        let parser = guard(any_token::<u8>().map(|b| b - b'0'), |digit| *digit < 8);

        let (digit, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(digit, 7);
        assert!(cursor.eos());
    }
}
