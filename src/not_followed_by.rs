use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead after a match
///
/// Runs `parser`, then tries `follower` on its remainder. If `follower`
/// matches the whole thing fails; otherwise `parser`'s result stands and the
/// follower's tokens are left unconsumed.
pub struct NotFollowedBy<P, Q> {
    parser: P,
    follower: Q,
}

impl<P, Q> NotFollowedBy<P, Q> {
    pub fn new(parser: P, follower: Q) -> Self {
        NotFollowedBy { parser, follower }
    }
}

impl<'code, P, Q> Parser<'code> for NotFollowedBy<P, Q>
where
    P: Parser<'code>,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (value, rest) = self.parser.parse(cursor)?;
        match self.follower.parse(rest) {
            Ok(_) => Err(cursor.no_match("negative lookahead failed: unexpected continuation")),
            Err(_) => Ok((value, rest)),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser
pub fn not_followed_by<'code, P, Q>(parser: P, follower: Q) -> NotFollowedBy<P, Q>
where
    P: Parser<'code>,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    NotFollowedBy::new(parser, follower)
}

/// Extension trait to add .not_followed_by() method support for parsers
pub trait NotFollowedByExt<'code>: Parser<'code> + Sized {
    fn not_followed_by<Q>(self, follower: Q) -> NotFollowedBy<Self, Q>
    where
        Q: Parser<'code, Cursor = Self::Cursor>,
    {
        NotFollowedBy::new(self, follower)
    }
}

/// Implement NotFollowedByExt for all parsers
impl<'code, P> NotFollowedByExt<'code> for P where P: Parser<'code> {}
