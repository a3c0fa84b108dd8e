use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that succeeds only when no input is left
pub struct End<C> {
    _phantom: PhantomData<fn(C)>,
}

impl<C> End<C> {
    pub fn new() -> Self {
        End {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for End<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Parser<'code> for End<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(cursor.no_match("expected end of input"))
        }
    }
}

/// Convenience function to create an end-of-input parser
pub fn end<C>() -> End<C> {
    End::new()
}
