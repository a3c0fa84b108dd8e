use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and yields an empty `Vec`
///
/// The identity of sequencing: `caten_list` over no parsers is exactly this.
pub struct Epsilon<C, O> {
    _phantom: PhantomData<fn(C) -> O>,
}

impl<C, O> Epsilon<C, O> {
    pub fn new() -> Self {
        Epsilon {
            _phantom: PhantomData,
        }
    }
}

impl<C, O> Default for Epsilon<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C, O> Parser<'code> for Epsilon<C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = Vec<O>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        Ok((Vec::new(), cursor))
    }
}

/// Convenience function to create an epsilon parser
pub fn epsilon<C, O>() -> Epsilon<C, O> {
    Epsilon::new()
}
