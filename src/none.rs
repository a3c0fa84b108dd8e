use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that fails on every input
///
/// The identity of ordered alternation: `disj_list` over no parsers is exactly
/// this.
pub struct NoneParser<C, O> {
    _phantom: PhantomData<fn(C) -> O>,
}

impl<C, O> NoneParser<C, O> {
    pub fn new() -> Self {
        NoneParser {
            _phantom: PhantomData,
        }
    }
}

impl<C, O> Default for NoneParser<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C, O> Parser<'code> for NoneParser<C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        Err(cursor.no_match("no alternative matched"))
    }
}

/// Convenience function to create a parser that never matches
pub fn none<C, O>() -> NoneParser<C, O> {
    NoneParser::new()
}
