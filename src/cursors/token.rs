use crate::cursor::Cursor;
use crate::error::ParseError;

/// Cursor over a slice of arbitrary tokens
///
/// `Clone` and `Copy` are implemented by hand so that a cursor is copyable
/// even when the tokens themselves are not.
#[derive(Debug)]
pub enum TokenCursor<'code, T> {
    Valid { data: &'code [T], position: usize },
    EndOfInput { data: &'code [T] },
}

impl<'code, T> Clone for TokenCursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T> Copy for TokenCursor<'code, T> {}

impl<'code, T> TokenCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return TokenCursor::EndOfInput { data };
        }
        TokenCursor::Valid { data, position: 0 }
    }
}

impl<'code, T: 'code> Cursor<'code> for TokenCursor<'code, T> {
    type Element = T;

    fn value(&self) -> Result<&'code Self::Element, ParseError> {
        match *self {
            TokenCursor::Valid { data, position } => Ok(&data[position]),
            TokenCursor::EndOfInput { data } => {
                Err(ParseError::new(data.len(), "unexpected end of input"))
            }
        }
    }

    fn next(self) -> Self {
        match self {
            TokenCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    TokenCursor::EndOfInput { data }
                } else {
                    TokenCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            TokenCursor::EndOfInput { data } => TokenCursor::EndOfInput { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            TokenCursor::Valid { position, .. } => *position,
            TokenCursor::EndOfInput { data } => data.len(),
        }
    }

    fn source(&self) -> &'code [Self::Element] {
        match self {
            TokenCursor::Valid { data, .. } => data,
            TokenCursor::EndOfInput { data } => data,
        }
    }
}
