use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::trace;

/// A parser that defers the construction of the actual parser until parse time.
///
/// Every call to `parse` invokes the supplier and applies the parser it
/// returns. This is how a rule refers to itself or to a rule defined later:
/// the supplier is usually a `fn` returning a
/// [`BoxedParser`](crate::parser::BoxedParser), so no cyclic value is ever
/// built.
///
/// Each resolution adds stack frames; very deeply nested input can exhaust
/// the stack.
pub struct Delayed<F> {
    supplier: F,
}

impl<F> Delayed<F> {
    /// Create a new delayed parser with the given supplier function
    pub fn new(supplier: F) -> Self {
        Self { supplier }
    }
}

impl<'code, F, P> Parser<'code> for Delayed<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        trace!(position = cursor.position(), "resolving delayed parser");
        let parser = (self.supplier)();
        parser.parse(cursor)
    }
}

/// Create a delayed parser from a supplier function
pub fn delayed<'code, F, P>(supplier: F) -> Delayed<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Delayed::new(supplier)
}
