use crate::atomic::Atomic;
use crate::satisfy::Satisfy;

/// Any token with ordinal at most 32: space and the ASCII control range
pub fn whitespace<T: Atomic>() -> Satisfy<T, fn(&T) -> bool> {
    let is_blank: fn(&T) -> bool = |token| token.ordinal() <= 32;
    Satisfy::new(is_blank)
}
