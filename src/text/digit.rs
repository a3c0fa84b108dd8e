use super::range::{InRange, range, range_ci};
use super::token::{IsToken, exact};
use crate::atomic::Atomic;
use crate::diff::Diff;
use crate::disj::Disj;

pub type NonzeroDigit<T> = Diff<InRange<T>, IsToken<T>>;
pub type HexDigit<T> = Disj<InRange<T>, InRange<T>>;
pub type NonzeroHexDigit<T> = Diff<HexDigit<T>, IsToken<T>>;

/// Decimal digit `0` to `9`
pub fn digit<T: Atomic>() -> InRange<T> {
    range(T::from_ascii(b'0'), T::from_ascii(b'9'))
}

/// Decimal digit `1` to `9`
pub fn nonzero_digit<T: Atomic>() -> NonzeroDigit<T> {
    Diff::new(digit(), exact().token(T::from_ascii(b'0')))
}

/// Hexadecimal digit, letters in either case
pub fn hex_digit<T: Atomic>() -> HexDigit<T> {
    Disj::new(digit(), range_ci(T::from_ascii(b'a'), T::from_ascii(b'f')))
}

pub fn nonzero_hex_digit<T: Atomic>() -> NonzeroHexDigit<T> {
    Diff::new(hex_digit(), exact().token(T::from_ascii(b'0')))
}
