//! Lexical helpers built from the core combinators
//!
//! Everything here is generic over [`Atomic`](crate::atomic::Atomic) tokens
//! where it names ASCII constants, so the same helpers work on `&[char]` and
//! `&[u8]` input.

pub mod digit;
pub mod letter;
pub mod one_of;
pub mod range;
pub mod token;
pub mod whitespace;
pub mod word;

pub use digit::{
    HexDigit, NonzeroDigit, NonzeroHexDigit, digit, hex_digit, nonzero_digit, nonzero_hex_digit,
};
pub use letter::{
    AlphaWord, Letter, alpha_word, alpha_word_lower, alpha_word_upper, letter, lower, upper,
};
pub use one_of::{OneOf, one_of, one_of_ci};
pub use range::{InRange, LessOrEqual, RangeMatcher, range, range_ci};
pub use token::{Equality, IsToken, TokenMatcher, any_token, case_insensitive, exact};
pub use whitespace::whitespace;
pub use word::{Word, WordStr, word, word_ci, word_str};
