//! # TokComb - Token Parser Combinator Library
//!
//! A parser combinator library over slices of arbitrary tokens: characters,
//! bytes, or the symbols a lexer produced.
//!
//! TokComb provides a small closed algebra of parsers that combine into larger
//! grammars, plus lexical helpers built on top of that algebra. The library
//! emphasizes:
//!
//! - **Zero panics**: A failed match is an ordinary `Err` value, never a panic
//! - **Backtracking by value**: Cursors are immutable; alternatives restart from one cursor
//! - **Composability**: Every combinator takes parsers and returns a parser
//! - **Any token type**: The core never inspects tokens beyond a caller-supplied predicate
//!
//! ```
//! use tokcomb::prelude::*;
//!
//! let number = digit::<char>()
//!     .plus()
//!     .map(|digits| digits.into_iter().collect::<String>());
//! let list = number.caten(word(",").caten(digit::<char>().plus()).star());
//!
//! let input: Vec<char> = "12,3,45".chars().collect();
//! let (first, rest) = parse_complete(&list, &input).unwrap();
//! assert_eq!(first, "12");
//! assert_eq!(rest.len(), 2);
//! ```

pub mod atomic;
pub mod caten;
pub mod caten_list;
pub mod cursor;
pub mod cursors;
pub mod delayed;
pub mod diff;
pub mod disj;
pub mod disj_list;
pub mod end;
pub mod epsilon;
pub mod error;
pub mod guard;
pub mod map;
pub mod maybe;
pub mod none;
pub mod not_followed_by;
pub mod ops;
pub mod parser;
pub mod plus;
pub mod prelude;
pub mod satisfy;
pub mod star;
pub mod text;

pub use atomic::Atomic;
pub use cursor::Cursor;
pub use cursors::TokenCursor;
pub use error::{ParseError, ReadablePosition};
pub use parser::{BoxedParser, Parser, parse, parse_complete};
