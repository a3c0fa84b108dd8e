//! Glob-import this module to get the whole combinator catalog in scope

pub use crate::atomic::Atomic;
pub use crate::caten::{CatenExt, caten};
pub use crate::caten_list::caten_list;
pub use crate::cursor::Cursor;
pub use crate::cursors::TokenCursor;
pub use crate::delayed::delayed;
pub use crate::diff::{DiffExt, diff};
pub use crate::disj::{DisjExt, disj};
pub use crate::disj_list::disj_list;
pub use crate::end::end;
pub use crate::epsilon::epsilon;
pub use crate::error::{ParseError, ReadablePosition};
pub use crate::guard::{GuardExt, guard};
pub use crate::map::{MapExt, map};
pub use crate::maybe::{MaybeExt, maybe};
pub use crate::none::none;
pub use crate::not_followed_by::{NotFollowedByExt, not_followed_by};
pub use crate::ops::{Rule, rule};
pub use crate::parser::{BoxedExt, BoxedParser, Parser, parse, parse_complete};
pub use crate::plus::{PlusExt, plus};
pub use crate::satisfy::satisfy;
pub use crate::star::{StarExt, star};
pub use crate::text::{
    TokenMatcher, alpha_word, alpha_word_lower, alpha_word_upper, any_token, case_insensitive,
    digit, exact, hex_digit, letter, lower, nonzero_digit, nonzero_hex_digit, one_of, one_of_ci,
    range, range_ci, upper, whitespace, word, word_ci, word_str,
};
