use super::token::{IsToken, TokenMatcher, case_insensitive, exact};
use crate::disj_list::DisjList;

/// Any single token out of a set; the value is the matched token
pub type OneOf<T> = DisjList<IsToken<T>>;

impl<T> TokenMatcher<T> {
    /// Match one token out of `tokens`, tried in order
    pub fn one_of(&self, tokens: impl IntoIterator<Item = T>) -> OneOf<T> {
        DisjList::new(tokens.into_iter().map(|token| self.token(token)).collect())
    }
}

pub fn one_of(tokens: &str) -> OneOf<char> {
    exact().one_of(tokens.chars())
}

pub fn one_of_ci(tokens: &str) -> OneOf<char> {
    case_insensitive().one_of(tokens.chars())
}
