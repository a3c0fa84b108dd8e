use super::token::{IsToken, TokenMatcher, case_insensitive, exact};
use crate::atomic::Atomic;
use crate::caten_list::CatenList;
use crate::map::Map;

/// Literal token sequence; the value is the matched tokens
pub type Word<T> = CatenList<IsToken<T>>;

/// Literal token sequence whose value is joined into a `String`
pub type WordStr<T> = Map<Word<T>, fn(Vec<T>) -> String>;

pub(crate) fn join_tokens<T: Atomic>(tokens: Vec<T>) -> String {
    tokens.into_iter().map(Atomic::to_char).collect()
}

impl<T> TokenMatcher<T> {
    /// Match `tokens` in order, one matcher per token
    pub fn word(&self, tokens: impl IntoIterator<Item = T>) -> Word<T> {
        CatenList::new(tokens.into_iter().map(|token| self.token(token)).collect())
    }
}

impl<T: Atomic> TokenMatcher<T> {
    pub fn word_str(&self, tokens: impl IntoIterator<Item = T>) -> WordStr<T> {
        Map::new(self.word(tokens), join_tokens as fn(Vec<T>) -> String)
    }
}

/// Case-sensitive literal over `char` tokens
pub fn word(literal: &str) -> Word<char> {
    exact().word(literal.chars())
}

/// Case-insensitive literal over `char` tokens
pub fn word_ci(literal: &str) -> Word<char> {
    case_insensitive().word(literal.chars())
}

/// Case-sensitive literal over `char` tokens yielding a `String`
pub fn word_str(literal: &str) -> WordStr<char> {
    exact().word_str(literal.chars())
}
