use super::range::{InRange, range};
use super::word::join_tokens;
use crate::atomic::Atomic;
use crate::disj::Disj;
use crate::map::Map;
use crate::plus::Plus;

pub type Letter<T> = Disj<InRange<T>, InRange<T>>;

/// One or more tokens of a class, joined into a `String`
pub type AlphaWord<P, T> = Map<Plus<P>, fn(Vec<T>) -> String>;

/// ASCII lowercase letter
pub fn lower<T: Atomic>() -> InRange<T> {
    range(T::from_ascii(b'a'), T::from_ascii(b'z'))
}

/// ASCII uppercase letter
pub fn upper<T: Atomic>() -> InRange<T> {
    range(T::from_ascii(b'A'), T::from_ascii(b'Z'))
}

/// ASCII letter of either case
pub fn letter<T: Atomic>() -> Letter<T> {
    Disj::new(lower(), upper())
}

pub fn alpha_word_lower<T: Atomic>() -> AlphaWord<InRange<T>, T> {
    Map::new(Plus::new(lower()), join_tokens as fn(Vec<T>) -> String)
}

pub fn alpha_word_upper<T: Atomic>() -> AlphaWord<InRange<T>, T> {
    Map::new(Plus::new(upper()), join_tokens as fn(Vec<T>) -> String)
}

pub fn alpha_word<T: Atomic>() -> AlphaWord<Letter<T>, T> {
    Map::new(Plus::new(letter()), join_tokens as fn(Vec<T>) -> String)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TokenCursor;
    use crate::parser::Parser;

    #[test]
    fn test_lower_and_upper() {
        let data: Vec<char> = "aZ".chars().collect();
        let cursor = TokenCursor::new(&data);

        assert!(upper::<char>().parse(cursor).is_err());
        let (ch, cursor) = lower::<char>().parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert!(lower::<char>().parse(cursor).is_err());
        let (ch, _) = upper::<char>().parse(cursor).unwrap();
        assert_eq!(ch, 'Z');
    }

    #[test]
    fn test_letter() {
        let data = b"qQ1";
        let cursor = TokenCursor::new(data);

        let (first, cursor) = letter::<u8>().parse(cursor).unwrap();
        let (second, cursor) = letter::<u8>().parse(cursor).unwrap();
        assert_eq!((first, second), (b'q', b'Q'));
        assert!(letter::<u8>().parse(cursor).is_err());
    }

    #[test]
    fn test_non_ascii_is_not_a_letter() {
        let data: Vec<char> = "é".chars().collect();
        let cursor = TokenCursor::new(&data);

        assert!(letter::<char>().parse(cursor).is_err());
    }

    #[test]
    fn test_alpha_word() {
        let data: Vec<char> = "camelCase42".chars().collect();
        let cursor = TokenCursor::new(&data);

        let (matched, cursor) = alpha_word::<char>().parse(cursor).unwrap();
        assert_eq!(matched, "camelCase");
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn test_alpha_word_lower_stops_at_upper() {
        let data: Vec<char> = "camelCase".chars().collect();
        let cursor = TokenCursor::new(&data);

        let (matched, cursor) = alpha_word_lower::<char>().parse(cursor).unwrap();
        assert_eq!(matched, "camel");
        let (matched, _) = alpha_word_upper::<char>().parse(cursor).unwrap();
        assert_eq!(matched, "C");
    }

    #[test]
    fn test_alpha_word_needs_one_letter() {
        let data = b"42";
        let cursor = TokenCursor::new(data);

        let error = alpha_word::<u8>().parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
    }
}
