/// Trait for tokens the character-class helpers know how to inspect
///
/// The combinator core never needs this; it is required by the `text`
/// helpers, which compare ordinals, fold case and name ASCII constants.
pub trait Atomic: Copy + PartialEq + std::fmt::Debug {
    /// Numeric value used for range and whitespace checks
    fn ordinal(self) -> u32;

    /// Single-token lowercase form, used for case-insensitive ranges
    ///
    /// For `char`, a multi-char lowercase expansion keeps only its first char.
    fn fold_case(self) -> Self;

    /// Case-insensitive token equality
    fn eq_ignore_case(self, other: Self) -> bool {
        self.fold_case() == other.fold_case()
    }

    /// Build the token for an ASCII byte
    fn from_ascii(byte: u8) -> Self;

    /// Character form used when joining matched tokens into a `String`
    fn to_char(self) -> char;

    fn is_newline(self) -> bool {
        self == Self::from_ascii(b'\n')
    }
}

impl Atomic for char {
    fn ordinal(self) -> u32 {
        self as u32
    }

    fn fold_case(self) -> Self {
        self.to_lowercase().next().unwrap_or(self)
    }

    fn eq_ignore_case(self, other: Self) -> bool {
        // 'İ' lowercases to "i\u{307}", which must not equal 'i'
        self.to_lowercase().eq(other.to_lowercase())
    }

    fn from_ascii(byte: u8) -> Self {
        byte as char
    }

    fn to_char(self) -> char {
        self
    }
}

impl Atomic for u8 {
    fn ordinal(self) -> u32 {
        self as u32
    }

    fn fold_case(self) -> Self {
        self.to_ascii_lowercase()
    }

    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn to_char(self) -> char {
        self as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_fold_case() {
        assert_eq!('A'.fold_case(), 'a');
        assert_eq!('z'.fold_case(), 'z');
        assert_eq!('Ä'.fold_case(), 'ä');
        assert_eq!('5'.fold_case(), '5');
    }

    #[test]
    fn test_char_eq_ignore_case_uses_full_expansion() {
        assert!('A'.eq_ignore_case('a'));
        assert!('Ä'.eq_ignore_case('ä'));
        assert!(!'İ'.eq_ignore_case('i'));
        assert!('İ'.eq_ignore_case('İ'));
    }

    #[test]
    fn test_byte_eq_ignore_case() {
        assert!(b'Q'.eq_ignore_case(b'q'));
        assert!(!b'q'.eq_ignore_case(b'r'));
    }

    #[test]
    fn test_byte_fold_case() {
        assert_eq!(b'Q'.fold_case(), b'q');
        assert_eq!(b'%'.fold_case(), b'%');
    }

    #[test]
    fn test_newline() {
        assert!('\n'.is_newline());
        assert!(b'\n'.is_newline());
        assert!(!'n'.is_newline());
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(' '.ordinal(), 32);
        assert_eq!(b'0'.ordinal(), 48);
    }
}
