//! Character classes and pool building for password generation.

use super::PasswordOptions;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Word separators used in memorable mode when symbols are enabled.
pub const SEPARATORS: &[u8] = b"-_.!";
/// The only separator used when symbols are disabled.
pub const PLAIN_SEPARATOR: &[u8] = b"-";

/// A named sampling pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// The class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Classes enabled by the options, in pool order.
    pub fn enabled(options: &PasswordOptions) -> Vec<CharClass> {
        let mut classes = vec![CharClass::Lowercase, CharClass::Uppercase];
        if options.include_numbers {
            classes.push(CharClass::Digit);
        }
        if options.include_symbols {
            classes.push(CharClass::Symbol);
        }
        classes
    }
}

/// Build the character pool for the given options.
pub fn build(options: &PasswordOptions) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(options));
    for class in CharClass::enabled(options) {
        chars.extend_from_slice(class.chars());
    }
    chars
}

/// Size of the pool `build` would return.
pub fn size(options: &PasswordOptions) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len();
    if options.include_numbers {
        size += DIGITS.len();
    }
    if options.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

/// Separator pool for memorable mode.
pub fn separators(options: &PasswordOptions) -> &'static [u8] {
    if options.include_symbols {
        SEPARATORS
    } else {
        PLAIN_SEPARATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(numbers: bool, symbols: bool) -> PasswordOptions {
        PasswordOptions {
            length: 16,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn pool_sizes() {
        assert_eq!(build(&options(false, false)).len(), 52);
        assert_eq!(build(&options(true, false)).len(), 62);
        assert_eq!(build(&options(false, true)).len(), 78);
        assert_eq!(build(&options(true, true)).len(), 88);
        for (n, s) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(build(&options(n, s)).len(), size(&options(n, s)));
        }
    }

    #[test]
    fn pool_order_is_lower_upper_digits_symbols() {
        let pool = build(&options(true, true));
        assert_eq!(pool[0], b'a');
        assert_eq!(pool[26], b'A');
        assert_eq!(pool[52], b'0');
        assert_eq!(pool[62], b'!');
    }

    #[test]
    fn classes_are_disjoint() {
        for class in CharClass::ALL {
            for &c in class.chars() {
                assert_eq!(CharClass::of(c as char), Some(class));
            }
        }
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('é'), None);
    }

    #[test]
    fn separators_follow_symbol_flag() {
        assert_eq!(separators(&options(true, false)), b"-");
        assert_eq!(separators(&options(false, true)), b"-_.!");
        for &sep in SEPARATORS {
            assert!(CharClass::Symbol.contains(sep as char));
        }
    }
}
