//! Character-random passwords.

use tracing::{debug, trace};

use super::PasswordOptions;
use super::charset::{self, CharClass};
use crate::entropy::RandomSource;

/// Generate a password of random characters.
///
/// One character of every enabled class is placed first, the rest is drawn
/// from the full pool, then the whole buffer is shuffled. When `length` is
/// shorter than that mandatory prefix the shuffled buffer is cut to `length`,
/// so some classes may be missing from the result.
pub fn generate_random_password<R>(options: &PasswordOptions, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let pool = charset::build(options);
    let mut buf: Vec<u8> = Vec::with_capacity(options.length.max(4));

    for class in CharClass::enabled(options) {
        buf.push(pick(class.chars(), rng));
    }
    let prefix = buf.len();

    while buf.len() < options.length {
        buf.push(pick(&pool, rng));
    }

    shuffle(&mut buf, rng);

    if buf.len() > options.length {
        debug!(
            length = options.length,
            prefix, "length below mandatory prefix, truncating"
        );
        buf.truncate(options.length);
    }
    trace!(length = buf.len(), pool = pool.len(), "random password generated");

    buf.into_iter().map(char::from).collect()
}

#[inline]
fn pick<R: RandomSource + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.index(chars.len())]
}

/// Fisher-Yates, swapping each position from the back with one at or before it.
#[inline]
pub(crate) fn shuffle<R: RandomSource + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.index(i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{RngSource, Sequence};

    fn options(length: usize, numbers: bool, symbols: bool) -> PasswordOptions {
        PasswordOptions {
            length,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn pinned_output_with_all_zero_source() {
        let mut seq = Sequence::new([0]);
        let password = generate_random_password(&options(6, true, true), &mut seq);
        assert_eq!(password, "A0!aaa");
        // 4 prefix picks, 2 fill picks, 5 swaps
        assert_eq!(seq.drawn(), 11);
    }

    #[test]
    fn pinned_output_without_optional_classes() {
        let mut seq = Sequence::new([1, 0]);
        let password = generate_random_password(&options(4, false, false), &mut seq);
        // prefix "bA", fill pool[1] = 'b' then pool[0] = 'a' -> "bAba"
        // swaps: i=3 j=1 -> "babA", i=2 j=0 -> "babA", i=1 j=1 -> "babA"
        assert_eq!(password, "babA");
    }

    #[test]
    fn example_twelve_alphanumeric() {
        let mut rng = RngSource::thread();
        for _ in 0..200 {
            let password = generate_random_password(&options(12, true, false), &mut rng);
            assert_eq!(password.len(), 12);
            assert!(password.bytes().all(|b| b.is_ascii_alphanumeric()));
            assert!(password.bytes().any(|b| b.is_ascii_digit()));
            assert!(password.bytes().any(|b| b.is_ascii_uppercase()));
            assert!(password.bytes().any(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn short_length_is_truncated_not_overshot() {
        let mut rng = RngSource::seeded(7);
        for length in 0..4 {
            let password = generate_random_password(&options(length, true, true), &mut rng);
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RngSource::seeded(3);
        let mut chars = b"abcdefghij".to_vec();
        shuffle(&mut chars, &mut rng);
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, b"abcdefghij");
    }
}
