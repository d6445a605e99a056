//! Word-based memorable passwords.
//!
//! Words are packed greedily into the length budget with a single attempt at
//! a shorter word when one does not fit. Fewer than two packed words falls
//! back to a random pair. The joined result is then cut or padded so its
//! length always matches the request exactly.

use tracing::{debug, trace};

use super::PasswordOptions;
use super::charset::{self, DIGITS, LOWERCASE};
use super::words::WORDS;
use crate::entropy::RandomSource;

/// Characters held back for the numeric suffix.
pub(crate) const NUMERIC_RESERVE: usize = 2;
/// Average word length plus one separator.
const AVG_WORD_COST: usize = 7;
/// Maximum digits in the numeric suffix.
const SUFFIX_DIGITS: usize = 2;

/// Generate a memorable password from the word corpus.
pub fn generate_memorable_password<R>(options: &PasswordOptions, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let length = options.length;
    let reserve = if options.include_numbers {
        NUMERIC_RESERVE
    } else {
        0
    };
    let budget = length.saturating_sub(reserve);
    let target = (budget / AVG_WORD_COST).max(2);

    let mut words = pack_words(budget, target, rng);
    if words.len() < 2 {
        debug!(packed = words.len(), budget, "too few words packed, picking a pair");
        words = pick_pair(budget, rng);
    }

    let mut password = join_words(&words, charset::separators(options), rng);

    if options.include_numbers && password.len() < length {
        let count = SUFFIX_DIGITS.min(length - password.len());
        let n = rng.index(10usize.pow(count as u32));
        password.push_str(&format!("{n:0count$}"));
    }

    normalize(&mut password, options, rng);
    trace!(words = words.len(), length = password.len(), "memorable password generated");
    password
}

fn pick_word<R: RandomSource + ?Sized>(rng: &mut R) -> &'static str {
    WORDS[rng.index(WORDS.len())]
}

/// Greedy packing. A word fits while the running length stays below `budget`.
fn pack_words<R>(budget: usize, target: usize, rng: &mut R) -> Vec<&'static str>
where
    R: RandomSource + ?Sized,
{
    let mut words = Vec::with_capacity(target);
    let mut current = 0;

    while words.len() < target && current + 2 < budget {
        let word = pick_word(rng);
        let sep = usize::from(!words.is_empty());

        if current + sep + word.len() < budget {
            words.push(word);
            current += sep + word.len();
            continue;
        }

        // One rescue attempt with a word at least two characters shorter.
        let shorter: Vec<&'static str> = WORDS
            .iter()
            .copied()
            .filter(|w| w.len() + 2 <= word.len())
            .collect();
        if !shorter.is_empty() {
            let short = shorter[rng.index(shorter.len())];
            if current + sep + short.len() < budget {
                trace!(rejected = word.len(), accepted = short.len(), "shorter word fits");
                words.push(short);
            }
        }
        break;
    }

    words
}

/// Two random words, re-rolling the second until the pair fits `budget`.
/// Re-rolls are bounded by the corpus size; the last pair is used regardless.
fn pick_pair<R>(budget: usize, rng: &mut R) -> Vec<&'static str>
where
    R: RandomSource + ?Sized,
{
    let first = pick_word(rng);
    let mut second = pick_word(rng);
    let mut rerolls = 0;

    while first.len() + second.len() + 1 > budget && WORDS.len() > 1 && rerolls < WORDS.len() {
        second = pick_word(rng);
        rerolls += 1;
    }
    if first.len() + second.len() + 1 > budget {
        debug!(budget, "no word pair fits, result will be truncated");
    }

    vec![first, second]
}

fn join_words<R>(words: &[&str], separators: &[u8], rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let mut password = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());

    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                password.push(first.to_ascii_uppercase());
                password.push_str(chars.as_str());
            }
        } else {
            // Drawn per junction, even when only one separator is allowed.
            let sep = separators[rng.index(separators.len())];
            password.push(char::from(sep));
            password.push_str(word);
        }
    }

    password
}

/// Cut or pad `password` to exactly `options.length` characters.
fn normalize<R>(password: &mut String, options: &PasswordOptions, rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    if password.len() > options.length {
        password.truncate(options.length);
        return;
    }

    let padding = if options.include_numbers {
        DIGITS
    } else {
        LOWERCASE
    };
    while password.len() < options.length {
        password.push(char::from(padding[rng.index(padding.len())]));
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
    fn pinned_output_pads_with_lowercase() {
        let mut seq = Sequence::new([0]);
        let password = generate_memorable_password(&options(20, false, false), &mut seq);
        assert_eq!(password, "Apple-appleaaaaaaaaa");
        // two words, one separator, nine padding characters
        assert_eq!(seq.drawn(), 12);
    }

    #[test]
    fn pinned_output_with_rescue_and_suffix() {
        // apple, then lighthouse (too long), rescued by apple; '_' separator;
        // suffix 42; padding 7 8 9
        let mut seq = Sequence::new([0, 11, 0, 1, 42, 7, 8, 9]);
        let password = generate_memorable_password(&options(16, true, true), &mut seq);
        assert_eq!(password, "Apple_apple42789");
    }

    #[test]
    fn suffix_is_zero_padded() {
        let mut seq = Sequence::new([0, 11, 0, 1, 5, 7, 8, 9]);
        let password = generate_memorable_password(&options(16, true, true), &mut seq);
        assert_eq!(password, "Apple_apple05789");
    }

    #[test]
    fn longest_words_keep_two_words_and_suffix_at_minimum() {
        // lighthouse every draw: the second lighthouse is rejected and the
        // rescue takes mountain; suffix 11, padding 1 1
        let opts = options(23, true, false);
        assert_eq!(opts.minimum_length(crate::Mode::Memorable), 23);
        let mut seq = Sequence::new([11]);
        assert_eq!(
            generate_memorable_password(&opts, &mut seq),
            "Lighthouse-mountain1111"
        );

        let opts = options(21, false, false);
        assert_eq!(opts.minimum_length(crate::Mode::Memorable), 21);
        let mut seq = Sequence::new([11]);
        assert_eq!(
            generate_memorable_password(&opts, &mut seq),
            "Lighthouse-mountainll"
        );
    }

    #[test]
    fn pair_fallback_is_bounded_and_truncated() {
        let mut seq = Sequence::new([0]);
        let password = generate_memorable_password(&options(8, true, true), &mut seq);
        assert_eq!(password, "Apple-ap");
        // one packed word, the pair, a full round of re-rolls, one separator
        assert_eq!(seq.drawn(), 1 + 2 + WORDS.len() + 1);
    }

    #[test]
    fn single_digit_suffix_when_one_slot_left() {
        // jade + '-' + reef needs 9 characters but the budget is 8, so the
        // pair path runs out its re-rolls; length 10 leaves room for one digit.
        let mut seq = Sequence::new([59, 67]);
        let mut opts = options(10, true, false);
        assert_eq!(generate_memorable_password(&opts, &mut seq), "Jade-reef7");

        opts.length = 0;
        assert_eq!(generate_memorable_password(&opts, &mut seq), "");
    }

    #[test]
    fn hyphen_only_without_symbols() {
        let mut rng = RngSource::seeded(11);
        for _ in 0..200 {
            let password = generate_memorable_password(&options(20, false, false), &mut rng);
            assert_eq!(password.len(), 20);
            assert!(password.as_bytes()[0].is_ascii_uppercase());
            assert!(password.contains('-'));
            assert!(password.bytes().all(|b| b == b'-' || b.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn numbers_appear_when_room_remains() {
        let mut rng = RngSource::seeded(5);
        for _ in 0..200 {
            let password = generate_memorable_password(&options(24, true, true), &mut rng);
            assert_eq!(password.len(), 24);
            assert!(password.bytes().last().is_some_and(|b| b.is_ascii_digit()));
        }
    }
}
