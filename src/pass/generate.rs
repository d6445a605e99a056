//! Mode dispatch and batch generation.

use tracing::{debug, warn};

use super::{Mode, PasswordOptions, generate_memorable_password, generate_random_password};
use crate::Result;
use crate::entropy::RandomSource;

/// Generate a single password with the generator for `mode`.
///
/// Always returns exactly `options.length` characters. Composition
/// guarantees degrade when the length is too small to hold them.
pub fn generate<R>(mode: Mode, options: &PasswordOptions, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    match mode {
        Mode::Random => generate_random_password(options, rng),
        Mode::Memorable => generate_memorable_password(options, rng),
    }
}

/// Like [`generate`], but refuses options that cannot honour every guarantee.
pub fn try_generate<R>(mode: Mode, options: &PasswordOptions, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    options.check(mode).inspect_err(|e| warn!(%e, "rejected options"))?;
    Ok(generate(mode, options, rng))
}

/// Generate `count` passwords with the same options.
pub fn generate_batch<R>(
    mode: Mode,
    options: &PasswordOptions,
    count: usize,
    rng: &mut R,
) -> Vec<String>
where
    R: RandomSource + ?Sized,
{
    debug!(%mode, count, length = options.length, "generating batch");
    (0..count).map(|_| generate(mode, options, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::entropy::{RngSource, Sequence};

    #[test]
    fn dispatches_by_mode() {
        let options = PasswordOptions {
            length: 6,
            include_numbers: true,
            include_symbols: true,
        };
        assert_eq!(
            generate(Mode::Random, &options, &mut Sequence::new([0])),
            "A0!aaa"
        );
        assert_eq!(
            generate(Mode::Memorable, &options, &mut Sequence::new([0])),
            "Apple-"
        );
    }

    #[test]
    fn try_generate_rejects_short_lengths() {
        let options = PasswordOptions {
            length: 22,
            include_numbers: true,
            include_symbols: false,
        };
        let mut rng = RngSource::thread();
        assert!(matches!(
            try_generate(Mode::Memorable, &options, &mut rng),
            Err(Error::ConstraintUnsatisfiable { minimum: 23, .. })
        ));
        let password = try_generate(Mode::Random, &options, &mut rng).unwrap();
        assert_eq!(password.len(), 22);
        let options = PasswordOptions { length: 23, ..options };
        let password = try_generate(Mode::Memorable, &options, &mut rng).unwrap();
        assert!(password.ends_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn batch_produces_count_passwords() {
        let options = PasswordOptions::default();
        let mut rng = RngSource::seeded(1);
        let batch = generate_batch(Mode::Random, &options, 5, &mut rng);
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == options.length));
        assert!(generate_batch(Mode::Memorable, &options, 0, &mut rng).is_empty());
    }

    #[test]
    fn works_through_trait_objects() {
        let mut rng: Box<dyn RandomSource> = Box::new(RngSource::seeded(9));
        let password = generate(Mode::Memorable, &PasswordOptions::default(), &mut rng);
        assert_eq!(password.len(), 24);
    }
}
