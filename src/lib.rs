//! Random and memorable password generation.
//!
//! Two generators share the character-class tables in [`pass::charset`] and
//! the word corpus in [`pass::words`]. Randomness is injected through
//! [`entropy::RandomSource`] so output can be pinned in tests.
//!
//! ```
//! use passmint::{Mode, PasswordOptions, RngSource, generate};
//!
//! let options = PasswordOptions { length: 20, include_numbers: true, include_symbols: false };
//! let password = generate(Mode::Memorable, &options, &mut RngSource::thread());
//! assert_eq!(password.len(), 20);
//! ```

pub mod entropy;
mod error;
pub mod pass;

pub use entropy::{RandomSource, RngSource};
pub use error::Error;
pub use pass::{
    Mode, PasswordOptions, generate, generate_batch, generate_memorable_password,
    generate_random_password, try_generate,
};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
