//! Password generation.

pub mod charset;
mod generate;
mod memorable;
mod options;
mod random;
pub mod words;

pub use generate::{generate, generate_batch, try_generate};
pub use memorable::generate_memorable_password;
pub use options::{MAX_LENGTH, MIN_LENGTH, Mode, PasswordOptions, UnknownMode};
pub use random::generate_random_password;
