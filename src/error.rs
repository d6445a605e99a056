use thiserror::Error;

use crate::pass::Mode;

/// Errors raised by the strict generation entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A password of length zero was requested.
    #[error("password length must be at least 1")]
    ZeroLength,

    /// The requested length cannot hold every composition guarantee
    /// for the selected mode and flags.
    #[error("{mode} password of length {length} cannot guarantee the requested options (minimum {minimum})")]
    ConstraintUnsatisfiable {
        mode: Mode,
        length: usize,
        minimum: usize,
    },
}
