//! Generation options and mode selection.

use std::fmt;
use std::str::FromStr;

use super::memorable::NUMERIC_RESERVE;
use super::words;
use crate::{Error, Result};

/// Smallest length offered by the interactive mode.
pub const MIN_LENGTH: usize = 8;
/// Largest length offered by the interactive mode.
pub const MAX_LENGTH: usize = 64;

/// Which generator to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Characters drawn from the enabled classes.
    Random,
    /// Dictionary words joined by separators.
    #[default]
    Memorable,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Random => Mode::Memorable,
            Mode::Memorable => Mode::Random,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Random => f.write_str("random"),
            Mode::Memorable => f.write_str("memorable"),
        }
    }
}

/// Unrecognized mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0} (expected random or memorable)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "r" => Ok(Mode::Random),
            "memorable" | "m" | "words" => Ok(Mode::Memorable),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Input to a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 24,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Smallest length at which `mode` honours every requested guarantee
    /// whatever the random draws.
    ///
    /// Random mode needs one lowercase, one uppercase and one of each enabled
    /// class. Memorable mode needs any pair of corpus words and a separator to
    /// fit the word budget, plus the numeric reserve when numbers are enabled,
    /// so two whole words and the digit suffix always survive.
    pub fn minimum_length(&self, mode: Mode) -> usize {
        match mode {
            Mode::Random => {
                2 + usize::from(self.include_numbers) + usize::from(self.include_symbols)
            }
            Mode::Memorable => {
                let reserve = if self.include_numbers {
                    NUMERIC_RESERVE
                } else {
                    0
                };
                2 * words::longest() + 1 + reserve
            }
        }
    }

    /// Fail when the options cannot be satisfied for `mode`.
    pub fn check(&self, mode: Mode) -> Result<()> {
        if self.length == 0 {
            return Err(Error::ZeroLength);
        }
        let minimum = self.minimum_length(mode);
        if self.length < minimum {
            return Err(Error::ConstraintUnsatisfiable {
                mode,
                length: self.length,
                minimum,
            });
        }
        Ok(())
    }

    /// Length clamped to the interactive range.
    pub fn clamped(mut self) -> Self {
        self.length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }
}
