//! Persisted generation settings.

mod file;

use std::io;
use std::path::Path;

use passmint::{Mode, PasswordOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub pass_length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub number_of_passwords: usize,
    pub output_file_path: String,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> io::Result<Self> {
        Self::load_from(file::get_path())
    }

    pub fn save_to_file(&self) -> io::Result<()> {
        self.save_to(file::get_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path.as_ref())?;
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        file::save(self, path.as_ref())
    }

    /// Options for a single generation call.
    pub fn options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.pass_length,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
        }
    }

    pub fn apply_options(&mut self, options: &PasswordOptions) {
        self.pass_length = options.length;
        self.include_numbers = options.include_numbers;
        self.include_symbols = options.include_symbols;
    }
}

impl Default for Settings {
    fn default() -> Self {
        let options = PasswordOptions::default();
        Self {
            mode: Mode::default(),
            pass_length: options.length,
            include_numbers: options.include_numbers,
            include_symbols: options.include_symbols,
            number_of_passwords: 1,
            output_file_path: String::new(),
            to_clipboard: false,
        }
    }
}
