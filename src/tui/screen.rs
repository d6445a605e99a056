//! Interactive screen state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use passmint::pass::{MAX_LENGTH, MIN_LENGTH};
use passmint::{Mode, PasswordOptions, RandomSource, generate};
use zeroize::Zeroize;

use crate::settings::Settings;

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Regenerate,
    Copy,
    Quit,
    Ignore,
}

/// Feedback line under the options.
#[derive(Debug, PartialEq, Eq)]
pub enum Status {
    Copied,
    ClipboardError(String),
    Weak(String),
}

pub struct Screen {
    pub mode: Mode,
    pub options: PasswordOptions,
    pub password: String,
    pub status: Option<Status>,
}

impl Screen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: settings.mode,
            options: settings.options().clamped(),
            password: String::new(),
            status: None,
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('m') => {
                self.mode = self.mode.toggle();
                Action::Regenerate
            }
            KeyCode::Left | KeyCode::Char('-') => {
                self.set_length(self.options.length.saturating_sub(1))
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_length(self.options.length + 1)
            }
            KeyCode::Down => self.set_length(self.options.length.saturating_sub(8)),
            KeyCode::Up => self.set_length(self.options.length + 8),
            KeyCode::Home => self.set_length(MIN_LENGTH),
            KeyCode::End => self.set_length(MAX_LENGTH),
            KeyCode::Char('n') => {
                self.options.include_numbers = !self.options.include_numbers;
                Action::Regenerate
            }
            KeyCode::Char('s') => {
                self.options.include_symbols = !self.options.include_symbols;
                Action::Regenerate
            }
            KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => Action::Regenerate,
            KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy,
            _ => Action::Ignore,
        }
    }

    fn set_length(&mut self, length: usize) -> Action {
        let length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        if length == self.options.length {
            return Action::Ignore;
        }
        self.options.length = length;
        Action::Regenerate
    }

    pub fn regenerate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.password.zeroize();
        self.password = generate(self.mode, &self.options, rng);
        self.status = self
            .options
            .check(self.mode)
            .err()
            .map(|e| Status::Weak(e.to_string()));
    }

    /// Write the current choices back into `settings`.
    pub fn store(&self, settings: &mut Settings) {
        settings.mode = self.mode;
        settings.apply_options(&self.options);
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
