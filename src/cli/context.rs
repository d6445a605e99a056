//! CLI context - bundles settings, flags, and clipboard state.

use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use passmint::{RandomSource, RngSource, generate_batch};
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, output, prompts, quiet};
use crate::settings::Settings;
use crate::tui::print_help;

/// Why the CLI stopped before or after generating.
#[derive(Debug, PartialEq, Eq)]
pub enum Halt {
    /// Early exit - not an error, just done.
    Done,
    /// Something failed and was already reported.
    Failed,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Halt::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Halt> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_save();
        self.check_options()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Halt> {
        if self.flags.help {
            print_help();
            return Err(Halt::Done);
        }
        if self.flags.version {
            println!("passmint {}", env!("CARGO_PKG_VERSION"));
            return Err(Halt::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Halt> {
        if let Some(mode) = self.flags.mode {
            self.settings.mode = mode;
        }
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(numbers) = self.flags.numbers {
            self.settings.include_numbers = numbers;
        }
        if let Some(symbols) = self.flags.symbols {
            self.settings.include_symbols = symbols;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output::resolve_path(path);
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    debug!(error = %e, "clipboard unavailable");
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        return Err(Halt::Done);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        let mut saved = self.settings.clone();
        saved.to_clipboard = false;
        match saved.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn check_options(&self) -> Result<(), Halt> {
        let options = self.settings.options();
        if let Err(e) = options.check(self.settings.mode) {
            if self.flags.strict {
                prompts::error(&e.to_string());
                return Err(Halt::Failed);
            }
            prompts::weak_composition(&e.to_string());
        }
        Ok(())
    }

    fn rng(&self) -> Box<dyn RandomSource> {
        match self.flags.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::thread()),
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Halt> {
        let count = self.settings.number_of_passwords.max(1);
        let options = self.settings.options();
        let mut rng = self.rng();
        let mut passwords = generate_batch(self.settings.mode, &options, count, &mut rng);

        let result = if self.settings.to_clipboard {
            self.copy_to_clipboard(&passwords)
        } else if !self.settings.output_file_path.is_empty() {
            let path = Path::new(&self.settings.output_file_path);
            match output::to_file(path, &passwords) {
                Ok(()) => {
                    let full_path = std::fs::canonicalize(path)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| self.settings.output_file_path.clone());
                    prompts::passwords_written(count, &full_path);
                    Ok(())
                }
                Err(e) => {
                    prompts::error(&format!("Failed to write {}: {}", path.display(), e));
                    Err(Halt::Failed)
                }
            }
        } else {
            // A closed pipe is not worth reporting.
            let _ = output::to_stdout(&passwords);
            Ok(())
        };

        passwords.zeroize();
        result
    }

    fn copy_to_clipboard(&mut self, passwords: &[String]) -> Result<(), Halt> {
        let Some(ctx) = self.clipboard.as_mut() else {
            return Err(Halt::Failed);
        };
        let mut joined = passwords.join("\n");
        let result = match ctx.set_contents(joined.clone()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
                Ok(())
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                Err(Halt::Failed)
            }
        };
        joined.zeroize();
        result
    }
}
