//! Interactive terminal mode.

mod screen;
mod text;

use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, read};
use passmint::RngSource;
use tracing::debug;
use zeroize::Zeroize;

use crate::cli::prompts;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, reset_terminal};

pub use screen::{Action, Screen, Status};
pub use text::{draw_screen, print_help};

/// Block for the next key press in raw mode.
fn read_key() -> Option<KeyEvent> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
            Ok(Event::Resize(..)) => return Some(KeyEvent::from(KeyCode::Null)),
            Ok(_) => continue,
            Err(e) => {
                debug!(error = %e, "terminal read failed");
                return None;
            }
        }
    }
}

fn copy(clipboard: &mut Option<ClipboardContext>, password: &str) -> Status {
    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => return Status::ClipboardError(e.to_string()),
        }
    }
    let Some(ctx) = clipboard.as_mut() else {
        return Status::ClipboardError("unavailable".into());
    };
    match ctx.set_contents(password.to_string()) {
        Ok(()) => Status::Copied,
        Err(e) => Status::ClipboardError(e.to_string()),
    }
}

/// Run interactive mode until the user quits. Choices are saved on exit.
pub fn run() -> ExitCode {
    reset_terminal();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let mut rng = RngSource::thread();
    let mut clipboard: Option<ClipboardContext> = None;
    let mut screen = Screen::new(&settings);
    screen.regenerate(&mut rng);

    loop {
        clear();
        draw_screen(&screen);

        let Some(key) = read_key() else {
            break;
        };
        match screen.handle(key) {
            Action::Regenerate => screen.regenerate(&mut rng),
            Action::Copy => screen.status = Some(copy(&mut clipboard, &screen.password)),
            Action::Quit => break,
            Action::Ignore => {}
        }
    }

    clear();
    reset_terminal();

    screen.store(&mut settings);
    screen.password.zeroize();
    if let Err(e) = settings.save_to_file() {
        prompts::warn(&format!("Failed to save settings: {}", e));
    }

    ExitCode::SUCCESS
}
