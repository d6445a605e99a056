mod context;
mod flags;
mod output;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use context::{Context, Halt};
pub use flags::CliFlags;
pub use parse::parse;

/// Run in client mode with the full argument list.
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run `passmint --help` for usage.");
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Halt::Done) => ExitCode::SUCCESS,
        Err(Halt::Failed) => ExitCode::FAILURE,
    }
}
