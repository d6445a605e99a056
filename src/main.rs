use std::env;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("PASSMINT_LOG").unwrap_or_else(|_| "passmint=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    init_logging();
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let interactive = cli::parse(&args).is_ok_and(|flags| flags.wants_interactive());

    if interactive && cli::quiet::is_interactive() {
        tui::run()
    } else {
        cli::run(args)
    }
}
