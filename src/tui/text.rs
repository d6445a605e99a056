use passmint::Mode;
use passmint::pass::{MAX_LENGTH, MIN_LENGTH};

use super::screen::{Screen, Status};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    print_rule,
};

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn mode_choice(current: Mode, mode: Mode) -> String {
    if current == mode {
        format!("{BOLD}[{mode}]{RESET}")
    } else {
        format!("{DIM} {mode} {RESET}")
    }
}

pub fn draw_screen(screen: &Screen) {
    box_top("Passmint");
    box_line("");
    box_line_center(&format!("{BOLD}{}{RESET}", screen.password));
    box_line("");
    print_rule();
    box_line(&format!(
        "  Mode      {} {}   {DIM}(Tab){RESET}",
        mode_choice(screen.mode, Mode::Memorable),
        mode_choice(screen.mode, Mode::Random),
    ));
    box_line(&format!(
        "  Length    {:<3} {DIM}(\u{2190}/\u{2192}, {MIN_LENGTH}-{MAX_LENGTH}){RESET}",
        screen.options.length
    ));
    box_line(&format!(
        "  Numbers   {}  {DIM}(n){RESET}",
        checkbox(screen.options.include_numbers)
    ));
    box_line(&format!(
        "  Symbols   {}  {DIM}(s){RESET}",
        checkbox(screen.options.include_symbols)
    ));
    print_rule();
    match &screen.status {
        Some(Status::Copied) => box_line(&format!("  {GREEN}Copied to clipboard{RESET}")),
        Some(Status::ClipboardError(e)) => box_line(&format!("  {RED}Clipboard error: {e}{RESET}")),
        Some(Status::Weak(e)) => box_line(&format!("  {DIM}{e}{RESET}")),
        None => box_line(""),
    }
    box_bottom();
    box_line_center(&format!(
        "{DIM}r/Space regenerate \u{2022} c copy \u{2022} q quit{RESET}"
    ));
}

pub fn print_help() {
    box_top("Passmint");
    box_line_center("Random and memorable password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a screen that");
    box_line("     regenerates on every option change and copies on request.");
    box_line("  2) Client: Pass flags directly (e.g., -m random -l 20 -n 5)");
    box_line("     to generate passwords without the screen.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmint [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -m, --mode <MODE>", "memorable (words, default) or random (characters)");
    box_opt("  -l, --length <N>", "Characters per password (default: 24)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-numbers", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols; memorable mode joins words with '-' only");
    box_opt("      --numbers/--symbols", "Re-enable a class turned off by saved settings");
    box_opt("      --strict", "Fail when the length cannot guarantee every requested option");
    box_opt("      --seed <N>", "Reproducible output from a fixed seed (not for real passwords)");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: passwords.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings instead of defaults");
    box_opt("      --save", "Save the resulting settings for later runs");
    box_line("");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("Logging: set PASSMINT_LOG (e.g. debug) for diagnostics on stderr.");
    box_bottom();
}
