use passmint::Mode;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub quiet: bool,
    pub strict: bool,
    pub mode: Option<Mode>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

impl CliFlags {
    /// True when any flag changes what gets generated.
    pub fn has_explicit_args(&self) -> bool {
        self.mode.is_some()
            || self.length.is_some()
            || self.number.is_some()
            || self.numbers.is_some()
            || self.symbols.is_some()
            || self.seed.is_some()
            || self.output.is_some()
            || self.clipboard
            || self.saved
            || self.save
            || self.strict
    }

    /// True when nothing on the command line asks for a one-shot run.
    pub fn wants_interactive(&self) -> bool {
        !self.has_explicit_args() && !self.help && !self.version && !self.quiet
    }
}
