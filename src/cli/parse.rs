use passmint::Mode;
use passmint::pass::UnknownMode;

use super::CliFlags;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Length must be at least 1")]
    ZeroLength,
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error(transparent)]
    InvalidMode(#[from] UnknownMode),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--strict" => flags.strict = true,
            "--numbers" => flags.numbers = Some(true),
            "--no-numbers" => flags.numbers = Some(false),
            "--symbols" => flags.symbols = Some(true),
            "--no-symbols" => flags.symbols = Some(false),
            "-m" | "--mode" => {
                flags.mode = Some(value(args, &mut i, "--mode")?.parse::<Mode>()?);
            }
            "-l" | "--length" => {
                let length: usize = number(value(args, &mut i, "--length")?)?;
                if length == 0 {
                    return Err(ParseError::ZeroLength);
                }
                flags.length = Some(length);
            }
            "-n" | "--number" => {
                flags.number = Some(number(value(args, &mut i, "--number")?)?);
            }
            "--seed" => {
                flags.seed = Some(number(value(args, &mut i, "--seed")?)?);
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    // No path given, default to current dir
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("passmint")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args("-m random -l 32 -n 3 --no-symbols --seed 99")).unwrap();
        assert_eq!(flags.mode, Some(Mode::Random));
        assert_eq!(flags.length, Some(32));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.symbols, Some(false));
        assert_eq!(flags.numbers, None);
        assert_eq!(flags.seed, Some(99));
        assert!(flags.has_explicit_args());
        assert!(!flags.wants_interactive());
    }

    #[test]
    fn bare_invocation_is_interactive() {
        assert!(parse(&args("")).unwrap().wants_interactive());
        assert!(!parse(&args("--save")).unwrap().wants_interactive());
        assert!(!parse(&args("--strict")).unwrap().wants_interactive());
    }

    #[test]
    fn later_toggle_wins() {
        let flags = parse(&args("--no-numbers --numbers")).unwrap();
        assert_eq!(flags.numbers, Some(true));
    }

    #[test]
    fn output_defaults_to_current_dir() {
        let flags = parse(&args("-o -q")).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);
        let flags = parse(&args("--output keys.txt")).unwrap();
        assert_eq!(flags.output.as_deref(), Some("keys.txt"));
    }

    #[test]
    fn info_flags_are_not_explicit() {
        let flags = parse(&args("-h -v -q")).unwrap();
        assert!(flags.help && flags.version && flags.quiet);
        assert!(!flags.has_explicit_args());
        assert!(!flags.wants_interactive());
        assert!(!parse(&args("-q")).unwrap().wants_interactive());
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&args("-l abc")).unwrap_err(),
            ParseError::InvalidNumber("abc".into())
        );
        assert_eq!(parse(&args("-l 0")).unwrap_err(), ParseError::ZeroLength);
        assert_eq!(
            parse(&args("-l")).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
        assert!(matches!(
            parse(&args("-m pin")),
            Err(ParseError::InvalidMode(_))
        ));
        assert_eq!(
            parse(&args("--hex")).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
    }
}
