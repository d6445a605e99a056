//! Writing generated passwords to a file or stdout.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use zeroize::Zeroize;

const DEFAULT_FILE: &str = "passwords.txt";

/// Resolve the `-o` argument: `.` or a trailing `/` means a directory,
/// and a missing `.txt` extension is appended.
pub fn resolve_path(path: &str) -> String {
    if path == "." {
        DEFAULT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_FILE}")
    } else if !path.ends_with(".txt") {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}

/// Write one password per line, wiping each line buffer after use.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<()> {
    let mut line = Vec::new();
    for password in passwords {
        line.extend_from_slice(password.as_bytes());
        line.push(b'\n');
        let result = out.write_all(&line);
        line.zeroize();
        result?;
    }
    out.flush()
}

/// Append passwords to `path`.
pub fn to_file(path: &Path, passwords: &[String]) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_lines(&mut BufWriter::new(file), passwords)
}

pub fn to_stdout(passwords: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    write_lines(&mut stdout.lock(), passwords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_output_paths() {
        assert_eq!(resolve_path("."), "passwords.txt");
        assert_eq!(resolve_path("keys/"), "keys/passwords.txt");
        assert_eq!(resolve_path("keys"), "keys.txt");
        assert_eq!(resolve_path("keys.txt"), "keys.txt");
    }

    #[test]
    fn writes_one_per_line() {
        let mut out = Vec::new();
        write_lines(&mut out, &["Apple-tiger42".into(), "aB3$".into()]).unwrap();
        assert_eq!(out, b"Apple-tiger42\naB3$\n");
    }

    #[test]
    fn appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        to_file(&path, &["one".into()]).unwrap();
        to_file(&path, &["two".into()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
