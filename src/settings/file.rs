//! Settings file persistence.
//!
//! One comma-separated line. `|` escapes a literal `,` or `|` inside a field.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let output_path = settings
        .output_file_path
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>();

    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.mode,
        settings.pass_length,
        settings.include_numbers,
        settings.include_symbols,
        settings.number_of_passwords,
        output_path,
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, restoring defaults"
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    settings.mode = parts[0].parse().unwrap_or(settings.mode);
    settings.pass_length = parts[1]
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.pass_length);
    settings.include_numbers = parts[2].parse().unwrap_or(settings.include_numbers);
    settings.include_symbols = parts[3].parse().unwrap_or(settings.include_symbols);
    settings.number_of_passwords = parts[4].parse().unwrap_or(settings.number_of_passwords);
    settings.output_file_path = parts[5].clone();

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passmint/settings")
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
