//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,lowercase,uppercase,digits,symbols,clipboard,show_strength`.
//! Fields that fail to parse keep their defaults; a line with the wrong
//! field count is replaced with the defaults.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use passforge::CharacterClass;
use passforge::pass::MAX_LENGTH;

use super::{Error, Settings};

const FIELD_COUNT: usize = 7;

pub fn save(settings: &Settings, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let enabled = |class| settings.class_enabled(class);
    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        enabled(CharacterClass::Lowercase),
        enabled(CharacterClass::Uppercase),
        enabled(CharacterClass::Digit),
        enabled(CharacterClass::Symbol),
        settings.to_clipboard,
        settings.show_strength,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> Result<(), Error> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        log::warn!(
            "settings file {} is malformed ({} fields), rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.pass_length = match parts[0].parse() {
        Ok(n) if (1..=MAX_LENGTH).contains(&n) => n,
        _ => settings.pass_length,
    };
    for (class, raw) in CharacterClass::ALL.into_iter().zip(&parts[1..5]) {
        let enabled = raw.parse().unwrap_or(settings.class_enabled(class));
        settings.classes.set(class, enabled);
    }
    settings.to_clipboard = parts[5].parse().unwrap_or(settings.to_clipboard);
    settings.show_strength = parts[6].parse().unwrap_or(settings.show_strength);

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}
