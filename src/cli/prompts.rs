//! Centralized warning and notice messages for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

use passforge::StrengthResult;

use crate::terminal::{RED, RESET, strength_line};

const YELLOW: &str = "\x1b[33m";

// Suppresses warnings and notices, never errors or passwords.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Plain notice on stderr, suppressed in quiet mode.
pub fn notice(msg: &str) {
    if !quiet() {
        eprintln!("{msg}");
    }
}

/// Printed whenever the secure source is missing, even in quiet mode: the
/// passwords on stdout are weaker than the user expects.
pub fn insecure_source(source: &str) {
    error(&format!(
        "WARNING: secure random source unavailable, using {source}. Generated passwords are not cryptographically strong."
    ));
}

pub fn seeded_source(seed: u64) {
    warn(&format!(
        "Warning: --seed {seed} makes output reproducible. Do not use these passwords."
    ));
}

pub fn no_classes_selected() {
    error("Choose at least one character type");
}

pub fn strength(result: &StrengthResult) {
    notice(&format!("  {}", strength_line(result)));
}

pub fn settings_saved() {
    notice("Settings saved.");
}
