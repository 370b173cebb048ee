//! CLI context - bundles settings and flags, runs one generation.

use std::io::{self, Write};
use std::path::Path;

use passforge::{GenerationRequest, Generated, Rand, RandomSource, Seeded, estimate, pass};
use thiserror::Error;
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::clipboard::{Clipboard, Outcome};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] passforge::Error),
    #[error("choose at least one character type")]
    NoClassesSelected,
    #[error("{0}")]
    CopyFailed(String),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoClassesSelected => 2,
            _ => 1,
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let mut ctx = Self { settings, flags };
        ctx.apply_flags();
        ctx
    }

    /// Apply CLI flags on top of the starting settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        for class in self.flags.excluded() {
            self.settings.classes.remove(class);
        }
        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
        if self.flags.strength {
            self.settings.show_strength = true;
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        prompts::set_quiet(self.flags.quiet);

        let request = GenerationRequest::new(self.settings.pass_length, self.settings.classes)?;

        if self.flags.save {
            self.save_settings(&Settings::file_path());
        }

        match self.flags.seed {
            Some(seed) => {
                prompts::seeded_source(seed);
                self.emit(&request, &mut Seeded::new(seed))
            }
            None => {
                let mut rng = Rand::new();
                if !rng.is_secure() {
                    prompts::insecure_source(rng.source_name());
                }
                self.emit(&request, &mut rng)
            }
        }
    }

    /// Returns whether the settings were written. A selection with no
    /// classes is never saved.
    fn save_settings(&self, path: &Path) -> bool {
        if self.settings.classes.is_empty() {
            prompts::warn("Settings not saved: no character types selected");
            return false;
        }
        match self.settings.save_to(path) {
            Ok(()) => {
                prompts::settings_saved();
                true
            }
            Err(e) => {
                prompts::warn(&format!("Failed to save settings: {e}"));
                false
            }
        }
    }

    fn emit<R: RandomSource>(&mut self, request: &GenerationRequest, rng: &mut R) -> Result<(), Error> {
        let count = self.flags.number.max(1);
        let mut passwords = Vec::with_capacity(count);
        for generated in pass::generate_batch(request, count, rng) {
            match generated {
                Generated::Password(p) => passwords.push(p),
                Generated::NoClassesSelected => {
                    prompts::no_classes_selected();
                    return Err(Error::NoClassesSelected);
                }
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.settings.to_clipboard {
            let mut joined = passwords
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let outcome = Clipboard::new().copy(Some(&joined), &mut out);
            joined.zeroize();

            let message = outcome.message();
            match outcome {
                Outcome::Copied => prompts::notice(&format!("*** {message} ***")),
                Outcome::Manual | Outcome::NothingToCopy => prompts::warn(message),
                Outcome::Failed(reason) => {
                    prompts::error(&format!("Copy failed: {reason}"));
                    return Err(Error::CopyFailed(reason));
                }
            }
        } else {
            for password in &passwords {
                writeln!(out, "{password}")?;
            }
            out.flush()?;
        }

        if self.settings.show_strength {
            for password in &passwords {
                prompts::strength(&estimate(password));
            }
        }
        Ok(())
    }
}
