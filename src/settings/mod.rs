//! Generation settings.

mod file;

use std::path::{Path, PathBuf};

use passforge::{CharacterClass, ClassSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub to_clipboard: bool,
    pub show_strength: bool,
}

impl Settings {
    /// `$HOME/.config/passforge/settings`
    pub fn file_path() -> PathBuf {
        file::default_path()
    }

    pub fn load_from_file() -> Result<Self, Error> {
        Self::load_from(&Self::file_path())
    }

    pub fn save_to_file(&self) -> Result<(), Error> {
        self.save_to(&Self::file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        file::save(self, path)
    }

    pub fn class_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
            to_clipboard: false,
            show_strength: false,
        }
    }
}
