use thiserror::Error;

/// Errors returned by the generation core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Password length outside `1..=MAX_LENGTH`.
    #[error("invalid password length: {0} (must be between 1 and {max})", max = crate::pass::MAX_LENGTH)]
    InvalidLength(usize),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
