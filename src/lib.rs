//! Password generation with guaranteed character-class coverage, plus a
//! simple strength heuristic.
//!
//! The two entry points are [`pass::generate`] and [`strength::estimate`].
//! Everything that touches the terminal or the clipboard lives in the
//! `passforge` binary.

mod error;
pub mod pass;
pub mod rng;
pub mod strength;

pub use error::{Error, Result};
pub use pass::{CharacterClass, ClassSet, GenerationRequest, Generated, Password, generate};
pub use rng::{Rand, RandomSource, Seeded};
pub use strength::{Label, StrengthResult, estimate};
