//! Password generation.

mod charset;
mod generate;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{
    GenerationRequest, Generated, MAX_LENGTH, Password, generate, generate_batch, shuffle,
};
