//! Random number sources.
//!
//! [`Rand`] prefers the operating system CSPRNG and drops to a
//! cycle-counter generator when the OS source cannot be read. [`Seeded`]
//! is a reproducible stream for tests.

mod fallback;
mod hw;
mod seeded;

use std::sync::atomic::{AtomicBool, Ordering};

use ::rand::RngCore;
use ::rand::rngs::OsRng;

pub use fallback::Fallback;
pub use seeded::Seeded;

/// Uniform integers in `[0, bound)`.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, bound: usize) -> usize {
        (**self).next_int(bound)
    }
}

// Set once the first time any instance falls back.
static FALLBACK_LOGGED: AtomicBool = AtomicBool::new(false);

/// Returns `true` if this call emitted the warning.
fn log_fallback(reason: &dyn std::fmt::Display) -> bool {
    if FALLBACK_LOGGED.swap(true, Ordering::SeqCst) {
        return false;
    }
    log::warn!(
        "secure random source unavailable ({reason}); using {} fallback, generated passwords are NOT cryptographically strong",
        hw::source_name()
    );
    true
}

/// Default random source.
///
/// The secure path reduces a 32-bit draw modulo `bound`. For bounds that
/// do not divide 2^32 this has a bias of at most `bound / 2^32`, which is
/// below 2.2e-8 for the pools used here (at most 90 characters).
///
/// If the secure source fails after construction the instance switches to
/// the fallback for the rest of its life.
pub enum Rand<S = OsRng> {
    Secure(S),
    Fallback(Fallback),
}

impl Rand {
    /// Test the OS generator once and pick a source.
    pub fn new() -> Self {
        let mut check = [0u8; 4];
        match OsRng.try_fill_bytes(&mut check) {
            Ok(()) => Rand::Secure(OsRng),
            Err(e) => {
                log_fallback(&e);
                Rand::Fallback(Fallback::new())
            }
        }
    }

    /// Force the non-cryptographic generator.
    pub fn fallback() -> Self {
        Rand::Fallback(Fallback::new())
    }
}

impl<S: RngCore> Rand<S> {
    pub fn is_secure(&self) -> bool {
        matches!(self, Rand::Secure(_))
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            Rand::Secure(_) => "OS CSPRNG",
            Rand::Fallback(_) => hw::source_name(),
        }
    }

    fn secure_u32(rng: &mut S) -> Result<u32, ::rand::Error> {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RngCore> RandomSource for Rand<S> {
    fn next_int(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_int bound must be non-zero");
        match self {
            Rand::Secure(rng) => match Self::secure_u32(rng) {
                Ok(v) => v as usize % bound,
                Err(e) => {
                    log_fallback(&e);
                    *self = Rand::Fallback(Fallback::new());
                    self.next_int(bound)
                }
            },
            Rand::Fallback(rng) => rng.next_int(bound),
        }
    }
}
