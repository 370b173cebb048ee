//! Password generation.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, Zeroizing};

use super::charset::ClassSet;
use crate::error::{Error, Result};
use crate::rng::RandomSource;

/// Longest password a request may ask for.
pub const MAX_LENGTH: usize = 4096;

/// Length and classes for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    /// Fails with [`Error::InvalidLength`] when `length` is zero or above
    /// [`MAX_LENGTH`].
    pub fn new(length: usize, classes: ClassSet) -> Result<Self> {
        if !(1..=MAX_LENGTH).contains(&length) {
            return Err(Error::InvalidLength(length));
        }
        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// Output length: at least one character per enabled class.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.classes.len())
    }
}

/// A generated password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Outcome of [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Password(Password),
    /// No character class was enabled. Not an error: the caller shows a
    /// prompt and resets the strength display.
    NoClassesSelected,
}

impl Generated {
    pub fn password(&self) -> Option<&Password> {
        match self {
            Generated::Password(p) => Some(p),
            Generated::NoClassesSelected => None,
        }
    }

    pub fn into_password(self) -> Option<Password> {
        match self {
            Generated::Password(p) => Some(p),
            Generated::NoClassesSelected => None,
        }
    }
}

/// Generate one password.
///
/// One character is drawn from each enabled class's own pool first, the
/// rest come from the combined pool, and the whole sequence is shuffled so
/// the guaranteed characters land in random positions.
pub fn generate<R: RandomSource>(request: &GenerationRequest, rng: &mut R) -> Generated {
    let classes = request.classes();
    if classes.is_empty() {
        return Generated::NoClassesSelected;
    }

    let pool = classes.pool();
    let length = request.effective_length();
    let mut chars: Vec<char> = Vec::with_capacity(length);

    for class in classes.iter() {
        let class_pool = class.pool();
        chars.push(class_pool[rng.next_int(class_pool.len())]);
    }

    while chars.len() < length {
        chars.push(pool[rng.next_int(pool.len())]);
    }

    shuffle(&mut chars, rng);

    let password: String = chars.iter().collect();
    chars.zeroize();

    log::debug!("generated {length} character password from {} classes", classes.len());
    Generated::Password(Password(Zeroizing::new(password)))
}

/// Generate `count` independent passwords with the same request.
pub fn generate_batch<R: RandomSource>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Vec<Generated> {
    (0..count).map(|_| generate(request, rng)).collect()
}

/// Fisher–Yates: walk down from the end, swapping each slot with a
/// uniformly chosen slot at or below it.
pub fn shuffle<T, R: RandomSource>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_int(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::pass::charset::CharacterClass;
    use crate::rng::{Rand, Seeded};

    fn request(length: usize, classes: &[CharacterClass]) -> GenerationRequest {
        GenerationRequest::new(length, classes.iter().copied().collect()).unwrap()
    }

    fn class_subsets() -> Vec<Vec<CharacterClass>> {
        (1u8..16)
            .map(|mask| {
                CharacterClass::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, c)| c)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = GenerationRequest::new(0, ClassSet::all()).unwrap_err();
        assert_eq!(err, Error::InvalidLength(0));
    }

    #[test]
    fn oversized_length_is_rejected() {
        for length in [MAX_LENGTH + 1, usize::MAX] {
            let err = GenerationRequest::new(length, ClassSet::all()).unwrap_err();
            assert_eq!(err, Error::InvalidLength(length));
        }
    }

    #[test]
    fn longest_allowed_length_generates() {
        let req = GenerationRequest::new(MAX_LENGTH, ClassSet::all()).unwrap();
        let generated = generate(&req, &mut Seeded::new(9));
        assert_eq!(generated.password().map(|p| p.len()), Some(MAX_LENGTH));
    }

    #[test]
    fn no_classes_selected_for_any_length() {
        let mut rng = Rand::new();
        for length in [1, 4, 16, 128] {
            let req = GenerationRequest::new(length, ClassSet::empty()).unwrap();
            assert_eq!(generate(&req, &mut rng), Generated::NoClassesSelected);
        }
    }

    #[test]
    fn length_and_coverage_for_every_subset() {
        let mut rng = Seeded::new(0xC0FFEE);
        for classes in class_subsets() {
            for length in [1, 2, 3, 4, 8, 16, 64] {
                let req = request(length, &classes);
                let password = generate(&req, &mut rng).into_password().unwrap();
                assert_eq!(password.len(), length.max(classes.len()));
                for class in &classes {
                    assert!(
                        password.chars().any(|c| class.pool().contains(&c)),
                        "{password:?} missing {class}"
                    );
                }
                let pool = req.classes().pool();
                assert!(password.chars().all(|c| pool.contains(&c)));
            }
        }
    }

    #[test]
    fn short_length_is_raised_to_class_count() {
        let mut rng = Rand::new();
        let req = request(2, &CharacterClass::ALL);
        assert_eq!(req.effective_length(), 4);
        let password = generate(&req, &mut rng).into_password().unwrap();
        assert_eq!(password.len(), 4);
    }

    #[test]
    fn repeated_calls_differ() {
        let mut rng = Rand::new();
        let req = request(16, &CharacterClass::ALL);
        let seen: HashSet<String> = (0..200)
            .map(|_| generate(&req, &mut rng).into_password().unwrap().to_string())
            .collect();
        assert_eq!(seen.len(), 200);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let req = request(20, &CharacterClass::ALL);
        let a = generate(&req, &mut Seeded::new(9));
        let b = generate(&req, &mut Seeded::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn guaranteed_characters_are_not_pinned_to_the_front() {
        // Lowercase is seeded first; after shuffling the first slot must
        // hold a digit some of the time.
        let mut rng = Seeded::new(3);
        let req = request(12, &[CharacterClass::Lowercase, CharacterClass::Digit]);
        let first_is_letter = (0..200)
            .filter_map(|_| generate(&req, &mut rng).into_password())
            .filter(|p| p.chars().next().is_some_and(|c| c.is_ascii_lowercase()))
            .count();
        assert!(first_is_letter > 0 && first_is_letter < 200);
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut rng = Rand::new();
        let original: Vec<char> = "aabbccddeeffgg0123!!".chars().collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        let count = |v: &[char]| {
            let mut m: HashMap<char, usize> = HashMap::new();
            for c in v {
                *m.entry(*c).or_default() += 1;
            }
            m
        };
        assert_eq!(count(&original), count(&shuffled));
    }

    #[test]
    fn shuffle_reaches_every_permutation() {
        let mut rng = Seeded::new(11);
        let mut seen = HashSet::new();
        for _ in 0..600 {
            let mut items = [1, 2, 3];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        let mut rng = Rand::new();
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = ['x'];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, ['x']);
    }

    #[test]
    fn batch_yields_requested_count() {
        let mut rng = Rand::new();
        let req = request(10, &[CharacterClass::Digit]);
        let batch = generate_batch(&req, 5, &mut rng);
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|g| g.password().is_some_and(|p| p.len() == 10)));
    }

    #[test]
    fn debug_does_not_leak() {
        let mut rng = Rand::new();
        let password = generate(&request(8, &[CharacterClass::Lowercase]), &mut rng)
            .into_password()
            .unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }
}
