//! Random identifiers and names.
//!
//! Generation is written against [`rand::Rng`] so the thread-local source and
//! the seeded source share the same code. The seeded source is reproducible:
//! the same seed always yields the same sequence of identifiers and names.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Maximum number of draws before falling back to a fixed name.
const MAX_NAME_ATTEMPTS: usize = 10;

const FALLBACK_FIRST_NAME: &str = "Alex";
const FALLBACK_LAST_NAME: &str = "Morgan";

/// Source of the random values behind `<UNIQUEID>`, `<FIRSTNAME>` and
/// `<LASTNAME>`.
///
/// Implementations must be shareable across test workers.
pub trait RandomSource: Send + Sync {
    /// Returns exactly `length` characters drawn from `[A-Za-z0-9]`.
    fn unique_id(&self, length: usize) -> String;

    /// Returns a non-empty first name.
    fn first_name(&self) -> String;

    /// Returns a non-empty last name.
    fn last_name(&self) -> String;
}

/// Draws from the calling thread's RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn unique_id(&self, length: usize) -> String {
        generate_unique_id(&mut rand::rng(), length)
    }

    fn first_name(&self) -> String {
        generate_first_name(&mut rand::rng())
    }

    fn last_name(&self) -> String {
        generate_last_name(&mut rand::rng())
    }
}

/// Reproducible source backed by a seeded `ChaCha8` RNG.
///
/// # Example
///
/// ```
/// use data_tokens::{RandomSource, SeededRandomSource};
///
/// let first = SeededRandomSource::new(42);
/// let second = SeededRandomSource::new(42);
///
/// assert_eq!(first.unique_id(8), second.unique_id(8));
/// assert_eq!(first.first_name(), second.first_name());
/// ```
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRandomSource {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    // A panic while drawing cannot leave the RNG in an invalid state.
    fn lock_rng(&self) -> MutexGuard<'_, ChaCha8Rng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RandomSource for SeededRandomSource {
    fn unique_id(&self, length: usize) -> String {
        generate_unique_id(&mut *self.lock_rng(), length)
    }

    fn first_name(&self) -> String {
        generate_first_name(&mut *self.lock_rng())
    }

    fn last_name(&self) -> String {
        generate_last_name(&mut *self.lock_rng())
    }
}

/// Picks the seeded source when a seed is configured, the thread-local one
/// otherwise.
#[must_use]
pub fn random_source_for(seed: Option<u64>) -> Arc<dyn RandomSource> {
    seed.map_or_else(
        || Arc::new(ThreadRandomSource) as Arc<dyn RandomSource>,
        |value| Arc::new(SeededRandomSource::new(value)) as Arc<dyn RandomSource>,
    )
}

/// Generates `length` characters from `[A-Za-z0-9]`.
///
/// # Example
///
/// ```
/// use data_tokens::generate_unique_id;
///
/// let id = generate_unique_id(&mut rand::rng(), 12);
/// assert_eq!(id.len(), 12);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_unique_id<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let byte: u8 = rng.sample(Alphanumeric);
            char::from(byte)
        })
        .collect()
}

fn generate_first_name<R: Rng>(rng: &mut R) -> String {
    pick_name(|| FirstName(EN).fake_with_rng(&mut *rng), FALLBACK_FIRST_NAME)
}

fn generate_last_name<R: Rng>(rng: &mut R) -> String {
    pick_name(|| LastName(EN).fake_with_rng(&mut *rng), FALLBACK_LAST_NAME)
}

/// Retries `draw` until it yields a non-blank name.
fn pick_name<F>(mut draw: F, fallback: &str) -> String
where
    F: FnMut() -> String,
{
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = draw();
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            return trimmed.to_owned();
        }
    }
    fallback.to_owned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1)]
    #[case(6)]
    #[case(12)]
    #[case(257)]
    fn unique_ids_have_exact_length_and_charset(#[case] length: usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            let id = generate_unique_id(&mut rng, length);
            assert_eq!(id.len(), length);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "bad id: {id}");
        }
    }

    #[test]
    fn zero_length_id_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(generate_unique_id(&mut rng, 0).is_empty());
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let first = SeededRandomSource::new(2026);
        let second = SeededRandomSource::new(2026);

        for _ in 0..5 {
            assert_eq!(first.unique_id(12), second.unique_id(12));
            assert_eq!(first.first_name(), second.first_name());
            assert_eq!(first.last_name(), second.last_name());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let first = SeededRandomSource::new(1);
        let second = SeededRandomSource::new(2);

        assert_ne!(first.unique_id(32), second.unique_id(32));
    }

    #[test]
    fn consecutive_draws_differ() {
        let source = SeededRandomSource::new(7);
        assert_ne!(source.unique_id(16), source.unique_id(16));
    }

    #[rstest]
    #[case(ThreadRandomSource.first_name())]
    #[case(ThreadRandomSource.last_name())]
    #[case(SeededRandomSource::new(9).first_name())]
    #[case(SeededRandomSource::new(9).last_name())]
    fn names_are_non_empty(#[case] name: String) {
        assert!(!name.is_empty());
        assert_eq!(name.trim(), name);
    }

    #[test]
    fn pick_name_skips_blank_draws() {
        let mut draws = vec!["Grace".to_owned(), "  ".to_owned(), String::new()];
        let name = pick_name(|| draws.pop().unwrap_or_default(), "Fallback");
        assert_eq!(name, "Grace");
    }

    #[test]
    fn pick_name_falls_back_after_max_attempts() {
        let mut calls = 0_usize;
        let name = pick_name(
            || {
                calls += 1;
                String::new()
            },
            FALLBACK_LAST_NAME,
        );
        assert_eq!(name, FALLBACK_LAST_NAME);
        assert_eq!(calls, MAX_NAME_ATTEMPTS);
    }

    #[test]
    fn random_source_for_honours_seed() {
        let first = random_source_for(Some(5));
        let second = random_source_for(Some(5));
        assert_eq!(first.unique_id(10), second.unique_id(10));
        assert_eq!(random_source_for(None).unique_id(10).len(), 10);
    }
}
