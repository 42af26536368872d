//! Job identifier generators
//!
//! The pool never decides how ids look. It calls whatever generator is installed
//! once per submission, possibly from several submitting threads at once, so a
//! generator must be `Send + Sync`. Uniqueness is only as good as the generator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared id generator, called once per submitted job
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync + 'static>;

/// Sequential ids `"1"`, `"2"`, ... unique within the generator
pub fn sequential() -> IdGenerator {
    let next = AtomicU64::new(1);
    Arc::new(move || next.fetch_add(1, Ordering::Relaxed).to_string())
}

/// Sequential ids with a fixed prefix, e.g. `"fetch-1"`
pub fn sequential_with_prefix(prefix: impl Into<String>) -> IdGenerator {
    let prefix = prefix.into();
    let next = AtomicU64::new(1);
    Arc::new(move || format!("{}-{}", prefix, next.fetch_add(1, Ordering::Relaxed)))
}

/// Random UUID v4 ids
pub fn uuid_v4() -> IdGenerator {
    Arc::new(|| uuid::Uuid::new_v4().to_string())
}

/// Random numeric ids in `1..=max`
///
/// Collisions are expected once enough jobs are submitted.
///
/// # Panics
///
/// Panics if `max` is zero.
pub fn random_numeric(max: u64) -> IdGenerator {
    assert!(max > 0, "max must be greater than 0");
    Arc::new(move || fastrand::u64(1..=max).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_sequential() {
        let next = sequential();
        assert_eq!(next(), "1");
        assert_eq!(next(), "2");
        assert_eq!(next(), "3");
    }

    #[test]
    fn test_sequential_with_prefix() {
        let next = sequential_with_prefix("fetch");
        assert_eq!(next(), "fetch-1");
        assert_eq!(next(), "fetch-2");
    }

    #[test]
    fn test_sequential_is_unique_across_threads() {
        let next = sequential();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let next = Arc::clone(&next);
                thread::spawn(move || (0..250).map(|_| next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("Thread panicked") {
                assert!(seen.insert(id), "duplicate id");
            }
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_uuid_v4() {
        let next = uuid_v4();
        let a = next();
        let b = next();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_random_numeric_range() {
        let next = random_numeric(9);
        for _ in 0..100 {
            let n: u64 = next().parse().expect("numeric id");
            assert!((1..=9).contains(&n));
        }
    }

    #[test]
    #[should_panic(expected = "max must be greater than 0")]
    fn test_random_numeric_zero_panics() {
        let _ = random_numeric(0);
    }
}
