//! Candidate short-code construction.
//!
//! A candidate is built from a content hash of the URL plus a short random
//! alphanumeric suffix, truncated to the configured length. Retries change
//! the hash input by appending the attempt number, so every attempt yields
//! a fresh candidate for the same URL.

use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// Default candidate length in characters.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Hex digest length of the content hash; the upper bound for `length`.
pub const MAX_CODE_LENGTH: usize = 64;

/// Number of random alphanumeric characters appended after the hash.
const RANDOM_SUFFIX_LEN: usize = 3;

/// Produces a candidate short code for `url` at the given allocation
/// attempt.
///
/// Attempt 0 hashes the URL as-is; later attempts append the attempt number
/// to the URL before hashing, changing the candidate. The hex digest is
/// concatenated with [`RANDOM_SUFFIX_LEN`] random alphanumeric characters
/// and truncated to `length`.
///
/// Always returns exactly `length` characters provided `length` does not
/// exceed [`MAX_CODE_LENGTH`]; [`crate::config::Config::validate`] enforces
/// that bound at startup.
pub fn candidate_code(url: &str, attempt: u32, length: usize) -> String {
    let input: Cow<'_, str> = if attempt == 0 {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{url}{attempt}"))
    };

    let digest = Sha256::digest(input.as_bytes());
    let mut combined = hex::encode(digest);

    let mut rng = rand::rng();
    combined.extend(
        (&mut rng)
            .sample_iter(Alphanumeric)
            .take(RANDOM_SUFFIX_LEN)
            .map(char::from),
    );

    combined.truncate(length);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_candidate_has_configured_length() {
        for length in [1, 4, DEFAULT_CODE_LENGTH, 16, MAX_CODE_LENGTH] {
            let code = candidate_code("https://example.com", 0, length);
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_candidate_is_alphanumeric() {
        let code = candidate_code("https://example.com", 0, DEFAULT_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_attempts_produce_distinct_candidates() {
        let mut codes = HashSet::new();
        for attempt in 0..5 {
            codes.insert(candidate_code("https://example.com", attempt, 16));
        }
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_distinct_urls_produce_distinct_candidates() {
        let a = candidate_code("https://example.com/a", 0, 16);
        let b = candidate_code("https://example.com/b", 0, 16);
        assert_ne!(a, b);
    }

    #[test]
    fn test_truncated_candidate_is_stable_for_same_input() {
        // At the default length the candidate comes entirely from the hash
        // prefix, so the same URL and attempt give the same code.
        let a = candidate_code("https://example.com", 2, DEFAULT_CODE_LENGTH);
        let b = candidate_code("https://example.com", 2, DEFAULT_CODE_LENGTH);
        assert_eq!(a, b);
    }
}
