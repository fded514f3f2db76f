//! Test helpers for generating unique test data
//!
//! ULID-based helpers that keep test data unique across runs and between
//! concurrently running tests.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use engine_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("card");
/// let id2 = unique_str("card");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("card-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique card id
pub fn unique_card_id() -> String {
    unique_str("card")
}

/// Generate a unique negotiation note so assertions can find "their" entry
pub fn unique_note(prefix: &str) -> String {
    format!("{} [{}]", prefix, Ulid::new())
}
