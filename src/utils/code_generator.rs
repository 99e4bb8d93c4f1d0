//! Short code generation and shape checks.
//!
//! Codes are drawn from the 62-symbol alphanumeric alphabet (`a-z`, `A-Z`, `0-9`)
//! using the thread-local generator, which is seeded from the operating system.
//! The generator never consults storage: uniqueness is enforced by the link store.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in every generated short code.
pub const CODE_LENGTH: usize = 8;

/// Generates a random short code.
///
/// Every character is drawn independently and uniformly from the alphanumeric
/// alphabet. Codes are identifiers, not secrets.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns `true` if `code` has the shape of a generated code.
///
/// Anything else can never be present in the store, so lookups may skip it.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
