//! Random short code generation.

use rand::{Rng, distr::Alphanumeric};

/// Default length of generated short codes.
///
/// Six alphanumeric symbols give 62^6 (~56 billion) combinations, so the
/// collision-retry loop in the shortening service practically never loops.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Generates a random short code of the requested length.
///
/// Draws uniformly from the 62-symbol alphanumeric alphabet. The result is
/// not guaranteed unique; uniqueness is enforced by the caller via
/// insert-and-retry against the repository's unique constraint.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(GENERATED_CODE_LENGTH);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
