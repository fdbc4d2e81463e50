//! Random replacement token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default length of generated replacement tokens.
pub const DEFAULT_TOKEN_LENGTH: usize = 8;

/// Generate a random alphanumeric token of the given length.
///
/// Tokens are drawn uniformly (with replacement) from `[A-Za-z0-9]`. There
/// is no uniqueness check across tokens: at 62^8 possibilities for the
/// default length, collisions are accepted rather than mitigated.
pub fn random_token(length: usize) -> String {
    token_with(&mut rand::rng(), length)
}

/// Generate a token from a caller-supplied RNG. Lets tests seed the source.
pub fn token_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
