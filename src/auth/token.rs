//! Random token generation

use rand::Rng;
use rand::distributions::Alphanumeric;

pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Returns `len` random ASCII alphanumerics from the thread-local CSPRNG.
pub fn generate_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
