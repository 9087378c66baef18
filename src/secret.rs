//! Shared-secret generation
//!
//! # secret
//!
//! New secrets are drawn from the system CSPRNG and written directly in the
//! base32 alphabet, ready to hand to an authenticator app.

use ring::rand::{SecureRandom, SystemRandom};

use crate::consts::{
    BASE32_ALPHABET, DEFAULT_SECRET_LENGTH, MAX_SECRET_LENGTH, MIN_SECRET_LENGTH,
};
use crate::error::{Result, TotpError};

/// Creates a new shared secret of `length` base32 characters.
///
/// Valid secret lengths are 80 to 640 bits, i.e. 16 to 128 characters. If
/// the entropy read fails the call fails; there is no fallback to a weaker
/// generator.
pub fn generate_secret(length: usize) -> Result<String> {
    if length < MIN_SECRET_LENGTH || length > MAX_SECRET_LENGTH {
        return Err(TotpError::SecretLength(length));
    }

    let mut bytes = vec![0u8; length];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| TotpError::RandomnessUnavailable)?;

    Ok(bytes
        .iter()
        .map(|&b| BASE32_ALPHABET[(b & 0x1f) as usize] as char)
        .collect())
}

/// [`generate_secret`] with the default length of 32 characters.
pub fn generate_default_secret() -> Result<String> {
    generate_secret(DEFAULT_SECRET_LENGTH)
}
