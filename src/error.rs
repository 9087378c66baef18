use thiserror::Error;

pub type Result<T> = std::result::Result<T, TotpError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotpError {
    #[error("code length {0} is less than the minimum of 6 digits")]
    CodeLengthTooShort(usize),
    #[error("hash algorithm {0:?} is not supported")]
    UnsupportedAlgorithm(String),
    #[error("secret length {0} is outside the valid range of 16 to 128 characters")]
    SecretLength(usize),
    #[error("no source of cryptographically secure randomness is available")]
    RandomnessUnavailable,
    #[error("invalid base32 padding")]
    InvalidPadding,
    #[error("invalid base32 character {0:?}")]
    InvalidCharacter(char),
    #[error("URI is not in valid Key Uri Format.\n\
             See https://github.com/google/google-authenticator/wiki/Key-Uri-Format for more information.")]
    InvalidKeyUri,
}
