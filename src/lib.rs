//! Time-based One-Time Passwords
//!
//! Generation and verification of TOTP codes (RFC6238) together with the
//! base32 secret codec, secure secret generation, and otpauth provisioning
//! URIs, compatible with the common authenticator apps.

pub mod base32;
pub mod consts;
pub mod error;
pub mod otp;
pub mod secret;
pub mod uri;

pub use crate::error::TotpError;
pub use crate::otp::{current_time_step, time_step, timing_safe_eq, HashAlgorithm, Totp};
pub use crate::secret::{generate_default_secret, generate_secret};
pub use crate::uri::{KeyUri, QrCodeParams};
