//! One-Time Password generation and verification
//!
//! # otp
//!
//! This module houses the implementation of RFC6238 for use in generating
//! and verifying Time-based One-Time Passwords: HMAC over the current time
//! step, dynamic truncation down to a short decimal code, and window-based
//! verification of untrusted candidate codes in constant time.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use ring::hmac;

use crate::base32;
use crate::consts::{DEFAULT_CODE_LENGTH, MIN_CODE_LENGTH, PERIOD};
use crate::error::{Result, TotpError};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    fn hmac_algorithm(self) -> hmac::Algorithm {
        match self {
            HashAlgorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            HashAlgorithm::Sha256 => hmac::HMAC_SHA256,
            HashAlgorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }

    /// The canonical parameter spelling, as used in key URIs.
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> HashAlgorithm {
        HashAlgorithm::Sha1
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = TotpError;

    fn from_str(s: &str) -> Result<HashAlgorithm> {
        match s.to_ascii_lowercase().as_ref() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(TotpError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

/// A TOTP engine with a fixed code length and hash algorithm.
///
/// Both settings are immutable for the lifetime of the engine; code
/// computation is a pure function of the secret and the time step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Totp {
    code_length: usize,
    algo: HashAlgorithm,
}

impl Default for Totp {
    /// Six digits, HMAC-SHA256.
    fn default() -> Totp {
        Totp {
            code_length: DEFAULT_CODE_LENGTH,
            algo: HashAlgorithm::Sha256,
        }
    }
}

impl Totp {
    pub fn new(code_length: usize, algo: HashAlgorithm) -> Result<Totp> {
        if code_length < MIN_CODE_LENGTH {
            return Err(TotpError::CodeLengthTooShort(code_length));
        }

        Ok(Totp { code_length, algo })
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algo
    }

    /// Computes the code for `secret` at the given time step.
    ///
    /// A secret that is not valid base32 is treated as an empty key rather
    /// than an error; verification against such a secret simply fails.
    /// Deployed integrations rely on that lenient behavior, so it is kept.
    pub fn code_at<S>(&self, secret: S, time_step: u64) -> String
    where
        S: AsRef<str>,
    {
        let key = base32::decode(secret.as_ref()).unwrap_or_default();

        // The time step is packed big-endian into 8 bytes with the high 4
        // bytes zero, which caps the horizon at 32-bit unix time (year 2106).
        let mut message = [0u8; 8];
        message[4..].copy_from_slice(&(time_step as u32).to_be_bytes());

        let key = hmac::Key::new(self.algo.hmac_algorithm(), &key);
        let mac = hmac::sign(&key, &message);
        let mac = mac.as_ref();

        // Dynamic truncation: the low nibble of the final byte picks which
        // 4 bytes of the MAC become the code.
        let offset = (mac[mac.len() - 1] & 0x0f) as usize;
        let value = ((u32::from(mac[offset]) & 0x7f) << 24)
            | (u32::from(mac[offset + 1]) << 16)
            | (u32::from(mac[offset + 2]) << 8)
            | u32::from(mac[offset + 3]);

        // The truncated value is below 2^31, so from 10 digits up the modulo
        // no longer reduces it (and 10^20 would overflow anyway).
        let value = match 10u64.checked_pow(self.code_length as u32) {
            Some(modulo) => u64::from(value) % modulo,
            None => u64::from(value),
        };

        format!("{:0width$}", value, width = self.code_length)
    }

    /// Computes the code for `secret` at the current time step.
    pub fn code<S>(&self, secret: S) -> String
    where
        S: AsRef<str>,
    {
        self.code_at(secret, current_time_step())
    }

    /// Checks `candidate` against the window of `discrepancy` time steps on
    /// either side of `reference_step`.
    ///
    /// A candidate whose length differs from the engine's code length is
    /// rejected outright, with no trimming or normalization. Offsets are
    /// tried in ascending order and each comparison runs in constant time.
    pub fn verify_at<S>(
        &self,
        secret: S,
        candidate: &str,
        discrepancy: u64,
        reference_step: u64,
    ) -> bool
    where
        S: AsRef<str>,
    {
        if candidate.len() != self.code_length {
            return false;
        }

        let secret = secret.as_ref();
        for offset in -(discrepancy as i64)..=discrepancy as i64 {
            let step = reference_step.wrapping_add(offset as u64);
            let expected = self.code_at(secret, step);
            if timing_safe_eq(expected.as_bytes(), candidate.as_bytes()) {
                return true;
            }
        }

        false
    }

    /// [`Totp::verify_at`] against the current time step.
    pub fn verify<S>(&self, secret: S, candidate: &str, discrepancy: u64) -> bool
    where
        S: AsRef<str>,
    {
        self.verify_at(secret, candidate, discrepancy, current_time_step())
    }
}

/// The current 30-second time step.
pub fn current_time_step() -> u64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Couldn't get duration since UNIX_EPOCH")
        .as_secs();

    timestamp / PERIOD
}

/// The time step a unix timestamp falls into.
pub fn time_step(unix_time: u64) -> u64 {
    unix_time / PERIOD
}

/// Compares two byte strings in constant time.
///
/// True iff the lengths match and every byte matches. All bytes are visited
/// regardless of where the first difference sits; differences are folded
/// into a single accumulator that is zero only for a full match.
pub fn timing_safe_eq(safe: &[u8], user: &[u8]) -> bool {
    if safe.len() != user.len() {
        return false;
    }

    let mut diff = 0u8;
    for (a, b) in safe.iter().zip(user) {
        diff |= a ^ b;
    }

    diff == 0
}
