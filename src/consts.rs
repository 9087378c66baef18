//! Runtime constants
//!
//! # consts
//!
//! This module houses constants used throughout the code.

/// The 32-symbol alphabet secrets are written in (RFC 4648, `A-Z2-7`).
pub const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// Character used to pad base32 output to an 8-character boundary.
pub const BASE32_PADDING: u8 = b'=';

/// Valid secret lengths are 80 to 640 bits.
pub const MIN_SECRET_LENGTH: usize = 16;
pub const MAX_SECRET_LENGTH: usize = 128;
pub const DEFAULT_SECRET_LENGTH: usize = 32;

pub const MIN_CODE_LENGTH: usize = 6;
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Length of one time step, in seconds.
pub const PERIOD: u64 = 30;

/// QR-rendering endpoint used for provisioning URLs.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 200;
