//! Base32 secret codec
//!
//! # base32
//!
//! Secrets travel as RFC4648 base32 text over the `A-Z2-7` alphabet.
//! Decoding keeps the group semantics deployed authenticator secrets depend
//! on: input is consumed in 8-character groups, a trailing partial group is
//! completed with zero-valued symbols, and every group contributes 5 bytes
//! of key material.

use crate::consts::{BASE32_ALPHABET, BASE32_PADDING};
use crate::error::{Result, TotpError};

/// Encodes `bytes` as base32 text, `=`-padded to an 8-character boundary.
pub fn encode<V>(bytes: V) -> String
where
    V: AsRef<[u8]>,
{
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity((bytes.len() * 8 + 4) / 5);
    let mut acc = 0u32;
    let mut bits = 0;

    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[(acc >> bits & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[(acc << (5 - bits) & 0x1f) as usize] as char);
    }
    while out.len() % 8 != 0 {
        out.push(BASE32_PADDING as char);
    }

    out
}

/// Decodes base32 `text` into raw bytes.
///
/// The padding-character count must be one of 0, 1, 3, 4 or 6, and all
/// padding must sit at the end of the input. Any character outside the
/// alphabet is rejected. Empty input decodes to an empty byte sequence.
pub fn decode<S>(text: S) -> Result<Vec<u8>>
where
    S: AsRef<str>,
{
    let text = text.as_ref().as_bytes();

    if text.is_empty() {
        return Ok(Vec::new());
    }

    let padding = text.iter().filter(|&&c| c == BASE32_PADDING).count();
    match padding {
        0 | 1 | 3 | 4 | 6 => {}
        _ => return Err(TotpError::InvalidPadding),
    }
    if !text[text.len() - padding..]
        .iter()
        .all(|&c| c == BASE32_PADDING)
    {
        return Err(TotpError::InvalidPadding);
    }

    let data = &text[..text.len() - padding];
    let mut values = Vec::with_capacity(data.len());
    for &c in data {
        match BASE32_ALPHABET.iter().position(|&a| a == c) {
            Some(value) => values.push(value as u64),
            None => return Err(TotpError::InvalidCharacter(c as char)),
        }
    }

    let mut out = Vec::with_capacity((values.len() + 7) / 8 * 5);
    for group in values.chunks(8) {
        // A partial trailing group acts as if completed with zero-valued
        // symbols, so every group yields 40 bits.
        let mut acc = 0u64;
        for i in 0..8 {
            acc = (acc << 5) | group.get(i).copied().unwrap_or(0);
        }
        out.extend_from_slice(&acc.to_be_bytes()[3..]);
    }

    Ok(out)
}
