//! Provisioning URIs
//!
//! # uri
//!
//! Builds `otpauth://totp/...` key URIs for provisioning authenticator apps,
//! wraps them into QR-rendering URLs, and validates/parses URIs in Key Uri
//! Format. See
//! https://github.com/google/google-authenticator/wiki/Key-Uri-Format for
//! more information. Nothing here carries cryptographic content.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{DEFAULT_CODE_LENGTH, DEFAULT_QR_SIZE, PERIOD, QR_ENDPOINT};
use crate::error::{Result, TotpError};
use crate::otp::HashAlgorithm;

const SCHEME: &str = "otpauth://";
const OTP_TYPE: &str = "(?P<type>totp|hotp)/";
const LABEL: &str = "(?P<label>[^?#]*)";
const SECRET: &str = "(?:\\?secret=(?P<secret>[^&]*))";
const ALGORITHM: &str = "(?:&algorithm=(?P<algorithm>[^&#]*))?";
const ISSUER: &str = "(?:&issuer=(?P<issuer>[^&#]*))?";
const DIGITS: &str = "(?:&digits=(?P<digits>[^&#]*))?";
const PERIOD_PARAM: &str = "(?:&period=(?P<period>[^&#]*))?";

static URI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&[SCHEME, OTP_TYPE, LABEL, SECRET, ALGORITHM, ISSUER, DIGITS, PERIOD_PARAM].concat())
        .expect("hardcoded otpauth pattern compiles")
});

/// A provisioning key URI for a TOTP credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUri {
    secret: String,
    label: String,
    issuer: Option<String>,
    algorithm: HashAlgorithm,
}

impl KeyUri {
    pub fn new<S, L>(secret: S, label: L, algorithm: HashAlgorithm) -> KeyUri
    where
        S: Into<String>,
        L: Into<String>,
    {
        KeyUri {
            secret: secret.into(),
            label: label.into(),
            issuer: None,
            algorithm,
        }
    }

    pub fn issuer<I>(mut self, issuer: I) -> KeyUri
    where
        I: Into<String>,
    {
        self.issuer = Some(issuer.into());
        self
    }

    /// Renders the `otpauth://totp/...` URI.
    ///
    /// The algorithm parameter is only emitted for non-SHA1 engines; SHA1 is
    /// the Key Uri Format default and apps treat its absence as such.
    pub fn to_uri(&self) -> String {
        let mut uri = String::from("otpauth://totp/");
        if let Some(issuer) = &self.issuer {
            uri.push_str(issuer);
            uri.push(':');
        }
        uri.push_str(&self.label);
        uri.push_str("?secret=");
        uri.push_str(&self.secret);
        if self.algorithm != HashAlgorithm::Sha1 {
            uri.push_str("&algorithm=");
            uri.push_str(self.algorithm.as_str());
        }
        if let Some(issuer) = &self.issuer {
            uri.push_str("&issuer=");
            uri.push_str(issuer);
        }

        uri
    }

    /// URL of a QR-code image rendering this key URI.
    pub fn qr_code_url(&self, params: &QrCodeParams) -> String {
        format!(
            "{}?data={}&size={}x{}&ecc={}",
            QR_ENDPOINT,
            urlencoding::encode(&self.to_uri()),
            params.width(),
            params.height(),
            params.ecc(),
        )
    }
}

/// Rendering parameters for [`KeyUri::qr_code_url`].
///
/// Out-of-range values fall back to the defaults (200x200 pixels, error
/// correction `M`) instead of failing; provisioning pages prefer a usable
/// image over an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeParams {
    /// Image width in pixels; non-positive values fall back to 200.
    pub width: i32,
    /// Image height in pixels; non-positive values fall back to 200.
    pub height: i32,
    /// Error-correction level, one of `L`, `M`, `Q`, `H`; anything else
    /// falls back to `M`.
    pub ecc: Option<char>,
}

impl QrCodeParams {
    pub fn new(width: i32, height: i32, ecc: char) -> QrCodeParams {
        QrCodeParams {
            width,
            height,
            ecc: Some(ecc),
        }
    }

    fn width(&self) -> u32 {
        if self.width > 0 {
            self.width as u32
        } else {
            DEFAULT_QR_SIZE
        }
    }

    fn height(&self) -> u32 {
        if self.height > 0 {
            self.height as u32
        } else {
            DEFAULT_QR_SIZE
        }
    }

    fn ecc(&self) -> char {
        match self.ecc {
            Some(level) if matches!(level, 'L' | 'M' | 'Q' | 'H') => level,
            _ => 'M',
        }
    }
}

/// Fields recovered from a key URI in Key Uri Format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyUri {
    pub label: String,
    pub secret: String,
    pub issuer: Option<String>,
    pub algorithm: HashAlgorithm,
    pub digits: usize,
    pub period: u64,
}

/// Ensures `uri` is a valid otpauth key URI.
pub fn validate<S>(uri: S) -> Result<()>
where
    S: AsRef<str>,
{
    if URI_PATTERN.is_match(uri.as_ref()) {
        return Ok(());
    }

    Err(TotpError::InvalidKeyUri)
}

/// Extracts the credential fields from an otpauth key URI, filling in the
/// Key Uri Format defaults (SHA1, 6 digits, 30-second period) for absent
/// parameters.
pub fn parse<S>(uri: S) -> Result<ParsedKeyUri>
where
    S: AsRef<str>,
{
    let captures = URI_PATTERN
        .captures(uri.as_ref())
        .ok_or(TotpError::InvalidKeyUri)?;

    let label = captures
        .name("label")
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default();
    let secret = captures
        .name("secret")
        .ok_or(TotpError::InvalidKeyUri)?
        .as_str()
        .to_owned();
    let issuer = captures.name("issuer").map(|m| m.as_str().to_owned());
    let algorithm = match captures.name("algorithm") {
        Some(algo) => HashAlgorithm::from_str(algo.as_str())?,
        None => HashAlgorithm::Sha1,
    };
    let digits = match captures.name("digits") {
        Some(num) => num
            .as_str()
            .parse()
            .map_err(|_| TotpError::InvalidKeyUri)?,
        None => DEFAULT_CODE_LENGTH,
    };
    let period = match captures.name("period") {
        Some(num) => num
            .as_str()
            .parse()
            .map_err(|_| TotpError::InvalidKeyUri)?,
        None => PERIOD,
    };

    Ok(ParsedKeyUri {
        label,
        secret,
        issuer,
        algorithm,
        digits,
        period,
    })
}
