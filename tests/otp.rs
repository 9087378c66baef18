use totprs::{timing_safe_eq, HashAlgorithm, Totp, TotpError};

const SECRET: &str = "SECRET";

#[test]
fn default_engine_matches_reference_codes() {
    let totp = Totp::default();

    assert_eq!(totp.code_at(SECRET, 0), "377331");
    assert_eq!(totp.code_at(SECRET, 1_385_909_245), "010454");
    assert_eq!(totp.code_at(SECRET, 1_378_934_578), "299040");
}

#[test]
fn codes_per_algorithm() {
    let sha1 = Totp::new(6, HashAlgorithm::Sha1).unwrap();
    let sha512 = Totp::new(6, HashAlgorithm::Sha512).unwrap();

    assert_eq!(sha1.code_at(SECRET, 0), "200470");
    assert_eq!(sha512.code_at(SECRET, 0), "162109");
}

#[test]
fn codes_are_deterministic() {
    for &algo in &[
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ] {
        let totp = Totp::new(6, algo).unwrap();
        let first = totp.code_at(SECRET, 46_196_974);

        for _ in 0..8 {
            assert_eq!(totp.code_at(SECRET, 46_196_974), first);
        }
    }
}

#[test]
fn eight_digit_codes() {
    let totp = Totp::new(8, HashAlgorithm::Sha256).unwrap();
    let code = totp.code_at(SECRET, 0);

    assert_eq!(code, "85377331");
    // The 6-digit code is the same value reduced further.
    assert!(code.ends_with("377331"));
}

#[test]
fn code_length_below_six_is_rejected() {
    assert_eq!(
        Totp::new(5, HashAlgorithm::Sha256).unwrap_err(),
        TotpError::CodeLengthTooShort(5)
    );
    assert_eq!(
        Totp::new(0, HashAlgorithm::Sha1).unwrap_err(),
        TotpError::CodeLengthTooShort(0)
    );
}

#[test]
fn engine_exposes_configuration() {
    let totp = Totp::new(8, HashAlgorithm::Sha512).unwrap();

    assert_eq!(totp.code_length(), 8);
    assert_eq!(totp.algorithm(), HashAlgorithm::Sha512);
}

#[test]
fn malformed_secret_degrades_to_empty_key() {
    let totp = Totp::default();

    // Historical behavior: a secret that fails to decode is used as an
    // empty key, so computation succeeds and verification merely fails.
    assert_eq!(totp.code_at("", 0), "356306");
    assert_eq!(totp.code_at("NOT!!VALID", 0), totp.code_at("", 0));
    assert_eq!(totp.code_at("INVALID==", 0), totp.code_at("", 0));
}

#[test]
fn verify_accepts_exact_step() {
    let totp = Totp::default();
    let code = totp.code_at(SECRET, 46_196_974);

    assert!(totp.verify_at(SECRET, &code, 0, 46_196_974));
}

#[test]
fn verify_with_current_time() {
    let totp = Totp::default();
    let code = totp.code(SECRET);

    assert!(totp.verify(SECRET, &code, 2));
}

#[test]
fn verify_rejects_leading_zero_variant() {
    let totp = Totp::default();
    let code = totp.code_at(SECRET, 46_196_974);

    assert!(totp.verify_at(SECRET, &code, 1, 46_196_974));
    assert!(!totp.verify_at(SECRET, &format!("0{}", code), 1, 46_196_974));
}

#[test]
fn verify_rejects_wrong_length() {
    let totp = Totp::default();

    assert!(!totp.verify_at(SECRET, "INVALIDCODE", 1, 46_196_974));
    assert!(!totp.verify_at(SECRET, "", 1, 46_196_974));
}

#[test]
fn verify_honors_discrepancy_window() {
    let totp = Totp::default();

    // Codes for the neighboring steps of 46196974.
    let behind = totp.code_at(SECRET, 46_196_973);
    let ahead = totp.code_at(SECRET, 46_196_975);
    assert_eq!(behind, "627966");
    assert_eq!(ahead, "548116");

    assert!(totp.verify_at(SECRET, &behind, 1, 46_196_974));
    assert!(totp.verify_at(SECRET, &ahead, 1, 46_196_974));
    assert!(!totp.verify_at(SECRET, &behind, 0, 46_196_974));
    assert!(!totp.verify_at(SECRET, &ahead, 0, 46_196_974));
}

#[test]
fn verify_rejects_unrelated_code() {
    let totp = Totp::default();

    assert!(!totp.verify_at(SECRET, "000000", 2, 46_196_974));
}

#[test]
fn verify_fails_for_empty_secret() {
    let totp = Totp::default();

    assert!(!totp.verify_at("", "000000", 1, 46_196_974));
}

#[test]
fn timing_safe_eq_on_identical_strings() {
    assert!(timing_safe_eq(b"testString", b"testString"));
    assert!(timing_safe_eq(b"", b""));
    assert!(timing_safe_eq(b"1234567890", b"1234567890"));
}

#[test]
fn timing_safe_eq_on_differing_strings() {
    assert!(!timing_safe_eq(b"testString", b"testStrung"));
    assert!(!timing_safe_eq(b"TestString", b"teststring"));
}

#[test]
fn timing_safe_eq_on_length_mismatch() {
    assert!(!timing_safe_eq(b"testString", b"testStr"));
    assert!(!timing_safe_eq(b"testString", b""));
}

#[test]
fn algorithm_names_round_trip() {
    for &algo in &[
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ] {
        assert_eq!(algo.as_str().parse::<HashAlgorithm>().unwrap(), algo);
    }

    assert_eq!(
        "DOGGO".parse::<HashAlgorithm>().unwrap_err(),
        TotpError::UnsupportedAlgorithm(String::from("DOGGO"))
    );
}
