use fragmark_dom::hash::{
    canonicalize_fragment, fragment_hash, hash_hex, HashAlgorithm, DEFAULT_HASH_LEN,
};

#[test]
fn sha256_known_vector() {
    // FIPS 180-2 test vector for "abc".
    assert_eq!(
        hash_hex(HashAlgorithm::Sha256, "abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn xxh64_is_16_char_lowercase_hex() {
    let digest = hash_hex(HashAlgorithm::Xxh64, "Example Page Title");
    assert_eq!(digest.len(), 16);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn fragment_hash_is_deterministic_and_truncated() {
    let a = fragment_hash(HashAlgorithm::Xxh64, "Test", DEFAULT_HASH_LEN);
    let b = fragment_hash(HashAlgorithm::Xxh64, "Test", DEFAULT_HASH_LEN);
    assert_eq!(a, b);
    assert_eq!(a.len(), DEFAULT_HASH_LEN);

    let full = hash_hex(HashAlgorithm::Xxh64, &canonicalize_fragment("Test"));
    assert!(full.starts_with(&a));
}

#[test]
fn fragment_hash_len_is_clamped_to_digest_length() {
    let digest = fragment_hash(HashAlgorithm::Xxh64, "Test", 999);
    assert_eq!(digest.len(), 16);
}

#[test]
fn distinct_texts_yield_distinct_truncated_hashes() {
    let a = fragment_hash(HashAlgorithm::Xxh64, "Item", DEFAULT_HASH_LEN);
    let b = fragment_hash(HashAlgorithm::Xxh64, "Item 2", DEFAULT_HASH_LEN);
    assert_ne!(a, b);
}

#[test]
fn canonicalization_unifies_line_endings_and_nfc() {
    assert_eq!(canonicalize_fragment("a\r\nb\rc"), "a\nb\nc");

    // "é" precomposed vs combining sequence hash identically.
    let precomposed = "caf\u{e9}";
    let combining = "cafe\u{301}";
    assert_eq!(
        fragment_hash(HashAlgorithm::Xxh64, precomposed, DEFAULT_HASH_LEN),
        fragment_hash(HashAlgorithm::Xxh64, combining, DEFAULT_HASH_LEN)
    );
}

#[test]
fn whitespace_is_significant_to_the_hash() {
    // Only line endings are normalized; interior/surrounding spaces count.
    assert_ne!(
        fragment_hash(HashAlgorithm::Xxh64, "Test", DEFAULT_HASH_LEN),
        fragment_hash(HashAlgorithm::Xxh64, " Test ", DEFAULT_HASH_LEN)
    );
}

#[test]
fn algorithm_serde_and_fromstr_round_trip() {
    let algo: HashAlgorithm = serde_json::from_str("\"sha256\"").unwrap();
    assert_eq!(algo, HashAlgorithm::Sha256);
    assert_eq!(serde_json::to_string(&algo).unwrap(), "\"sha256\"");

    assert_eq!("XXH64".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Xxh64);
    assert!("md5".parse::<HashAlgorithm>().is_err());

    assert_eq!(HashAlgorithm::default(), HashAlgorithm::Xxh64);
    assert_eq!(HashAlgorithm::Xxh64.to_string(), "xxh64");
}
