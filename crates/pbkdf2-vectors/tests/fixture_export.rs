#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! JSON export shape of the aggregate fixture.
//!
//! Cross-language harnesses consume the fixture as JSON, so the serialized
//! form must carry WebCrypto names verbatim.

use pbkdf2_vectors::{test_data, HashAlgorithm, Iterations, PasswordId, SaltId};
use serde_json::Value;

fn exported() -> Value {
    serde_json::to_value(test_data()).expect("fixture should serialize")
}

#[test]
fn export_carries_all_four_datasets() {
    let json = exported();
    assert_eq!(json["passwords"].as_array().expect("array").len(), 3);
    assert_eq!(json["salts"].as_array().expect("array").len(), 3);
    assert_eq!(json["derivations"].as_array().expect("array").len(), 108);
    assert_eq!(
        json["derived_key_types"].as_array().expect("array").len(),
        16
    );
}

#[test]
fn derivation_records_use_webcrypto_names() {
    let json = exported();
    let first = &json["derivations"][0];
    assert_eq!(first["password"], "empty");
    assert_eq!(first["salt"], "empty");
    assert_eq!(first["hash"], "SHA-1");
    assert_eq!(first["iterations"], 1);
    assert_eq!(first["derived"].as_array().expect("array").len(), 32);
}

#[test]
fn key_types_use_webcrypto_algorithm_objects() {
    let json = exported();
    let types = json["derived_key_types"].as_array().expect("array");
    let aes_kw = types
        .iter()
        .find(|t| t["algorithm"]["name"] == "AES-KW")
        .expect("AES-KW entry");
    assert_eq!(
        aes_kw["usages"],
        serde_json::json!(["wrapKey", "unwrapKey"])
    );

    let hmac = types
        .iter()
        .find(|t| t["algorithm"]["name"] == "HMAC" && t["algorithm"]["hash"] == "SHA-512")
        .expect("HMAC SHA-512 entry");
    assert_eq!(hmac["usages"], serde_json::json!(["sign", "verify"]));
    assert_eq!(hmac["length_bits"], 256);
}

#[test]
fn named_inputs_export_their_bytes() {
    let json = exported();
    let passwords = json["passwords"].as_array().expect("array");
    let short = passwords
        .iter()
        .find(|entry| entry[0] == "short")
        .expect("short password");
    assert_eq!(short[1], serde_json::json!([80, 64, 115, 115, 119, 48, 114, 100]));

    let salts = json["salts"].as_array().expect("array");
    let short_salt = salts
        .iter()
        .find(|entry| entry[0] == "short")
        .expect("short salt");
    assert_eq!(short_salt[1], serde_json::json!([78, 97, 67, 108]));
}

#[test]
fn typed_keys_roundtrip_through_json() {
    for hash in HashAlgorithm::ALL {
        let json = serde_json::to_string(&hash).expect("serialize");
        let back: HashAlgorithm = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, hash);
    }
    for iterations in Iterations::ALL {
        let json = serde_json::to_string(&iterations).expect("serialize");
        let back: Iterations = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, iterations);
    }
    for password in PasswordId::ALL {
        let json = serde_json::to_string(&password).expect("serialize");
        let back: PasswordId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, password);
    }
    for salt in SaltId::ALL {
        let json = serde_json::to_string(&salt).expect("serialize");
        let back: SaltId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, salt);
    }
}
