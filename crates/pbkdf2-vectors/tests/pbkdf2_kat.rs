#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Known-answer cross-check of the frozen vector table against
//! `ring::pbkdf2`.
//!
//! The table is checked in as static data and never regenerated at runtime;
//! these tests exist so a corrupted or mistranscribed record fails CI
//! rather than silently weakening the conformance suite consuming it.

use core::num::NonZeroU32;

use pbkdf2_vectors::{DerivationVector, HashAlgorithm, Iterations, DERIVATIONS, DERIVED_LEN};
use ring::pbkdf2;

fn ring_algorithm(hash: HashAlgorithm) -> pbkdf2::Algorithm {
    match hash {
        HashAlgorithm::Sha1 => pbkdf2::PBKDF2_HMAC_SHA1,
        HashAlgorithm::Sha256 => pbkdf2::PBKDF2_HMAC_SHA256,
        HashAlgorithm::Sha384 => pbkdf2::PBKDF2_HMAC_SHA384,
        HashAlgorithm::Sha512 => pbkdf2::PBKDF2_HMAC_SHA512,
    }
}

fn derive(record: &DerivationVector, out: &mut [u8]) {
    let iterations = NonZeroU32::new(record.iterations.count()).expect("counts are nonzero");
    pbkdf2::derive(
        ring_algorithm(record.hash),
        iterations,
        record.salt.bytes(),
        record.password.bytes(),
        out,
    );
}

#[test]
fn every_record_matches_ring() {
    for record in &DERIVATIONS {
        let mut out = [0u8; DERIVED_LEN];
        derive(record, &mut out);
        assert_eq!(
            out, record.derived,
            "mismatch for ({}, {}, {}, {})",
            record.password, record.salt, record.hash, record.iterations
        );
    }
}

/// PBKDF2 output is a prefix-stable stream: deriving 384 bits must
/// reproduce the stored 256-bit value as its leading bytes.
#[test]
fn longer_derivations_keep_the_stored_prefix() {
    for record in DERIVATIONS
        .iter()
        .filter(|r| r.iterations != Iterations::OneHundredThousand)
    {
        let mut out = [0u8; 48];
        derive(record, &mut out);
        assert_eq!(
            out[..DERIVED_LEN],
            record.derived,
            "prefix mismatch for ({}, {}, {}, {})",
            record.password, record.salt, record.hash, record.iterations
        );
    }
}

#[test]
fn derivation_is_deterministic() {
    let record = &DERIVATIONS[0];
    let mut first = [0u8; DERIVED_LEN];
    let mut second = [0u8; DERIVED_LEN];
    derive(record, &mut first);
    derive(record, &mut second);
    assert_eq!(first, second);
}
