//! Target key types for derive-then-import coverage.
//!
//! Beyond raw bit derivation, a conformance harness checks that derived
//! output can be imported as a usable key of each common algorithm type.
//! [`DERIVED_KEY_TYPES`] enumerates those targets; it carries no
//! derivation-correctness content of its own.

use serde::{Deserialize, Serialize};

use crate::params::HashAlgorithm;

/// A permitted key usage, named as WebCrypto names it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyUsage {
    /// `encrypt`.
    Encrypt,
    /// `decrypt`.
    Decrypt,
    /// `sign`.
    Sign,
    /// `verify`.
    Verify,
    /// `wrapKey`.
    WrapKey,
    /// `unwrapKey`.
    UnwrapKey,
}

/// Algorithm a derived key is imported as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum DerivedKeyAlgorithm {
    /// `AES-CBC`.
    #[serde(rename = "AES-CBC")]
    AesCbc,
    /// `AES-CTR`.
    #[serde(rename = "AES-CTR")]
    AesCtr,
    /// `AES-GCM`.
    #[serde(rename = "AES-GCM")]
    AesGcm,
    /// `AES-KW`.
    #[serde(rename = "AES-KW")]
    AesKw,
    /// `HMAC` over the given digest.
    #[serde(rename = "HMAC")]
    Hmac {
        /// Digest the HMAC key is bound to.
        hash: HashAlgorithm,
    },
}

impl DerivedKeyAlgorithm {
    /// WebCrypto algorithm name (the HMAC digest is a parameter, not part
    /// of the name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AesCbc => "AES-CBC",
            Self::AesCtr => "AES-CTR",
            Self::AesGcm => "AES-GCM",
            Self::AesKw => "AES-KW",
            Self::Hmac { .. } => "HMAC",
        }
    }

    /// The usage set every key of this algorithm family must carry.
    #[must_use]
    pub const fn family_usages(self) -> &'static [KeyUsage] {
        match self {
            Self::AesCbc | Self::AesCtr | Self::AesGcm => ENCRYPT_DECRYPT,
            Self::AesKw => WRAP_UNWRAP,
            Self::Hmac { .. } => SIGN_VERIFY,
        }
    }
}

/// A target key specification: derive exactly `length_bits` bits, import
/// them as `algorithm` with `usages`, and expect success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DerivedKeyType {
    /// Import algorithm.
    pub algorithm: DerivedKeyAlgorithm,
    /// Key length in bits.
    pub length_bits: u16,
    /// Permitted usages for the imported key.
    pub usages: &'static [KeyUsage],
}

const ENCRYPT_DECRYPT: &[KeyUsage] = &[KeyUsage::Encrypt, KeyUsage::Decrypt];
const WRAP_UNWRAP: &[KeyUsage] = &[KeyUsage::WrapKey, KeyUsage::UnwrapKey];
const SIGN_VERIFY: &[KeyUsage] = &[KeyUsage::Sign, KeyUsage::Verify];

/// Every target key type the harness imports derived bits as.
///
/// AES family at each AES key size; HMAC at 256 bits over each digest the
/// derivation vectors cover.
pub const DERIVED_KEY_TYPES: [DerivedKeyType; 16] = [
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesCbc,
        length_bits: 128,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesCbc,
        length_bits: 192,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesCbc,
        length_bits: 256,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesCtr,
        length_bits: 128,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesCtr,
        length_bits: 192,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesCtr,
        length_bits: 256,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesGcm,
        length_bits: 128,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesGcm,
        length_bits: 192,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesGcm,
        length_bits: 256,
        usages: ENCRYPT_DECRYPT,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesKw,
        length_bits: 128,
        usages: WRAP_UNWRAP,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesKw,
        length_bits: 192,
        usages: WRAP_UNWRAP,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::AesKw,
        length_bits: 256,
        usages: WRAP_UNWRAP,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::Hmac {
            hash: HashAlgorithm::Sha1,
        },
        length_bits: 256,
        usages: SIGN_VERIFY,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::Hmac {
            hash: HashAlgorithm::Sha256,
        },
        length_bits: 256,
        usages: SIGN_VERIFY,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::Hmac {
            hash: HashAlgorithm::Sha384,
        },
        length_bits: 256,
        usages: SIGN_VERIFY,
    },
    DerivedKeyType {
        algorithm: DerivedKeyAlgorithm::Hmac {
            hash: HashAlgorithm::Sha512,
        },
        length_bits: 256,
        usages: SIGN_VERIFY,
    },
];

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_target_key_types() {
        assert_eq!(DERIVED_KEY_TYPES.len(), 16);
    }

    #[test]
    fn every_usage_set_is_nonempty_and_family_consistent() {
        for key_type in &DERIVED_KEY_TYPES {
            assert!(
                !key_type.usages.is_empty(),
                "{} has empty usages",
                key_type.algorithm.name()
            );
            assert_eq!(
                key_type.usages,
                key_type.algorithm.family_usages(),
                "{} usages inconsistent with its family",
                key_type.algorithm.name()
            );
        }
    }

    #[test]
    fn aes_lengths_cover_each_key_size() {
        for family in [
            DerivedKeyAlgorithm::AesCbc,
            DerivedKeyAlgorithm::AesCtr,
            DerivedKeyAlgorithm::AesGcm,
            DerivedKeyAlgorithm::AesKw,
        ] {
            let lengths: Vec<u16> = DERIVED_KEY_TYPES
                .iter()
                .filter(|t| t.algorithm == family)
                .map(|t| t.length_bits)
                .collect();
            assert_eq!(lengths, [128, 192, 256], "{}", family.name());
        }
    }

    #[test]
    fn hmac_entries_cover_each_digest() {
        let hashes: Vec<HashAlgorithm> = DERIVED_KEY_TYPES
            .iter()
            .filter_map(|t| match t.algorithm {
                DerivedKeyAlgorithm::Hmac { hash } => Some(hash),
                _ => None,
            })
            .collect();
        assert_eq!(hashes, HashAlgorithm::ALL);
    }

    #[test]
    fn hmac_entries_are_256_bits() {
        for key_type in &DERIVED_KEY_TYPES {
            if matches!(key_type.algorithm, DerivedKeyAlgorithm::Hmac { .. }) {
                assert_eq!(key_type.length_bits, 256);
            }
        }
    }

    #[test]
    fn algorithm_serializes_with_webcrypto_name_tag() {
        let json = serde_json::to_string(&DerivedKeyAlgorithm::AesKw).expect("serialize");
        assert_eq!(json, r#"{"name":"AES-KW"}"#);

        let json = serde_json::to_string(&DerivedKeyAlgorithm::Hmac {
            hash: HashAlgorithm::Sha384,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"name":"HMAC","hash":"SHA-384"}"#);
    }

    #[test]
    fn key_usage_serializes_camel_case() {
        let json = serde_json::to_string(&KeyUsage::WrapKey).expect("serialize");
        assert_eq!(json, "\"wrapKey\"");
    }
}
