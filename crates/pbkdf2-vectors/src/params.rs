//! Typed derivation parameters.
//!
//! Every PBKDF2 vector in this crate is keyed by the 4-tuple
//! ([`PasswordId`], [`SaltId`], [`HashAlgorithm`], [`Iterations`]). Each key
//! type is a closed enum, so the cross product of all four is finite and the
//! vector table can cover it exactly.
//!
//! `Display`/`FromStr` use the names a harness manifest would carry: the
//! symbolic password/salt names (`"empty"`, `"short"`, `"long"`) and the
//! WebCrypto digest names (`"SHA-256"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VectorError;

// ---------------------------------------------------------------------------
// Input secrets
// ---------------------------------------------------------------------------

/// Symbolic name of a fixed input secret (the PBKDF2 password).
///
/// Declaration order is the canonical table order — do not reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordId {
    /// Zero-length secret.
    Empty,
    /// `P@ssw0rd` (8 bytes).
    Short,
    /// A 61-byte passphrase.
    Long,
}

impl PasswordId {
    /// All password ids, in canonical table order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Short, Self::Long];

    /// Symbolic name used by harness manifests.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// The fixed secret bytes this id stands for.
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::Empty => b"",
            Self::Short => b"P@ssw0rd",
            Self::Long => b"Users should pick long passphrases (not use short passwords)!",
        }
    }
}

impl fmt::Display for PasswordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PasswordId {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(VectorError::UnknownPassword(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Salts
// ---------------------------------------------------------------------------

/// Symbolic name of a fixed salt input.
///
/// Declaration order is the canonical table order — do not reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaltId {
    /// Zero-length salt.
    Empty,
    /// `NaCl` (4 bytes).
    Short,
    /// `Sodium Chloride compound` (24 bytes).
    Long,
}

impl SaltId {
    /// All salt ids, in canonical table order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Short, Self::Long];

    /// Symbolic name used by harness manifests.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// The fixed salt bytes this id stands for.
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::Empty => b"",
            Self::Short => b"NaCl",
            Self::Long => b"Sodium Chloride compound",
        }
    }
}

impl fmt::Display for SaltId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SaltId {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(VectorError::UnknownSalt(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Digests
// ---------------------------------------------------------------------------

/// Underlying HMAC digest, named as WebCrypto names it.
///
/// Declaration order is the canonical table order — do not reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// `SHA-1` — present for conformance coverage, not a recommendation.
    #[serde(rename = "SHA-1")]
    Sha1,
    /// `SHA-256`.
    #[serde(rename = "SHA-256")]
    Sha256,
    /// `SHA-384`.
    #[serde(rename = "SHA-384")]
    Sha384,
    /// `SHA-512`.
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// All digests, in canonical table order.
    pub const ALL: [Self; 4] = [Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512];

    /// WebCrypto algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA-1" => Ok(Self::Sha1),
            "SHA-256" => Ok(Self::Sha256),
            "SHA-384" => Ok(Self::Sha384),
            "SHA-512" => Ok(Self::Sha512),
            other => Err(VectorError::UnsupportedHash(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Iteration counts
// ---------------------------------------------------------------------------

/// Iteration count covered by the vector set.
///
/// A closed enum rather than a bare `u32`: vectors exist only for these
/// three counts, and keeping the key typed makes table lookups total.
/// Declaration order is the canonical table order — do not reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Iterations {
    /// 1 iteration — degenerate minimum, exercises the single-block path.
    One,
    /// 1000 iterations.
    OneThousand,
    /// 100000 iterations.
    OneHundredThousand,
}

impl Iterations {
    /// All iteration counts, in canonical table order.
    pub const ALL: [Self; 3] = [Self::One, Self::OneThousand, Self::OneHundredThousand];

    /// The numeric count handed to the derivation primitive under test.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::One => 1,
            Self::OneThousand => 1000,
            Self::OneHundredThousand => 100_000,
        }
    }

    /// Resolve a numeric count back to its typed key.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UnsupportedIterations`] for any count outside
    /// {1, 1000, 100000}.
    pub const fn from_count(count: u32) -> Result<Self, VectorError> {
        match count {
            1 => Ok(Self::One),
            1000 => Ok(Self::OneThousand),
            100_000 => Ok(Self::OneHundredThousand),
            other => Err(VectorError::UnsupportedIterations(other)),
        }
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl From<Iterations> for u32 {
    fn from(iterations: Iterations) -> Self {
        iterations.count()
    }
}

impl TryFrom<u32> for Iterations {
    type Error = VectorError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::from_count(count)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_bytes_have_expected_lengths() {
        assert_eq!(PasswordId::Empty.bytes().len(), 0);
        assert_eq!(PasswordId::Short.bytes().len(), 8);
        assert_eq!(PasswordId::Long.bytes().len(), 61);
    }

    #[test]
    fn salt_bytes_have_expected_lengths() {
        assert_eq!(SaltId::Empty.bytes().len(), 0);
        assert_eq!(SaltId::Short.bytes().len(), 4);
        assert_eq!(SaltId::Long.bytes().len(), 24);
    }

    #[test]
    fn password_id_name_roundtrip() {
        for id in PasswordId::ALL {
            let parsed: PasswordId = id.name().parse().expect("name should parse");
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn salt_id_name_roundtrip() {
        for id in SaltId::ALL {
            let parsed: SaltId = id.name().parse().expect("name should parse");
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn hash_name_roundtrip() {
        for hash in HashAlgorithm::ALL {
            let parsed: HashAlgorithm = hash.name().parse().expect("name should parse");
            assert_eq!(parsed, hash);
        }
    }

    #[test]
    fn hash_rejects_non_digest_algorithm() {
        let err = "AES-CBC"
            .parse::<HashAlgorithm>()
            .expect_err("AES-CBC is not a digest");
        assert!(matches!(err, VectorError::UnsupportedHash(name) if name == "AES-CBC"));
    }

    #[test]
    fn iterations_count_roundtrip() {
        for iterations in Iterations::ALL {
            let resolved =
                Iterations::from_count(iterations.count()).expect("count should resolve");
            assert_eq!(resolved, iterations);
        }
    }

    #[test]
    fn iterations_rejects_zero() {
        let err = Iterations::from_count(0).expect_err("0 iterations has no vectors");
        assert!(matches!(err, VectorError::UnsupportedIterations(0)));
    }

    #[test]
    fn hash_serializes_as_webcrypto_name() {
        let json = serde_json::to_string(&HashAlgorithm::Sha256).expect("serialize");
        assert_eq!(json, "\"SHA-256\"");
    }

    #[test]
    fn iterations_serde_roundtrip_as_number() {
        let json = serde_json::to_string(&Iterations::OneHundredThousand).expect("serialize");
        assert_eq!(json, "100000");
        let back: Iterations = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Iterations::OneHundredThousand);
    }

    #[test]
    fn iterations_deserialize_rejects_unknown_count() {
        let err = serde_json::from_str::<Iterations>("42").expect_err("42 has no vectors");
        assert!(err.to_string().contains("unsupported iteration count"));
    }
}
