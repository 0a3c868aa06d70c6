//! The PBKDF2 known-answer table.
//!
//! One flat record per (password, salt, hash, iterations) tuple, covering
//! the full cross product of the typed keys in [`crate::params`]: 3
//! passwords x 3 salts x 4 digests x 3 iteration counts = 108 vectors.
//! Each record stores the first 256 bits of PBKDF2 output for its tuple.
//!
//! PBKDF2 output is prefix-stable: deriving more than 256 bits with the
//! same parameters must reproduce these bytes as the leading prefix, so a
//! harness may request any length >= 256 (a multiple of 8) and compare the
//! first 32 octets against [`expected`].
//!
//! The table is ordered password-major, then salt, digest, iteration count,
//! each in the declaration order of its enum. [`expected`] relies on that
//! ordering for index arithmetic; `table_order_matches_index_arithmetic`
//! in the unit tests pins it.

use serde::Serialize;

use crate::error::VectorError;
use crate::params::{HashAlgorithm, Iterations, PasswordId, SaltId};

/// Length of every stored derivation result in bytes (256 bits).
pub const DERIVED_LEN: usize = 32;

/// A single PBKDF2 known-answer record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DerivationVector {
    /// Input secret.
    pub password: PasswordId,
    /// Salt input.
    pub salt: SaltId,
    /// HMAC digest.
    pub hash: HashAlgorithm,
    /// Iteration count.
    pub iterations: Iterations,
    /// First 256 bits of the PBKDF2 output for this tuple.
    pub derived: [u8; DERIVED_LEN],
}

/// The known-answer record for a parameter tuple.
///
/// Total over the typed cross product: every combination of the four enums
/// has exactly one record, so this cannot fail.
#[must_use]
pub fn vector(
    password: PasswordId,
    salt: SaltId,
    hash: HashAlgorithm,
    iterations: Iterations,
) -> &'static DerivationVector {
    // Canonical-order index; bounded by 3*3*4*3 = 108 by enum cardinality,
    // so neither the arithmetic nor the indexing can go out of range.
    #[allow(clippy::arithmetic_side_effects)]
    let index =
        ((password as usize * 3 + salt as usize) * 4 + hash as usize) * 3 + iterations as usize;
    let record = &DERIVATIONS[index];
    debug_assert!(
        record.password == password
            && record.salt == salt
            && record.hash == hash
            && record.iterations == iterations
    );
    record
}

/// The expected leading 256 bits of PBKDF2 output for a parameter tuple.
#[must_use]
pub fn expected(
    password: PasswordId,
    salt: SaltId,
    hash: HashAlgorithm,
    iterations: Iterations,
) -> &'static [u8; DERIVED_LEN] {
    &vector(password, salt, hash, iterations).derived
}

/// String-keyed lookup for harnesses driven by textual manifests.
///
/// # Errors
///
/// Returns a [`VectorError`] naming the offending key when any of the four
/// parameters does not resolve to a vector.
pub fn expected_for_names(
    password: &str,
    salt: &str,
    hash: &str,
    iterations: u32,
) -> Result<&'static [u8; DERIVED_LEN], VectorError> {
    Ok(expected(
        password.parse()?,
        salt.parse()?,
        hash.parse()?,
        Iterations::from_count(iterations)?,
    ))
}

/// Every known-answer record, in canonical order.
pub static DERIVATIONS: [DerivationVector; 108] = [
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0x1e, 0x43, 0x7a, 0x1c, 0x79, 0xd7, 0x5b, 0xe6,
            0x1e, 0x91, 0x14, 0x1d, 0xae, 0x20, 0xaf, 0xfc,
            0x48, 0x92, 0xcc, 0x99, 0xab, 0xcc, 0x3f, 0xe7,
            0x53, 0x88, 0x7b, 0xcc, 0xc8, 0x92, 0x01, 0x76,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x6e, 0x40, 0x91, 0x0a, 0xc0, 0x2e, 0xc8, 0x9c,
            0xeb, 0xb9, 0xd8, 0x98, 0xb1, 0x3a, 0x09, 0xd1,
            0xcd, 0x7a, 0xdf, 0x6f, 0x8c, 0xc0, 0x8c, 0xc4,
            0x73, 0x30, 0x2c, 0x89, 0x73, 0xaa, 0x2e, 0x19,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xa9, 0xe1, 0xbe, 0xbb, 0x36, 0xbc, 0x26, 0xd7,
            0xc9, 0x97, 0xd5, 0x48, 0x3c, 0xbc, 0x8d, 0xe4,
            0xa4, 0x19, 0xd1, 0xe7, 0x06, 0x57, 0x13, 0x42,
            0x63, 0x25, 0x86, 0xec, 0x33, 0x0a, 0x72, 0x90,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0xf7, 0xce, 0x0b, 0x65, 0x3d, 0x2d, 0x72, 0xa4,
            0x10, 0x8c, 0xf5, 0xab, 0xe9, 0x12, 0xff, 0xdd,
            0x77, 0x76, 0x16, 0xdb, 0xbb, 0x27, 0xa7, 0x0e,
            0x82, 0x04, 0xf3, 0xae, 0x2d, 0x0f, 0x6f, 0xad,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0x4f, 0xc5, 0x8a, 0x21, 0xc1, 0x00, 0xce, 0x18,
            0x35, 0xb8, 0xf9, 0x99, 0x1d, 0x73, 0x8b, 0x56,
            0x96, 0x5d, 0x14, 0xb2, 0x4e, 0x17, 0x61, 0xfb,
            0xdf, 0xfc, 0x69, 0xac, 0x5e, 0x0b, 0x66, 0x7a,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x64, 0xa8, 0x68, 0xd4, 0xb2, 0x3a, 0xf6, 0x96,
            0xd3, 0x73, 0x4d, 0x0b, 0x81, 0x4d, 0x04, 0xcd,
            0xd1, 0xac, 0x28, 0x01, 0x28, 0xe9, 0x76, 0x53,
            0xa0, 0x5f, 0x32, 0xb4, 0x9c, 0x13, 0xa2, 0x9a,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x4b, 0xb0, 0x42, 0xa5, 0xc2, 0x8c, 0xee, 0x6f,
            0x66, 0xf9, 0x91, 0xc7, 0x17, 0xfd, 0x77, 0x02,
            0x67, 0x78, 0x7e, 0x2b, 0xb3, 0x03, 0x1e, 0xae,
            0x27, 0x0d, 0x87, 0xd6, 0x3a, 0xd9, 0x95, 0x34,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0x9c, 0xbf, 0xe7, 0x2d, 0x19, 0x4d, 0xa3, 0x4e,
            0x17, 0xc8, 0x21, 0xdd, 0x15, 0x69, 0xef, 0x50,
            0xa8, 0x6e, 0xb4, 0xd8, 0x93, 0x59, 0x17, 0x76,
            0xad, 0xc6, 0xa5, 0xc2, 0x1e, 0x00, 0x31, 0xcf,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xed, 0x6b, 0xd7, 0x28, 0x25, 0x67, 0xab, 0xe4,
            0x8d, 0x54, 0x2d, 0x06, 0x7d, 0x09, 0xf4, 0x04,
            0xbd, 0x04, 0x4a, 0xe2, 0xce, 0xfe, 0x11, 0xda,
            0xcc, 0x53, 0x1c, 0x47, 0x64, 0xcd, 0x35, 0xcd,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0x6d, 0x2e, 0xcb, 0xbb, 0xfb, 0x2e, 0x6d, 0xcd,
            0x70, 0x56, 0xfa, 0xf9, 0xaf, 0x6a, 0xa0, 0x6e,
            0xae, 0x59, 0x43, 0x91, 0xdb, 0x98, 0x32, 0x79,
            0xa6, 0xbf, 0x27, 0xe0, 0xeb, 0x22, 0x86, 0x14,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0xcb, 0x93, 0x09, 0x6c, 0x3a, 0x02, 0xbe, 0xeb,
            0x1c, 0x5f, 0xac, 0x36, 0x76, 0x5c, 0x90, 0x11,
            0xfe, 0x99, 0xf8, 0xd8, 0xea, 0x62, 0x36, 0x60,
            0x48, 0xfc, 0x98, 0xcb, 0x98, 0xdf, 0xea, 0x8f,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x89, 0xe1, 0x62, 0x54, 0xeb, 0xad, 0x5c, 0xba,
            0x72, 0xe0, 0xae, 0xbe, 0x16, 0x14, 0xc7, 0xf9,
            0xb7, 0x95, 0xa7, 0x50, 0x5f, 0x26, 0x37, 0x20,
            0x6c, 0xe1, 0x0a, 0x34, 0x49, 0xa2, 0xb8, 0xbb,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0xa6, 0x67, 0xda, 0x47, 0xb8, 0xf8, 0x57, 0xb7,
            0xc6, 0x5f, 0x70, 0xa6, 0xc8, 0xe7, 0xa0, 0x6c,
            0xe0, 0xd2, 0x52, 0x11, 0xa2, 0xb6, 0xeb, 0xaf,
            0x58, 0xdc, 0xaa, 0xf2, 0x68, 0xb4, 0x6b, 0x1d,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x72, 0xc9, 0x2b, 0xbd, 0x3d, 0xda, 0xb4, 0x78,
            0x9e, 0x88, 0xe4, 0x2a, 0xd1, 0xcd, 0xa8, 0x3c,
            0xc0, 0x72, 0x9e, 0x6c, 0xb5, 0x10, 0x6a, 0x57,
            0x7e, 0x50, 0xd5, 0xcf, 0x61, 0x78, 0x24, 0x81,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x06, 0xe1, 0x9e, 0x1b, 0x83, 0xe6, 0x48, 0x0b,
            0x15, 0x54, 0xdf, 0x2b, 0x31, 0xa2, 0xc9, 0x2d,
            0x1b, 0xfc, 0xf9, 0xbc, 0x1b, 0xdb, 0xc8, 0x75,
            0x1f, 0xf8, 0x68, 0x5b, 0xde, 0xef, 0x7d, 0xc9,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0x2d, 0xdb, 0x49, 0x24, 0x3e, 0xb3, 0xb5, 0x91,
            0x2c, 0xb2, 0x60, 0xcd, 0xd8, 0x7f, 0xb0, 0x4e,
            0xf0, 0xd1, 0x11, 0xbf, 0xa4, 0x4d, 0x40, 0xa4,
            0x5e, 0x02, 0xa8, 0xa5, 0xc3, 0xc1, 0x51, 0x8d,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0x28, 0x35, 0xf3, 0xed, 0x53, 0x56, 0x54, 0x20,
            0xc9, 0x09, 0x51, 0x50, 0x9b, 0x0c, 0x11, 0x73,
            0xb6, 0x45, 0x17, 0x4f, 0x15, 0x46, 0xab, 0x3a,
            0xc3, 0xe6, 0xc8, 0x5c, 0xb4, 0x71, 0xb5, 0x3b,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x80, 0xae, 0xd9, 0x05, 0xca, 0x32, 0xae, 0x0b,
            0xb2, 0xa9, 0xd8, 0xf5, 0x32, 0xf0, 0x48, 0xa0,
            0xe6, 0x72, 0x46, 0x3e, 0xef, 0x9f, 0x83, 0xdf,
            0xa7, 0xd8, 0x8b, 0xca, 0x72, 0x65, 0x53, 0xea,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0xe9, 0xf0, 0xda, 0x1e, 0x97, 0xdf, 0xa4, 0x55,
            0xf8, 0x58, 0xce, 0x6b, 0x9a, 0xf1, 0xec, 0xc0,
            0x29, 0x9f, 0x12, 0x5f, 0xf1, 0xa8, 0x47, 0xeb,
            0x5d, 0x49, 0x55, 0x86, 0x6f, 0x43, 0xe6, 0x04,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0x7f, 0xf7, 0x95, 0x4a, 0xed, 0xdf, 0x41, 0x79,
            0x5f, 0xc8, 0x30, 0x06, 0x66, 0x78, 0x6d, 0x49,
            0x74, 0x26, 0x9a, 0xa9, 0x1c, 0xc7, 0xe9, 0x38,
            0x11, 0xc9, 0x53, 0x33, 0x1d, 0x56, 0xd6, 0x09,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x1c, 0x73, 0x13, 0x2b, 0x6a, 0x55, 0xe9, 0xd9,
            0xde, 0x2c, 0xdb, 0xfe, 0x1f, 0x55, 0xbf, 0x0a,
            0xb5, 0x9f, 0xd9, 0x1f, 0x78, 0xf1, 0x09, 0xc5,
            0x00, 0x96, 0x03, 0x8b, 0x85, 0x57, 0xb1, 0x47,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0xe7, 0xe2, 0xb4, 0x1f, 0x48, 0x87, 0x42, 0x1b,
            0xcb, 0x76, 0x4e, 0xb4, 0xa5, 0x6f, 0x63, 0xd2,
            0x50, 0x2e, 0x33, 0xc7, 0x64, 0xfb, 0xdf, 0x60,
            0x62, 0x6a, 0xd4, 0x2e, 0xd9, 0x67, 0x23, 0x42,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0xd5, 0x61, 0xc4, 0xc8, 0x4e, 0x9c, 0x60, 0xba,
            0x47, 0x52, 0xa2, 0xd3, 0x83, 0xbf, 0x55, 0xef,
            0xf6, 0x43, 0xfc, 0x9e, 0x45, 0x22, 0x52, 0xd6,
            0x82, 0x1e, 0x39, 0x44, 0x93, 0x50, 0xcf, 0x72,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xef, 0xd0, 0x07, 0x52, 0xbc, 0x9f, 0xfa, 0xfb,
            0x5a, 0x39, 0x9d, 0xd1, 0xd5, 0x83, 0x4e, 0x8d,
            0x2c, 0x2b, 0x67, 0x6e, 0xcd, 0x4b, 0x20, 0x63,
            0xfb, 0x1f, 0xe5, 0x81, 0xd0, 0xf1, 0x38, 0x0b,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0x1f, 0x46, 0xb4, 0x0c, 0xf2, 0xfb, 0x3d, 0xc4,
            0x1a, 0x3d, 0x9c, 0xed, 0x88, 0x97, 0xb8, 0x61,
            0x05, 0x03, 0x68, 0x10, 0xe2, 0xbf, 0xac, 0x70,
            0x40, 0x81, 0x4b, 0xd6, 0x5d, 0x42, 0x8d, 0x67,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0xcc, 0x57, 0x48, 0xec, 0xc4, 0x12, 0x88, 0xa0,
            0xe1, 0x33, 0x68, 0x54, 0x3a, 0xaa, 0x2e, 0xf6,
            0x2c, 0x97, 0xba, 0x75, 0x18, 0xfa, 0x88, 0xf6,
            0xe1, 0x1c, 0x35, 0x76, 0x3f, 0xc9, 0x30, 0xb4,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x33, 0xe2, 0x99, 0x3b, 0xf4, 0x72, 0x9d, 0xc9,
            0x93, 0xff, 0xf6, 0x6e, 0x69, 0xcc, 0x55, 0x77,
            0x71, 0x35, 0xeb, 0xfa, 0xbc, 0xe5, 0x33, 0x57,
            0x5b, 0xce, 0x4a, 0x96, 0x64, 0x5a, 0x74, 0x2c,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0x61, 0xc9, 0x35, 0xc4, 0x62, 0xc3, 0x32, 0x1c,
            0x89, 0x66, 0x35, 0x45, 0xd1, 0x3a, 0x4f, 0x6b,
            0x52, 0xb5, 0x19, 0x1c, 0xfb, 0x74, 0x79, 0xe5,
            0x8d, 0xcf, 0xe6, 0x44, 0x4d, 0x43, 0x10, 0x6c,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0x13, 0x53, 0xf7, 0x45, 0x82, 0x37, 0xab, 0x33,
            0x2e, 0xe0, 0x52, 0xe2, 0x9f, 0x82, 0x9a, 0x2a,
            0xb9, 0x0e, 0x72, 0x63, 0x0e, 0xa1, 0x04, 0x93,
            0xb4, 0xee, 0xcf, 0xfb, 0x9f, 0xf8, 0x9e, 0x1d,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x79, 0xba, 0xf8, 0x0e, 0xc5, 0x82, 0x92, 0x05,
            0x38, 0x80, 0x1e, 0x9d, 0x92, 0x9c, 0xe0, 0x70,
            0x84, 0x27, 0x79, 0x87, 0x48, 0x8d, 0x73, 0x3a,
            0x02, 0x68, 0x52, 0xc4, 0x52, 0xf0, 0x6f, 0xb4,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x7b, 0x0b, 0xcc, 0xa8, 0x1d, 0xd6, 0x37, 0xa3,
            0xb3, 0x39, 0x86, 0x66, 0x61, 0x97, 0x16, 0xc5,
            0xf2, 0xb1, 0xf4, 0xa5, 0xc2, 0x4e, 0x85, 0xc1,
            0x8a, 0x99, 0x55, 0x55, 0x9e, 0x4d, 0x76, 0x92,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0x8b, 0xb8, 0x9c, 0xf7, 0x19, 0x72, 0xfe, 0x5a,
            0xcc, 0x16, 0xfd, 0xc5, 0xf8, 0xcf, 0xfd, 0x2c,
            0x2e, 0x71, 0x78, 0xc0, 0x86, 0xb3, 0xbb, 0xe6,
            0x1c, 0xc1, 0x31, 0x46, 0x19, 0x13, 0x59, 0x58,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x26, 0xc6, 0xa8, 0xae, 0x4b, 0xd1, 0xfb, 0xe7,
            0x15, 0xae, 0x47, 0x8e, 0xff, 0xf3, 0xec, 0xae,
            0x83, 0xaf, 0xa6, 0x17, 0xed, 0x35, 0xbd, 0x4a,
            0x3f, 0x63, 0xc3, 0xda, 0x76, 0xa4, 0x2d, 0x22,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0xbb, 0x73, 0xf8, 0x16, 0x8a, 0x8f, 0x39, 0x1d,
            0x3d, 0x54, 0xca, 0x89, 0x2f, 0xb7, 0x2b, 0x8e,
            0x60, 0x35, 0xe3, 0x7f, 0x89, 0x1e, 0x5a, 0x70,
            0x49, 0x1b, 0x94, 0xdc, 0x05, 0x51, 0x0b, 0xc4,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0x5c, 0xac, 0xc1, 0x6c, 0xdf, 0xbe, 0x05, 0x2c,
            0xfd, 0x73, 0xa9, 0x89, 0x1b, 0x8c, 0x0e, 0x78,
            0xb1, 0x9b, 0x2e, 0x07, 0xea, 0xe2, 0x42, 0x3d,
            0x48, 0xfe, 0xd5, 0xe0, 0x8a, 0xa8, 0x49, 0x4b,
        ],
    },
    DerivationVector {
        password: PasswordId::Empty,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x87, 0xfd, 0xfc, 0x29, 0x33, 0x92, 0xcb, 0xf3,
            0x3e, 0xcc, 0x9b, 0x51, 0x41, 0xa2, 0xfe, 0xfa,
            0x74, 0xd1, 0x50, 0x49, 0x97, 0x56, 0x86, 0x3c,
            0x48, 0x4c, 0x0a, 0x78, 0xb6, 0x27, 0x4d, 0x7f,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0xc0, 0xcf, 0xfb, 0x0c, 0xe5, 0xdb, 0x35, 0x1f,
            0xaa, 0x24, 0xda, 0xd5, 0x90, 0x25, 0x83, 0xcf,
            0xc3, 0x0a, 0x9f, 0x54, 0xd9, 0xaa, 0x69, 0x91,
            0xfe, 0x82, 0x1d, 0x03, 0x12, 0x21, 0x27, 0xe9,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x73, 0x6f, 0x3c, 0x3d, 0x6e, 0xbc, 0xc2, 0xa7,
            0xb9, 0x70, 0x40, 0x3e, 0x26, 0x96, 0xc0, 0xeb,
            0x4c, 0xd1, 0x77, 0x0f, 0x55, 0xf1, 0x96, 0xfc,
            0x70, 0x89, 0xe6, 0x66, 0xc1, 0x1f, 0x77, 0xda,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x1c, 0x50, 0x95, 0xac, 0x9a, 0x7b, 0xd4, 0x10,
            0xef, 0x0f, 0x72, 0xc9, 0x93, 0xec, 0xa9, 0x1b,
            0xb0, 0xe5, 0x71, 0xe9, 0xb2, 0xfb, 0xab, 0x70,
            0x4f, 0x8c, 0x13, 0x11, 0x91, 0xfa, 0xd1, 0x6c,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0x01, 0x9e, 0x54, 0xab, 0x42, 0xf0, 0x04, 0x85,
            0xd3, 0xaa, 0x1b, 0x26, 0xfc, 0xde, 0x21, 0xae,
            0x5f, 0x52, 0xcb, 0x0f, 0x09, 0x60, 0xff, 0xc9,
            0x76, 0x7f, 0x25, 0xc6, 0x5e, 0x2d, 0xb2, 0xf9,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0xb9, 0xd2, 0xf2, 0x21, 0x7b, 0x4e, 0xe5, 0xa8,
            0xbf, 0x03, 0x45, 0xf3, 0x6b, 0x2c, 0x98, 0x87,
            0x33, 0xf5, 0x03, 0xa9, 0x75, 0xdf, 0xea, 0xc7,
            0xb7, 0x13, 0x5f, 0x54, 0xa5, 0xf2, 0x99, 0x71,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xa7, 0xa2, 0x86, 0x98, 0x29, 0x79, 0x78, 0x07,
            0xb3, 0xe5, 0x76, 0xc1, 0x78, 0x78, 0xb4, 0x66,
            0x44, 0x9e, 0x89, 0xe6, 0x04, 0x47, 0xd5, 0x41,
            0x77, 0x5a, 0x96, 0xeb, 0x7c, 0x1a, 0x5d, 0xed,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x4f, 0x10, 0x89, 0xc0, 0x1e, 0x43, 0x8b, 0xde,
            0x64, 0x9a, 0x37, 0x9f, 0xa4, 0x18, 0xfb, 0xc3,
            0xb8, 0x56, 0x25, 0x87, 0x72, 0xdf, 0xe9, 0x11,
            0x80, 0x6f, 0x9b, 0xd0, 0x80, 0x9f, 0xbc, 0x7e,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0xae, 0xb5, 0xf9, 0x7d, 0x66, 0x27, 0xee, 0xbc,
            0xde, 0x6b, 0x13, 0x9a, 0x00, 0x89, 0x55, 0x00,
            0x30, 0xf7, 0x40, 0x1c, 0x67, 0xe0, 0x1c, 0x05,
            0x7a, 0x33, 0x38, 0x17, 0x5e, 0x3f, 0x3a, 0x17,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xd7, 0x68, 0x7d, 0xf6, 0xc7, 0x81, 0xdc, 0x88,
            0xd6, 0x4e, 0xf9, 0xcb, 0xaf, 0x95, 0xd3, 0xd5,
            0xd1, 0x15, 0x5f, 0x66, 0xb2, 0x30, 0x23, 0x9e,
            0x6e, 0x81, 0xc1, 0x55, 0x0c, 0x88, 0x40, 0xcf,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0x8f, 0x7b, 0x7d, 0x45, 0x9c, 0x75, 0x2f, 0x64,
            0xbf, 0x12, 0xbe, 0x62, 0x5b, 0x65, 0xd4, 0x96,
            0xac, 0x24, 0xea, 0x36, 0x51, 0x6b, 0x16, 0x8e,
            0x16, 0xfb, 0x02, 0x68, 0x45, 0xb4, 0xe8, 0x2e,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0xb5, 0xac, 0x72, 0x0b, 0x7a, 0xbe, 0x08, 0x32,
            0xfc, 0x51, 0xa3, 0x1b, 0x1e, 0xc5, 0x67, 0x3b,
            0xeb, 0x1e, 0x41, 0x84, 0x0a, 0xdf, 0xd3, 0xd6,
            0x06, 0xe8, 0x63, 0x8f, 0x40, 0x06, 0xeb, 0x48,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xba, 0x1a, 0x0f, 0x36, 0xba, 0xd7, 0x71, 0x52,
            0x65, 0x64, 0x05, 0x1e, 0xb9, 0xca, 0x20, 0x7d,
            0xa1, 0x9b, 0x62, 0xe5, 0x37, 0x62, 0x34, 0x99,
            0x76, 0xa9, 0xa3, 0xd1, 0xb0, 0xef, 0x7e, 0x20,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0x46, 0x24, 0xdb, 0xd2, 0x13, 0x73, 0xee, 0x56,
            0x59, 0xc1, 0x25, 0xb1, 0x84, 0xee, 0xda, 0xa2,
            0x6a, 0x33, 0xb7, 0x7c, 0xa1, 0x13, 0x14, 0xb9,
            0xf0, 0xc9, 0xda, 0xe1, 0xe4, 0x4e, 0x9b, 0x04,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x53, 0x88, 0xea, 0x5e, 0x62, 0xe1, 0xb5, 0x57,
            0x98, 0x1a, 0xbe, 0x5c, 0xe4, 0x13, 0x21, 0x27,
            0x58, 0xaa, 0x6a, 0x9d, 0x2c, 0x5b, 0xf0, 0x8c,
            0x01, 0x9d, 0x45, 0x9d, 0xba, 0x66, 0x6b, 0x90,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xf5, 0x8f, 0x43, 0x5f, 0xbc, 0x5c, 0x05, 0x86,
            0x5c, 0x91, 0x4f, 0xd9, 0x72, 0x10, 0x8a, 0x09,
            0x45, 0x7d, 0x5f, 0x9a, 0x48, 0xf1, 0x4e, 0x75,
            0xe4, 0xcc, 0x02, 0xd9, 0x89, 0x83, 0x03, 0x8a,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0xc6, 0xbc, 0x55, 0xa4, 0x04, 0xad, 0xce, 0xa3,
            0x6a, 0x1a, 0xb5, 0x67, 0x98, 0x08, 0x5e, 0x0a,
            0xaf, 0x69, 0x7f, 0x6b, 0xb2, 0xc1, 0x6a, 0x50,
            0x72, 0xf8, 0x38, 0xf1, 0x7d, 0xfe, 0x6c, 0xb6,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0x4e, 0x6c, 0xa5, 0x79, 0x57, 0x43, 0x9b, 0xe3,
            0xa7, 0x53, 0x70, 0x42, 0x42, 0x25, 0xe2, 0x21,
            0x1d, 0x55, 0xf0, 0x5a, 0xf0, 0x05, 0x61, 0xdf,
            0x3f, 0x3e, 0xfe, 0xe9, 0x11, 0x6b, 0xc3, 0x4c,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xab, 0x25, 0x79, 0x65, 0x98, 0xe7, 0x4b, 0x29,
            0xc3, 0x24, 0xf5, 0xba, 0x4d, 0x90, 0xea, 0x7d,
            0xc8, 0x9f, 0xc6, 0x89, 0x10, 0x41, 0xb4, 0xd5,
            0x6c, 0x94, 0x15, 0x65, 0x05, 0xf7, 0x22, 0xc0,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x80, 0xcd, 0x0f, 0x15, 0x36, 0x43, 0x66, 0xa7,
            0x25, 0x51, 0xc3, 0x79, 0x75, 0xf7, 0xb6, 0x37,
            0xba, 0x89, 0xc2, 0x9b, 0x46, 0x39, 0xec, 0x72,
            0x0f, 0x69, 0xa7, 0x0d, 0xbb, 0xed, 0x51, 0x5c,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0xaa, 0xec, 0x5a, 0x97, 0x6d, 0x4d, 0x35, 0xcb,
            0x20, 0x24, 0x48, 0x6f, 0xc9, 0xf9, 0xbb, 0x9a,
            0xa3, 0xea, 0xe7, 0xce, 0xf2, 0xbc, 0xe6, 0x26,
            0x64, 0xb5, 0xb3, 0x75, 0x1c, 0xf5, 0x0f, 0xf1,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x6f, 0x5e, 0xa3, 0xc6, 0xc6, 0xf5, 0xe4, 0x83,
            0x34, 0x67, 0xb4, 0x7c, 0x3a, 0x67, 0x1e, 0x65,
            0x71, 0x4e, 0x87, 0x07, 0x1b, 0xd1, 0xe3, 0x6d,
            0x71, 0x6f, 0x84, 0x6b, 0x5c, 0xd2, 0x89, 0x80,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0x69, 0xf4, 0xd5, 0xce, 0xf5, 0xc7, 0xd8, 0xba,
            0x93, 0x8e, 0x88, 0x03, 0x88, 0xc8, 0xf6, 0x3b,
            0x6b, 0x24, 0x48, 0xb2, 0x62, 0x6d, 0x13, 0x43,
            0xfc, 0x5c, 0xb6, 0x8b, 0xbd, 0x7f, 0x27, 0xb2,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0x86, 0x5c, 0x59, 0x45, 0xe1, 0x1f, 0x5b, 0xf3,
            0xdd, 0xf0, 0x02, 0xe7, 0xcb, 0x17, 0x48, 0xf6,
            0x22, 0x4d, 0x26, 0x71, 0xe8, 0x06, 0xda, 0xd4,
            0xaa, 0xf0, 0x90, 0xa0, 0x43, 0x67, 0xda, 0x29,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x48, 0x3b, 0xa7, 0xf2, 0xe2, 0xfe, 0x38, 0x2c,
            0xf6, 0x1d, 0x20, 0xb2, 0x98, 0x12, 0xe2, 0xd4,
            0x96, 0x10, 0xa6, 0x00, 0x41, 0xae, 0x40, 0xec,
            0xf9, 0xfc, 0x7e, 0xf1, 0x38, 0xe9, 0x38, 0x76,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0x57, 0x6f, 0x7c, 0x16, 0x58, 0x25, 0xbe, 0xf9,
            0xef, 0x14, 0xb4, 0xbc, 0x2c, 0x82, 0x46, 0x9d,
            0x1e, 0x40, 0x8f, 0xf8, 0xe7, 0xba, 0x30, 0x66,
            0x94, 0x79, 0x7f, 0x9e, 0x45, 0xb7, 0x66, 0xed,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x89, 0xd3, 0xb2, 0x7b, 0x5f, 0x6e, 0x8a, 0xf0,
            0x15, 0xf2, 0xf8, 0x7c, 0xf3, 0x68, 0xa1, 0x43,
            0x8a, 0x20, 0x6c, 0x4e, 0xcf, 0x5f, 0xe6, 0x81,
            0xfc, 0x3b, 0xf9, 0x4c, 0x56, 0x21, 0x3e, 0xf6,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x1e, 0x39, 0xe8, 0xbf, 0x66, 0x76, 0xfc, 0xd3,
            0x15, 0x66, 0x55, 0x45, 0x7a, 0xfa, 0x14, 0xbe,
            0xe7, 0x71, 0xdb, 0xcb, 0xfc, 0xd0, 0x72, 0x41,
            0xc7, 0xce, 0xe2, 0x09, 0xa7, 0xcb, 0x1f, 0xe9,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0x12, 0xb9, 0x0f, 0x59, 0x4f, 0x09, 0x08, 0xcf,
            0x91, 0x2d, 0x65, 0x5c, 0x94, 0x8f, 0x9c, 0x2a,
            0x1e, 0xab, 0x85, 0x57, 0x65, 0xbc, 0x12, 0x78,
            0x5e, 0xf1, 0x8a, 0xa0, 0x2b, 0x8e, 0x7e, 0xdc,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0xb1, 0xa7, 0xb7, 0xdc, 0x20, 0xdf, 0x17, 0x4a,
            0x4a, 0x0e, 0x41, 0x0d, 0xbf, 0xaf, 0x03, 0xb4,
            0xc3, 0x75, 0xc4, 0x50, 0xa8, 0x9d, 0x7a, 0x9e,
            0xd3, 0x49, 0xb4, 0xe5, 0x2e, 0x64, 0xdf, 0xd8,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xd4, 0x59, 0x4d, 0x8a, 0x1b, 0x59, 0x52, 0x0a,
            0x48, 0x87, 0x89, 0x22, 0xa6, 0x5d, 0x66, 0x3d,
            0x28, 0xf6, 0xa5, 0xfa, 0x49, 0xe9, 0x31, 0xd3,
            0x00, 0xd8, 0xf9, 0xba, 0xf9, 0x3d, 0x0a, 0xeb,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x68, 0x07, 0x34, 0x6c, 0xc5, 0x3e, 0xde, 0xd1,
            0xcb, 0x96, 0x4a, 0x72, 0x62, 0x85, 0x89, 0xa6,
            0xbd, 0x48, 0x35, 0x59, 0x90, 0xbf, 0xdf, 0xe7,
            0x46, 0x51, 0x09, 0x71, 0x02, 0x07, 0x05, 0x9d,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0xa3, 0x10, 0xef, 0x3c, 0x6b, 0x3a, 0x95, 0xe6,
            0xd8, 0xca, 0x66, 0x44, 0xe3, 0xdc, 0xfd, 0x88,
            0x22, 0x2a, 0x59, 0xfe, 0x8e, 0x00, 0xc5, 0x2d,
            0x6a, 0x12, 0x63, 0x1d, 0x82, 0xc1, 0xd2, 0x4b,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x2c, 0x8c, 0x66, 0x74, 0xc8, 0x79, 0xcf, 0x18,
            0x50, 0xbc, 0x9b, 0x7f, 0xbd, 0xcc, 0x6e, 0xa7,
            0xab, 0xb0, 0xa1, 0x52, 0x21, 0x96, 0xa8, 0x66,
            0x87, 0x53, 0x05, 0xde, 0xa5, 0x74, 0x86, 0xf3,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0x57, 0x77, 0x02, 0x7a, 0xff, 0x40, 0x51, 0xfb,
            0x9b, 0x43, 0xc1, 0xf1, 0xef, 0x04, 0x63, 0xbd,
            0x67, 0x75, 0x11, 0x75, 0xd4, 0x28, 0xa1, 0x3d,
            0xa3, 0xda, 0x84, 0x5a, 0x59, 0x13, 0x32, 0xcd,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0x9c, 0x17, 0xfe, 0x96, 0x89, 0x5e, 0xad, 0xbf,
            0xd1, 0xcc, 0x09, 0x5f, 0xc1, 0xbb, 0x83, 0x4f,
            0x28, 0xe5, 0xcc, 0xc9, 0xec, 0x96, 0xca, 0x81,
            0x4c, 0xff, 0x94, 0x1a, 0x4b, 0xf4, 0x07, 0x27,
        ],
    },
    DerivationVector {
        password: PasswordId::Short,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xb4, 0x79, 0xc9, 0x71, 0x5c, 0x42, 0x16, 0x38,
            0xdc, 0xe0, 0xa7, 0x05, 0xfc, 0x0b, 0x7b, 0xa7,
            0xd5, 0x6f, 0xa3, 0x06, 0x31, 0x88, 0x06, 0x35,
            0x80, 0xe0, 0x70, 0xdf, 0xf1, 0xdb, 0x49, 0x7c,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0xa4, 0x6a, 0x62, 0x98, 0x6d, 0x9c, 0x39, 0x09,
            0xf4, 0x10, 0x14, 0xdd, 0x72, 0xcf, 0xe3, 0x4a,
            0x26, 0x12, 0x47, 0x85, 0x4d, 0x73, 0x12, 0xcf,
            0x4f, 0xbe, 0xad, 0x60, 0xb9, 0xb6, 0x9e, 0xdd,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0xe7, 0x37, 0x5d, 0xe5, 0x03, 0x67, 0x66, 0xc4,
            0x0c, 0xb8, 0x5f, 0x43, 0xb5, 0x3f, 0xce, 0x4f,
            0xfa, 0x40, 0x2a, 0xb6, 0xbe, 0x35, 0x71, 0x00,
            0x7e, 0xf5, 0xd5, 0x54, 0x53, 0xfd, 0x7f, 0x0a,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x7a, 0x40, 0x3d, 0x9a, 0x13, 0xae, 0xd8, 0x16,
            0x4e, 0x9c, 0x07, 0x2c, 0x54, 0x54, 0x62, 0x25,
            0x1f, 0xd9, 0x42, 0xf1, 0x73, 0x6a, 0x6b, 0xf0,
            0x3c, 0xe1, 0xc8, 0x83, 0x30, 0x04, 0x8e, 0x04,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0x4f, 0x51, 0x0c, 0x51, 0x81, 0xac, 0x5c, 0x2c,
            0x5f, 0xd4, 0xbd, 0x14, 0x1f, 0x97, 0x12, 0x49,
            0x5b, 0xec, 0xa2, 0x79, 0x62, 0x47, 0x42, 0xb4,
            0xd6, 0xd3, 0x0d, 0x08, 0xb9, 0x6c, 0x0a, 0x69,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0x7e, 0x66, 0xc8, 0x4b, 0xea, 0x88, 0x8f, 0x92,
            0xc3, 0x48, 0xd9, 0x14, 0x55, 0x85, 0x18, 0x6c,
            0xae, 0x47, 0x2b, 0x12, 0xfb, 0xa7, 0xf0, 0xad,
            0x28, 0x17, 0x95, 0x75, 0xc1, 0xaa, 0x81, 0x5a,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x5f, 0x1a, 0x6a, 0xc4, 0xa5, 0x6d, 0x97, 0x96,
            0xa7, 0x30, 0x9a, 0x78, 0xda, 0xaa, 0xf9, 0x18,
            0xba, 0xda, 0xf5, 0xed, 0x1e, 0xec, 0xc3, 0xf0,
            0xb8, 0xa3, 0xa4, 0x4c, 0x3d, 0x38, 0xd6, 0x54,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x49, 0xab, 0x3f, 0x9f, 0x88, 0x2f, 0xdb, 0x9e,
            0x52, 0x8b, 0x4d, 0x9f, 0x1b, 0x3e, 0x8c, 0x71,
            0xd2, 0x63, 0x9a, 0xbf, 0x17, 0x01, 0xd5, 0x6e,
            0xb9, 0x9b, 0xd5, 0x12, 0x01, 0xe4, 0x20, 0xff,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0xf9, 0xca, 0x14, 0x8b, 0x0c, 0x04, 0x18, 0x90,
            0xbf, 0xf8, 0x83, 0x1d, 0xb6, 0x17, 0x47, 0x19,
            0x7e, 0x94, 0xce, 0x68, 0xf1, 0x90, 0xed, 0xf2,
            0x69, 0x69, 0x4b, 0x4d, 0x64, 0x48, 0x61, 0xca,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x17, 0x49, 0xdf, 0xcd, 0x77, 0xe5, 0x25, 0x85,
            0x19, 0xea, 0x22, 0x31, 0xba, 0x2c, 0xd6, 0x54,
            0x3b, 0x07, 0x33, 0x39, 0xac, 0x9b, 0x15, 0x45,
            0xbb, 0x64, 0x31, 0x53, 0xfa, 0xf6, 0xd1, 0x7b,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0xd1, 0xbf, 0xa1, 0xa6, 0xb8, 0xa9, 0x77, 0x83,
            0x9f, 0x8c, 0x3f, 0x9d, 0x52, 0xdd, 0x02, 0x10,
            0x4e, 0x20, 0x29, 0xc0, 0xeb, 0x2a, 0x62, 0x08,
            0xcc, 0x40, 0x88, 0x16, 0xe7, 0x76, 0x8a, 0x8c,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0x45, 0x7a, 0x79, 0x55, 0xeb, 0xec, 0xec, 0x71,
            0xa5, 0x1e, 0xfb, 0x62, 0x37, 0xe5, 0xb1, 0xd6,
            0x2f, 0x4d, 0xea, 0xb5, 0xc9, 0x3d, 0x7b, 0x3d,
            0x11, 0xd1, 0xe7, 0x0f, 0xaf, 0xfa, 0x41, 0x7e,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Empty,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xe8, 0x05, 0xac, 0x9c, 0xc1, 0xd8, 0x41, 0x2c,
            0x42, 0x44, 0x6d, 0x23, 0x7d, 0x1b, 0x50, 0x4f,
            0x95, 0x40, 0xb3, 0x62, 0xbd, 0x1b, 0x75, 0xe4,
            0x51, 0x53, 0x1e, 0x85, 0x3e, 0x24, 0x75, 0x3d,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0x8a, 0xe7, 0x2f, 0x94, 0xe6, 0xfc, 0xd5, 0x4f,
            0xcb, 0xfc, 0xa6, 0x62, 0x00, 0xa2, 0x11, 0xa5,
            0x1b, 0x2f, 0x84, 0x67, 0x87, 0xd2, 0x0b, 0x68,
            0x08, 0xbe, 0xdf, 0x15, 0x6c, 0xe4, 0x6c, 0xa0,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x53, 0xb4, 0x21, 0x61, 0x13, 0x4e, 0x15, 0xc8,
            0x71, 0xab, 0xd7, 0x1a, 0xba, 0x13, 0x90, 0xd0,
            0x1f, 0x4c, 0x6a, 0x94, 0x0c, 0xaa, 0xf5, 0xc1,
            0x79, 0x25, 0x8d, 0x8f, 0x1b, 0x1d, 0x68, 0x0b,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xa7, 0xfd, 0xa4, 0xc7, 0x9d, 0xd3, 0xba, 0x1a,
            0x87, 0x5f, 0x65, 0xe9, 0x24, 0x8b, 0x21, 0x08,
            0x99, 0xca, 0x08, 0x14, 0xae, 0x38, 0x99, 0x5d,
            0x8c, 0xe5, 0xa5, 0x35, 0x60, 0xcb, 0xac, 0x31,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0xff, 0xa1, 0xe9, 0xa7, 0x27, 0xa9, 0x2c, 0x27,
            0xae, 0x6f, 0x74, 0xb1, 0xc7, 0x97, 0x8f, 0x9e,
            0x1a, 0xf8, 0x60, 0xe1, 0x06, 0x37, 0x63, 0x40,
            0xac, 0x43, 0xd9, 0x69, 0xd1, 0x36, 0x40, 0x5b,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0xee, 0xeb, 0x77, 0x14, 0x42, 0x0a, 0x00, 0xb1,
            0x8a, 0xce, 0xc2, 0xb5, 0x97, 0x9d, 0x1d, 0xa6,
            0x13, 0x73, 0x20, 0x2b, 0x7f, 0x8b, 0xa7, 0x1b,
            0x08, 0x62, 0x93, 0xaa, 0xb8, 0x59, 0xe0, 0xa0,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xde, 0xac, 0x70, 0xcb, 0xe3, 0xf1, 0x72, 0x0e,
            0x35, 0x3b, 0x4e, 0x80, 0x16, 0xdd, 0xb5, 0x94,
            0x75, 0xef, 0xb7, 0x0b, 0x6a, 0x23, 0x85, 0xe7,
            0x35, 0xd2, 0xd6, 0xea, 0x6d, 0x62, 0x4a, 0x4d,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0x5e, 0xde, 0x88, 0x36, 0xfd, 0xab, 0xee, 0xc5,
            0xd3, 0x73, 0x3b, 0x43, 0x4a, 0xba, 0xc4, 0x43,
            0xd4, 0x15, 0x19, 0x3b, 0x59, 0x9e, 0x09, 0x26,
            0x19, 0x3b, 0x00, 0x0f, 0x40, 0x6a, 0x5a, 0x7d,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0xfa, 0xa4, 0x42, 0xfb, 0xab, 0xf4, 0x05, 0x8c,
            0xc6, 0x53, 0x68, 0xb5, 0x3d, 0x7e, 0xc5, 0x11,
            0x3c, 0x09, 0xea, 0x7e, 0x5e, 0x37, 0x43, 0x31,
            0x2f, 0x4b, 0xeb, 0xed, 0xd9, 0x80, 0xba, 0x37,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xf6, 0x2a, 0xe6, 0xc7, 0x87, 0x1b, 0x18, 0x1a,
            0xa7, 0x12, 0x32, 0xf5, 0xeb, 0x88, 0x37, 0x24,
            0x98, 0xef, 0x32, 0xac, 0x0a, 0x7d, 0x71, 0x51,
            0x19, 0xe8, 0xf0, 0x52, 0xeb, 0x10, 0x2d, 0x29,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0x3e, 0x9c, 0x12, 0xb3, 0xf6, 0xdf, 0xb6, 0x44,
            0x15, 0x94, 0xec, 0x70, 0x63, 0xfc, 0xa9, 0x62,
            0xff, 0xda, 0x10, 0xb6, 0xcf, 0x30, 0xb8, 0x98,
            0xa3, 0x1e, 0xf9, 0xf1, 0x30, 0x6b, 0x11, 0x19,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0xf0, 0x92, 0x8f, 0x50, 0xa1, 0x55, 0xf2, 0x6a,
            0x8c, 0x9c, 0x1b, 0xc7, 0xf3, 0xb5, 0xcb, 0x53,
            0x1c, 0x53, 0xa8, 0xf5, 0x10, 0x40, 0xc9, 0xce,
            0x5f, 0xc7, 0x9d, 0x43, 0x0f, 0xf0, 0xc0, 0xf4,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Short,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x97, 0x4a, 0xcf, 0xbb, 0x0f, 0x0f, 0x20, 0xc8,
            0x1e, 0xc9, 0x28, 0x29, 0xf3, 0x8c, 0x3d, 0xaf,
            0x08, 0x6a, 0x7d, 0xf5, 0x8b, 0x91, 0x2b, 0x85,
            0x6d, 0x1f, 0x5e, 0xcc, 0x93, 0x55, 0xef, 0x1b,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::One,
        derived: [
            0x1d, 0x10, 0x4e, 0xa5, 0xd2, 0x35, 0x00, 0x6a,
            0x12, 0xa8, 0x0f, 0x71, 0xb8, 0x0e, 0xe5, 0x28,
            0x04, 0x8b, 0x64, 0xcc, 0x1a, 0x7a, 0x0f, 0x30,
            0xf7, 0xdf, 0x4b, 0xa2, 0x6b, 0x83, 0x20, 0xc7,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneThousand,
        derived: [
            0x6e, 0x90, 0xc8, 0x6e, 0xe0, 0x7b, 0x87, 0x3e,
            0x96, 0x50, 0x71, 0x02, 0x56, 0x73, 0xff, 0x05,
            0x42, 0x9f, 0x67, 0x8c, 0x30, 0xf9, 0x1b, 0x37,
            0xe1, 0xe2, 0xda, 0x51, 0x20, 0x36, 0xd3, 0x20,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha1,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x14, 0x10, 0x30, 0x76, 0x3b, 0xf9, 0x83, 0xc8,
            0x56, 0x4d, 0x5d, 0x4c, 0x93, 0x5f, 0xe3, 0xca,
            0x35, 0x49, 0x60, 0x81, 0x59, 0xac, 0x19, 0x34,
            0xc1, 0x59, 0x90, 0x40, 0x66, 0x8c, 0x23, 0x63,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::One,
        derived: [
            0xfd, 0x5c, 0xae, 0xb8, 0xb3, 0xab, 0xe5, 0x89,
            0xbc, 0x15, 0x9c, 0x4e, 0x51, 0xf8, 0x00, 0x57,
            0x0e, 0x74, 0xf6, 0x43, 0x97, 0xa6, 0xc5, 0xee,
            0x13, 0x1d, 0xfe, 0xd9, 0x3f, 0x05, 0x11, 0xaa,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneThousand,
        derived: [
            0x3f, 0xd5, 0x87, 0xc9, 0x4b, 0xa9, 0x46, 0xb8,
            0xb9, 0xdc, 0xcd, 0xdd, 0x2a, 0x5b, 0x74, 0xf6,
            0x77, 0x8d, 0x4f, 0x61, 0xe6, 0x91, 0xf8, 0x3a,
            0xc4, 0x7a, 0x2f, 0xa9, 0x58, 0x0b, 0xfd, 0xf8,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha256,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x11, 0x99, 0x2d, 0x8b, 0x81, 0x33, 0x11, 0x24,
            0x4c, 0x54, 0x4b, 0x62, 0x29, 0x29, 0x45, 0xe2,
            0x08, 0xd4, 0x03, 0xce, 0xbd, 0x6b, 0x95, 0x52,
            0xa1, 0xa5, 0x62, 0x06, 0x5d, 0x99, 0x58, 0xea,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::One,
        derived: [
            0xcf, 0x55, 0x42, 0x2c, 0xef, 0x6e, 0x1b, 0xc4,
            0x9e, 0x6d, 0x08, 0x2b, 0x22, 0x73, 0xd4, 0x80,
            0xe8, 0xf2, 0xe8, 0x82, 0x2d, 0xad, 0xd1, 0x46,
            0x9c, 0x2a, 0x32, 0xd9, 0x65, 0x7d, 0x12, 0xf1,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneThousand,
        derived: [
            0x35, 0x65, 0x85, 0x51, 0xf0, 0xec, 0x13, 0x39,
            0x8a, 0x7b, 0x45, 0xe0, 0x26, 0x1c, 0xfd, 0x65,
            0x4c, 0x1e, 0x52, 0x41, 0x1e, 0x6e, 0x45, 0x7d,
            0xee, 0x68, 0xf4, 0xae, 0xab, 0xe9, 0x25, 0xa7,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha384,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0x1a, 0xba, 0xb5, 0xf1, 0xe4, 0x61, 0xdf, 0x37,
            0x8b, 0x88, 0xc0, 0xa2, 0x2b, 0xe7, 0x6e, 0xf2,
            0xf1, 0x62, 0x7d, 0xf7, 0x4a, 0xc7, 0xcb, 0xfb,
            0x84, 0xbd, 0xcc, 0xb3, 0x54, 0xbc, 0x88, 0x89,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::One,
        derived: [
            0xde, 0x4a, 0xfb, 0xc0, 0xad, 0xd3, 0xe4, 0xd3,
            0x2f, 0x4b, 0xc6, 0xe1, 0x22, 0xa8, 0x8a, 0xe4,
            0x4a, 0x2b, 0x3c, 0xcf, 0x01, 0x48, 0xe7, 0x76,
            0x2b, 0xac, 0x05, 0xc4, 0x3e, 0x94, 0xef, 0x7f,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneThousand,
        derived: [
            0x43, 0xe1, 0x20, 0x24, 0xc4, 0xd3, 0x54, 0x72,
            0x7f, 0x7e, 0x58, 0x84, 0x2c, 0xcb, 0x60, 0x33,
            0xa1, 0x61, 0xd6, 0x0d, 0xc5, 0xae, 0x51, 0x6f,
            0x07, 0x6e, 0x4a, 0x58, 0xa1, 0x88, 0x0d, 0x38,
        ],
    },
    DerivationVector {
        password: PasswordId::Long,
        salt: SaltId::Long,
        hash: HashAlgorithm::Sha512,
        iterations: Iterations::OneHundredThousand,
        derived: [
            0xf9, 0xa9, 0x23, 0x84, 0xa4, 0xea, 0xdf, 0xc3,
            0x56, 0x06, 0x49, 0xb3, 0x7f, 0xb6, 0x76, 0xe8,
            0x3c, 0x45, 0x3c, 0xbb, 0xd9, 0x9f, 0x80, 0xbb,
            0xa6, 0xf0, 0xa1, 0x0e, 0xbd, 0x15, 0x0b, 0x52,
        ],
    },
];

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_covers_cross_product_exactly_once() {
        assert_eq!(DERIVATIONS.len(), 108);
        let mut seen = HashSet::new();
        for v in &DERIVATIONS {
            assert!(
                seen.insert((v.password, v.salt, v.hash, v.iterations)),
                "duplicate tuple ({}, {}, {}, {})",
                v.password,
                v.salt,
                v.hash,
                v.iterations
            );
        }
        assert_eq!(seen.len(), 108);
    }

    #[test]
    fn table_order_matches_index_arithmetic() {
        let mut linear = DERIVATIONS.iter();
        for password in PasswordId::ALL {
            for salt in SaltId::ALL {
                for hash in HashAlgorithm::ALL {
                    for iterations in Iterations::ALL {
                        let by_index = vector(password, salt, hash, iterations);
                        let by_scan = linear.next().expect("table too short");
                        assert_eq!(by_index, by_scan);
                        assert_eq!(by_index.password, password);
                        assert_eq!(by_index.salt, salt);
                        assert_eq!(by_index.hash, hash);
                        assert_eq!(by_index.iterations, iterations);
                    }
                }
            }
        }
        assert!(linear.next().is_none(), "table too long");
    }

    // PBKDF2-HMAC-SHA256 with empty password, empty salt, 1 iteration is a
    // widely published reference value (f7ce0b65...).
    #[test]
    fn anchor_empty_empty_sha256_one_iteration() {
        let derived = expected(
            PasswordId::Empty,
            SaltId::Empty,
            HashAlgorithm::Sha256,
            Iterations::One,
        );
        assert_eq!(
            derived,
            &[
                0xf7, 0xce, 0x0b, 0x65, 0x3d, 0x2d, 0x72, 0xa4, 0x10, 0x8c, 0xf5, 0xab, 0xe9,
                0x12, 0xff, 0xdd, 0x77, 0x76, 0x16, 0xdb, 0xbb, 0x27, 0xa7, 0x0e, 0x82, 0x04,
                0xf3, 0xae, 0x2d, 0x0f, 0x6f, 0xad,
            ]
        );
    }

    #[test]
    fn anchor_short_short_sha1_hundred_thousand_iterations() {
        let derived = expected(
            PasswordId::Short,
            SaltId::Short,
            HashAlgorithm::Sha1,
            Iterations::OneHundredThousand,
        );
        assert_eq!(
            derived,
            &[
                0xf5, 0x8f, 0x43, 0x5f, 0xbc, 0x5c, 0x05, 0x86, 0x5c, 0x91, 0x4f, 0xd9, 0x72,
                0x10, 0x8a, 0x09, 0x45, 0x7d, 0x5f, 0x9a, 0x48, 0xf1, 0x4e, 0x75, 0xe4, 0xcc,
                0x02, 0xd9, 0x89, 0x83, 0x03, 0x8a,
            ]
        );
    }

    #[test]
    fn named_lookup_resolves_webcrypto_names() {
        let derived = expected_for_names("short", "short", "SHA-1", 100_000)
            .expect("tuple should have a vector");
        assert_eq!(
            derived,
            expected(
                PasswordId::Short,
                SaltId::Short,
                HashAlgorithm::Sha1,
                Iterations::OneHundredThousand,
            )
        );
    }

    #[test]
    fn named_lookup_rejects_unknown_keys() {
        assert!(matches!(
            expected_for_names("medium", "short", "SHA-1", 1),
            Err(VectorError::UnknownPassword(_))
        ));
        assert!(matches!(
            expected_for_names("short", "tiny", "SHA-1", 1),
            Err(VectorError::UnknownSalt(_))
        ));
        assert!(matches!(
            expected_for_names("short", "short", "MD5", 1),
            Err(VectorError::UnsupportedHash(_))
        ));
        assert!(matches!(
            expected_for_names("short", "short", "SHA-1", 2),
            Err(VectorError::UnsupportedIterations(2))
        ));
    }
}
