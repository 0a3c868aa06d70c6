//! Aggregate fixture accessor.

use serde::Serialize;

use crate::derived_key::{DerivedKeyType, DERIVED_KEY_TYPES};
use crate::params::{PasswordId, SaltId};
use crate::vectors::{DerivationVector, DERIVATIONS};

/// Everything a conformance harness needs in one value: the named inputs,
/// the known-answer table, and the derive-then-import key targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestData {
    /// Named input secrets and their bytes.
    pub passwords: [(PasswordId, &'static [u8]); 3],
    /// Named salts and their bytes.
    pub salts: [(SaltId, &'static [u8]); 3],
    /// The full known-answer table.
    pub derivations: &'static [DerivationVector],
    /// Target key types for derive-then-import coverage.
    pub derived_key_types: &'static [DerivedKeyType],
}

/// Assemble the complete fixture.
///
/// Pure and idempotent: no I/O, no failure modes, and repeated calls return
/// structurally equal data backed by the same static tables.
#[must_use]
pub fn test_data() -> TestData {
    TestData {
        passwords: PasswordId::ALL.map(|id| (id, id.bytes())),
        salts: SaltId::ALL.map(|id| (id, id.bytes())),
        derivations: &DERIVATIONS,
        derived_key_types: &DERIVED_KEY_TYPES,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_is_idempotent() {
        assert_eq!(test_data(), test_data());
    }

    #[test]
    fn test_data_exposes_all_four_datasets() {
        let data = test_data();
        assert_eq!(data.passwords.len(), 3);
        assert_eq!(data.salts.len(), 3);
        assert_eq!(data.derivations.len(), 108);
        assert_eq!(data.derived_key_types.len(), 16);
    }

    #[test]
    fn named_inputs_match_their_ids() {
        let data = test_data();
        for (id, bytes) in data.passwords {
            assert_eq!(bytes, id.bytes());
        }
        for (id, bytes) in data.salts {
            assert_eq!(bytes, id.bytes());
        }
    }
}
