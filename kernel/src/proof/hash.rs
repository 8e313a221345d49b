//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 over `domain || data`. Every domain prefix is
//! null-terminated so no prefix is a prefix of another.
//!
//! **Exactly one place defines canonical hashing.** Fingerprints used for
//! duplicate detection and report digests both route through
//! [`canonical_hash`].

use sha2::{Digest, Sha256};

use crate::carrier::grid::GridState;

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for grid state fingerprints.
pub const DOMAIN_GRID_STATE: &[u8] = b"TESSERA::GRID_STATE::V1\0";

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"TESSERA::SEARCH_REPORT::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<64 lowercase hex chars>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    let algorithm = "sha256";
    ContentHash {
        full: format!("{algorithm}:{}", hex::encode(digest)),
        colon: algorithm.len(),
    }
}

/// Fingerprint of a grid's identity bytes under [`DOMAIN_GRID_STATE`].
#[must_use]
pub fn grid_fingerprint(state: &GridState) -> ContentHash {
    canonical_hash(DOMAIN_GRID_STATE, &state.identity_bytes())
}
