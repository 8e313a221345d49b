//! Hash domain lock tests.
//!
//! Proves:
//! 1. Domain prefixes are distinct, null-terminated, and follow
//!    `TESSERA::*::V1\0`
//! 2. `canonical_hash` is plain SHA-256 over `domain || data`
//! 3. Grid fingerprints bind the dimension as well as the cells
//! 4. No raw `TESSERA::` domain literals in production source outside `hash.rs`

use std::path::Path;

use sha2::{Digest, Sha256};
use tessera_kernel::carrier::grid::GridState;
use tessera_kernel::proof::hash::{
    canonical_hash, grid_fingerprint, DOMAIN_GRID_STATE, DOMAIN_SEARCH_REPORT,
};

const DOMAINS: [&[u8]; 2] = [DOMAIN_GRID_STATE, DOMAIN_SEARCH_REPORT];

#[test]
fn domains_are_distinct_and_well_formed() {
    assert_ne!(DOMAIN_GRID_STATE, DOMAIN_SEARCH_REPORT);
    for domain in DOMAINS {
        assert!(domain.ends_with(&[0]), "{domain:?} is not null-terminated");
        let text = std::str::from_utf8(&domain[..domain.len() - 1]).unwrap();
        assert!(text.starts_with("TESSERA::"), "{text}");
        assert!(text.ends_with("::V1"), "{text}");
    }
}

#[test]
fn canonical_hash_is_sha256_of_domain_then_data() {
    let data = b"1 2 3";
    for domain in DOMAINS {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        hasher.update(data);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(domain, data).as_str(), expected);
    }
}

#[test]
fn domain_separation_changes_digest() {
    let data = b"same bytes";
    assert_ne!(
        canonical_hash(DOMAIN_GRID_STATE, data),
        canonical_hash(DOMAIN_SEARCH_REPORT, data)
    );
}

#[test]
fn fingerprint_covers_identity_bytes() {
    let grid = GridState::ordered(3).unwrap();
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_GRID_STATE);
    hasher.update(grid.identity_bytes());
    assert_eq!(
        grid_fingerprint(&grid).hex_digest(),
        hex::encode(hasher.finalize())
    );
    assert_eq!(grid.identity_bytes()[0], 3);
}

fn rust_sources(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn no_domain_literals_outside_hash_module() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .unwrap();
    let mut files = Vec::new();
    for krate in ["kernel/src", "search/src", "harness/src"] {
        rust_sources(&root.join(krate), &mut files);
    }
    assert!(!files.is_empty());
    for file in files {
        if file.ends_with("proof/hash.rs") {
            continue;
        }
        let text = std::fs::read_to_string(&file).unwrap();
        assert!(
            !text.contains("TESSERA::"),
            "{} contains a raw domain literal",
            file.display()
        );
    }
}
