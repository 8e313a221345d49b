//! Canonical JSON bytes: the single serialization-for-hashing path.
//!
//! All report digests go through [`canonical_json_bytes`].
//!
//! # Canonicalization rules
//!
//! 1. Object keys are emitted in lexicographic byte order.
//! 2. Compact form, no whitespace (`{"a":1,"b":2}`).
//! 3. Numbers must be integers; floats are rejected so that output never
//!    depends on float formatting.
//! 4. Output is UTF-8.
//!
//! Objects are rebuilt in sorted order before encoding, so the result does
//! not depend on whether `serde_json` preserves insertion order.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// The encoder itself failed.
    Encode { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Encode { detail } => write!(f, "canonical JSON encoding failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let sorted = canonicalize(value)?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}

fn canonicalize(value: &serde_json::Value) -> Result<serde_json::Value, CanonError> {
    use serde_json::Value;

    Ok(match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                value.clone()
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(canonicalize)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::with_capacity(map.len());
            for key in keys {
                out.insert(key.clone(), canonicalize(&map[key])?);
            }
            Value::Object(out)
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.clone(),
    })
}
