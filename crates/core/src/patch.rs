//! JSON Patch application for flat request documents.
//!
//! A PATCH body is an ordered list of `{op, path, value}` operations
//! applied to a JSON projection of the target shape before the result is
//! re-validated. Paths address top-level object members only (`/title`,
//! not `/a/b`). Application stops at the first failing operation, leaving
//! the caller's copy of the projection for that request unusable rather
//! than half-patched rows in the store.

use serde::Deserialize;
use serde_json::Value;

/// A single patch operation, tagged by its `op` member.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
    Test { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("invalid pointer '{0}': must name a top-level member like /title")]
    InvalidPointer(String),

    #[error("no value at '{0}'")]
    MissingValue(String),

    #[error("test failed at '{0}'")]
    TestFailed(String),

    #[error("patch target is not a JSON object")]
    NotAnObject,
}

/// Apply `ops` to `doc` in order.
///
/// `doc` must be a JSON object. An empty operation list is a valid no-op.
pub fn apply(doc: &mut Value, ops: &[PatchOp]) -> Result<(), PatchError> {
    for op in ops {
        apply_one(doc, op)?;
    }
    Ok(())
}

fn apply_one(doc: &mut Value, op: &PatchOp) -> Result<(), PatchError> {
    let obj = doc.as_object_mut().ok_or(PatchError::NotAnObject)?;

    match op {
        PatchOp::Add { path, value } => {
            // On an object member, `add` inserts or replaces.
            let key = member(path)?;
            obj.insert(key.to_string(), value.clone());
        }
        PatchOp::Replace { path, value } => {
            let key = member(path)?;
            if !obj.contains_key(key) {
                return Err(PatchError::MissingValue(path.clone()));
            }
            obj.insert(key.to_string(), value.clone());
        }
        PatchOp::Remove { path } => {
            let key = member(path)?;
            obj.remove(key)
                .ok_or_else(|| PatchError::MissingValue(path.clone()))?;
        }
        PatchOp::Test { path, value } => {
            let key = member(path)?;
            let current = obj
                .get(key)
                .ok_or_else(|| PatchError::MissingValue(path.clone()))?;
            if current != value {
                return Err(PatchError::TestFailed(path.clone()));
            }
        }
        PatchOp::Move { from, path } => {
            let from_key = member(from)?;
            let key = member(path)?;
            let value = obj
                .remove(from_key)
                .ok_or_else(|| PatchError::MissingValue(from.clone()))?;
            obj.insert(key.to_string(), value);
        }
        PatchOp::Copy { from, path } => {
            let from_key = member(from)?;
            let key = member(path)?;
            let value = obj
                .get(from_key)
                .cloned()
                .ok_or_else(|| PatchError::MissingValue(from.clone()))?;
            obj.insert(key.to_string(), value);
        }
    }

    Ok(())
}

/// Resolve a pointer of the form `/member` to the member name.
fn member(path: &str) -> Result<&str, PatchError> {
    let key = path
        .strip_prefix('/')
        .ok_or_else(|| PatchError::InvalidPointer(path.to_string()))?;
    if key.is_empty() || key.contains('/') {
        return Err(PatchError::InvalidPointer(path.to_string()));
    }
    Ok(key)
}
