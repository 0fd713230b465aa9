use serde_json::{Map, Value};

use crate::{values_equal, DeltaError, DeltaOptions, Side, ValueKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChangeKind {
    /// The key does not exist in the original document.
    Added,
    /// The key exists in both documents with different values.
    Modified,
}

/// Iterates over the top-level entries of `updated` that are new or differ
/// from `original`, in the key order of `updated`.
///
/// Keys that only exist in `original` are never yielded.
pub fn changes<'a>(
    original: &'a Map<String, Value>,
    updated: &'a Map<String, Value>,
    options: DeltaOptions,
) -> impl Iterator<Item = (&'a String, &'a Value, ChangeKind)> + 'a {
    updated
        .iter()
        .filter_map(move |(key, value)| match original.get(key) {
            None => Some((key, value, ChangeKind::Added)),
            Some(prev_value) if !values_equal(prev_value, value, options.key_order) => {
                Some((key, value, ChangeKind::Modified))
            }
            Some(_) => None,
        })
}

pub fn compute_delta(
    original: &Map<String, Value>,
    updated: &Map<String, Value>,
) -> Map<String, Value> {
    compute_delta_with(original, updated, DeltaOptions::default())
}

pub fn compute_delta_with(
    original: &Map<String, Value>,
    updated: &Map<String, Value>,
    options: DeltaOptions,
) -> Map<String, Value> {
    changes(original, updated, options)
        .map(|(key, value, _)| (key.clone(), value.clone()))
        .collect()
}

/// The delta between two whole documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta {
    entries: Map<String, Value>,
    added: usize,
    modified: usize,
}

impl Delta {
    pub fn between(
        original: &Value,
        updated: &Value,
        options: DeltaOptions,
    ) -> Result<Self, DeltaError> {
        let original = as_object(original, Side::Original)?;
        let updated = as_object(updated, Side::Updated)?;

        let mut delta = Delta {
            entries: Map::new(),
            added: 0,
            modified: 0,
        };
        for (key, value, kind) in changes(original, updated, options) {
            match kind {
                ChangeKind::Added => delta.added += 1,
                ChangeKind::Modified => delta.modified += 1,
            }
            delta.entries.insert(key.clone(), value.clone());
        }

        tracing::debug!(
            original_keys = original.len(),
            updated_keys = updated.len(),
            added = delta.added,
            modified = delta.modified,
            "delta computed"
        );
        Ok(delta)
    }

    #[inline]
    pub fn added(&self) -> usize {
        self.added
    }

    #[inline]
    pub fn modified(&self) -> usize {
        self.modified
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

fn as_object(value: &Value, side: Side) -> Result<&Map<String, Value>, DeltaError> {
    value.as_object().ok_or(DeltaError::NotAnObject {
        side,
        found: ValueKind::of(value),
    })
}
