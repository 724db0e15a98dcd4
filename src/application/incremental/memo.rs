//! Memo tables for incremental evaluation
//!
//! A table maps a node key to the input it was last evaluated with, that
//! input's fingerprint, and the output. Evaluation always reads the previous
//! pass's table and records into the next one, so the previous table stays
//! valid until the caller decides to commit.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::ports::StepOutcome;
use crate::domain::value_objects::{Fingerprint, StableHash};
use crate::error::GenerateResult;

#[derive(Debug, Clone)]
struct MemoEntry<I, O> {
    input: I,
    fingerprint: Fingerprint,
    output: O,
}

/// Result of evaluating one node
#[derive(Debug, Clone)]
pub struct Evaluated<O> {
    pub output: O,
    pub outcome: StepOutcome,
    /// Fingerprint of the input the output was derived from
    pub fingerprint: Fingerprint,
}

/// Cached node outputs keyed by `K`, valid for the input they were computed from
#[derive(Debug, Clone)]
pub struct MemoTable<K, I, O> {
    entries: HashMap<K, MemoEntry<I, O>>,
}

impl<K, I, O> Default for MemoTable<K, I, O> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, I, O> MemoTable<K, I, O>
where
    K: Eq + Hash,
    I: StableHash + PartialEq,
    O: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&O> {
        self.entries.get(key).map(|e| &e.output)
    }

    /// Evaluate node `key` for `input`, recording the result into `next`.
    ///
    /// The cached output is reused when the stored fingerprint matches and
    /// the stored input is structurally equal; `compute` runs otherwise. A
    /// failing `compute` records nothing.
    pub fn evaluate<F>(
        &self,
        next: &mut Self,
        key: K,
        input: I,
        compute: F,
    ) -> GenerateResult<Evaluated<O>>
    where
        F: FnOnce(&I) -> GenerateResult<O>,
    {
        let fingerprint = input.fingerprint();

        let (output, outcome) = match self.entries.get(&key) {
            Some(entry) if entry.fingerprint == fingerprint && entry.input == input => {
                (entry.output.clone(), StepOutcome::Unchanged)
            }
            Some(_) => (compute(&input)?, StepOutcome::Modified),
            None => (compute(&input)?, StepOutcome::New),
        };

        next.entries.insert(
            key,
            MemoEntry {
                input,
                fingerprint,
                output: output.clone(),
            },
        );

        Ok(Evaluated {
            output,
            outcome,
            fingerprint,
        })
    }
}
