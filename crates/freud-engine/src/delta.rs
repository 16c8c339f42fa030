//! Shift metric between consecutive activation vectors.

use std::collections::{BTreeMap, BTreeSet};

/// Euclidean (L2) distance between two activation-score maps.
///
/// The key union is walked so a node missing from one side counts as 0.
/// Callers round the result to three decimals when storing it; the first
/// step of a run has no predecessor and records exactly 0.
pub fn activation_delta(
    previous: &BTreeMap<String, f64>,
    current: &BTreeMap<String, f64>,
) -> f64 {
    let keys: BTreeSet<&String> = previous.keys().chain(current.keys()).collect();
    keys.into_iter()
        .map(|key| {
            let a = previous.get(key).copied().unwrap_or(0.0);
            let b = current.get(key).copied().unwrap_or(0.0);
            (a - b) * (a - b)
        })
        .sum::<f64>()
        .sqrt()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
