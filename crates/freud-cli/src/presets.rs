//! Named parameter presets.
//!
//! Each preset is a full, pre-validated parameter record; resolution does
//! nothing beyond a table lookup. Callers needing anything else supply a
//! JSON parameter file instead.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use freud_graph::SimParams;

static PRESETS: Lazy<BTreeMap<&'static str, SimParams>> = Lazy::new(|| {
    BTreeMap::from([
        ("baseline", SimParams::default()),
        (
            "dense-drift",
            SimParams {
                edge_density: 0.45,
                weight_learning_rate: 0.35,
                drift_bias: 0.3,
                ..Default::default()
            },
        ),
        (
            "sparse-rigid",
            SimParams {
                edge_density: 0.12,
                rigidity: 0.8,
                activation_threshold: 0.6,
                ..Default::default()
            },
        ),
        (
            "single-node",
            SimParams {
                node_count: 1,
                recursion_depth: 4,
                ..Default::default()
            },
        ),
    ])
});

/// Look up a preset by name.
pub fn resolve(name: &str) -> Option<SimParams> {
    PRESETS.get(name).cloned()
}

/// Known preset names, sorted.
pub fn names() -> Vec<&'static str> {
    PRESETS.keys().copied().collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_validates() {
        for name in names() {
            let params = resolve(name).unwrap();
            assert!(params.validate().is_ok(), "preset {name} out of range");
        }
    }

    #[test]
    fn unknown_preset_resolves_to_none() {
        assert!(resolve("does-not-exist").is_none());
    }

    #[test]
    fn baseline_is_the_default_record() {
        assert_eq!(resolve("baseline").unwrap(), SimParams::default());
    }
}
