use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use freud_graph::SimParams;

/// Engine identifier recorded at the head of every runlog.
pub const MODEL_NAME: &str = "freud-core-v1";

/// Constant placeholder timestamp. The runlog must be a pure function of
/// its parameters, so no wall-clock value is ever recorded.
pub const RUNLOG_TIMESTAMP: &str = "1970-01-01T00:00:00.000Z";

// ─────────────────────────────────────────────
// BeamCandidate
// ─────────────────────────────────────────────

/// One path surviving beam reconstruction.
///
/// `edge_path` runs parallel to `node_path` with one fewer entry; a node
/// never repeats within a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeamCandidate {
    pub node_path: Vec<String>,
    pub edge_path: Vec<String>,
    /// Cumulative score, re-rounded to three decimals at each extension.
    pub score: f64,
}

impl BeamCandidate {
    /// Single-node candidate used to seed the beam.
    pub fn seed(node_id: &str, score: f64) -> Self {
        Self {
            node_path: vec![node_id.to_string()],
            edge_path: Vec::new(),
            score,
        }
    }

    /// The node the next expansion extends from.
    pub fn head(&self) -> &str {
        self.node_path
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn visits(&self, node_id: &str) -> bool {
        self.node_path.iter().any(|n| n == node_id)
    }

    /// Concatenated node-path string, the deterministic tie-breaker when
    /// two candidates share a score.
    pub fn path_key(&self) -> String {
        self.node_path.concat()
    }
}

// ─────────────────────────────────────────────
// InterpretationSummary
// ─────────────────────────────────────────────

/// An id paired with a score-like value; used for top-node and top-edge
/// rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: String,
    pub score: f64,
}

/// Per-step summary of the pruned graph: the five strongest nodes, the
/// five edges carrying the most beam traffic, and the full centroid of
/// kept-node scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationSummary {
    pub top_nodes: Vec<ScoreEntry>,
    pub top_edges: Vec<ScoreEntry>,
    pub centroid: BTreeMap<String, f64>,
}

// ─────────────────────────────────────────────
// StepRunLog / RunLog
// ─────────────────────────────────────────────

/// Everything recorded about one recursion step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRunLog {
    pub step: usize,
    pub seed: u32,
    /// Full parameter snapshot, repeated per step so any step is
    /// independently reproducible.
    pub params: SimParams,
    /// Sorted id lists from the pruning pass.
    pub active_nodes: Vec<String>,
    pub kept_nodes: Vec<String>,
    pub pruned_nodes: Vec<String>,
    pub pruned_edges: Vec<String>,
    pub beam: Vec<BeamCandidate>,
    pub interpretation: InterpretationSummary,
    /// Activation score per node of the full graph.
    pub activation: BTreeMap<String, f64>,
    /// Weight per edge of the full graph, as of this step.
    pub edge_weights: BTreeMap<String, f64>,
    /// L2 shift from the previous step's activation vector; 0.0 on step 0.
    pub delta: f64,
}

/// The complete ordered trace of a run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLog {
    pub model: String,
    pub timestamp: String,
    pub params: SimParams,
    pub steps: Vec<StepRunLog>,
}

impl RunLog {
    pub fn new(params: SimParams, steps: Vec<StepRunLog>) -> Self {
        Self {
            model: MODEL_NAME.to_string(),
            timestamp: RUNLOG_TIMESTAMP.to_string(),
            params,
            steps,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_step() -> StepRunLog {
        StepRunLog {
            step: 0,
            seed: 42,
            params: SimParams::default(),
            active_nodes: vec!["n000".into()],
            kept_nodes: vec!["n000".into(), "n001".into()],
            pruned_nodes: vec!["n002".into()],
            pruned_edges: vec!["n000-n002".into()],
            beam: vec![BeamCandidate::seed("n000", 0.61)],
            interpretation: InterpretationSummary {
                top_nodes: vec![ScoreEntry {
                    id: "n000".into(),
                    score: 0.61,
                }],
                top_edges: vec![],
                centroid: BTreeMap::from([("n000".into(), 0.61)]),
            },
            activation: BTreeMap::from([("n000".into(), 0.61), ("n001".into(), 0.43)]),
            edge_weights: BTreeMap::from([("n000-n001".into(), 0.52)]),
            delta: 0.0,
        }
    }

    #[test]
    fn seed_candidate_shape() {
        let c = BeamCandidate::seed("n003", 0.5);
        assert_eq!(c.node_path, vec!["n003"]);
        assert!(c.edge_path.is_empty());
        assert_eq!(c.head(), "n003");
        assert!(c.visits("n003"));
        assert!(!c.visits("n004"));
    }

    #[test]
    fn path_key_concatenates_without_separator() {
        let mut c = BeamCandidate::seed("n001", 0.5);
        c.node_path.push("n002".into());
        assert_eq!(c.path_key(), "n001n002");
    }

    #[test]
    fn runlog_json_roundtrip_is_lossless() {
        let log = RunLog::new(SimParams::default(), vec![sample_step()]);
        let json = serde_json::to_string(&log).unwrap();
        let back: RunLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
    }

    #[test]
    fn runlog_header_is_content_pure() {
        let log = RunLog::new(SimParams::default(), vec![]);
        assert_eq!(log.model, MODEL_NAME);
        assert_eq!(log.timestamp, RUNLOG_TIMESTAMP);
    }
}
