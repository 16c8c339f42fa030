use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Numeric helpers
// ─────────────────────────────────────────────

/// Round to three decimals. Every stored real in the run (weights, context
/// values, scores, deltas) passes through this so the runlog is stable
/// across platforms.
#[inline]
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Clamp to the unit interval.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// ─────────────────────────────────────────────
// Node
// ─────────────────────────────────────────────

/// A node in the synthetic graph. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable zero-padded identifier, e.g. `n007`. Lexicographic order of
    /// ids equals generation order.
    pub id: String,
    /// Membership in the prior population, fixed at generation time.
    pub is_prior: bool,
    /// Membership in the novel band (overlaps the tail of the priors).
    pub is_novel: bool,
}

impl Node {
    /// Identifier for the node at `index` in generation order.
    pub fn id_for(index: usize) -> String {
        format!("n{index:03}")
    }
}

// ─────────────────────────────────────────────
// Edge
// ─────────────────────────────────────────────

/// An undirected edge, stored with its endpoints in generation order
/// (source index < target index). No parallel edges exist: the identifier
/// is derived from the endpoint pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// `"{source}-{target}"`, unique per endpoint pair.
    pub id: String,
    pub source: String,
    pub target: String,
    /// Weight in [0, 1], drifted by the updater between steps.
    pub weight: f64,
    /// True iff both endpoints are prior nodes. Immutable.
    pub is_prior: bool,
}

impl Edge {
    /// Identifier derived from an endpoint pair.
    pub fn id_for(source: &str, target: &str) -> String {
        format!("{source}-{target}")
    }

    /// The endpoint opposite `node_id`, or `None` if the edge is not
    /// incident to it.
    pub fn other_end(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }
}

// ─────────────────────────────────────────────
// Graph
// ─────────────────────────────────────────────

/// Ordered node and edge sequences. Order is generation order and is never
/// re-sorted; every traversal that must be deterministic iterates these
/// sequences directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Node lookup by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Snapshot of every edge weight, keyed by edge id.
    pub fn weight_snapshot(&self) -> BTreeMap<String, f64> {
        self.edges
            .iter()
            .map(|e| (e.id.clone(), e.weight))
            .collect()
    }
}

/// Per-node context values in [0, 1], one entry per node for the whole run.
///
/// A `BTreeMap` keyed by the zero-padded node id gives a fixed iteration
/// order identical to generation order, which the context updater relies on.
pub type ContextVector = BTreeMap<String, f64>;

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
