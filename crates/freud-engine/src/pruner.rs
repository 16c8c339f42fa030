//! Rigidity-based pruning.

use std::collections::{BTreeMap, HashSet};

use freud_graph::Graph;

/// Result of one pruning pass.
///
/// `active` is the reporting/beam-seed set (score ≥ threshold); `kept` is
/// the reduced graph retained for reconstruction (score ≥ threshold × ρ,
/// a looser structural gate). With ρ ≤ 1 the active set is always a subset
/// of the kept nodes. All id lists are sorted lexicographically so the
/// runlog is stable.
#[derive(Debug, Clone)]
pub struct PruneOutcome {
    pub kept: Graph,
    pub active: Vec<String>,
    pub kept_nodes: Vec<String>,
    pub pruned_nodes: Vec<String>,
    pub pruned_edges: Vec<String>,
}

/// Filter nodes by score and edges by endpoint survival + weight.
///
/// An edge survives only if both endpoints are kept AND its weight clears
/// the rigidity floor; everything else lands in the pruned lists.
pub fn prune(
    graph: &Graph,
    scores: &BTreeMap<String, f64>,
    activation_threshold: f64,
    rigidity: f64,
) -> PruneOutcome {
    let node_gate = activation_threshold * rigidity;
    let score_of = |id: &str| scores.get(id).copied().unwrap_or(0.0);

    let mut active = Vec::new();
    let mut kept_nodes = Vec::new();
    let mut pruned_nodes = Vec::new();
    for node in &graph.nodes {
        let score = score_of(&node.id);
        if score >= activation_threshold {
            active.push(node.id.clone());
        }
        if score >= node_gate {
            kept_nodes.push(node.id.clone());
        } else {
            pruned_nodes.push(node.id.clone());
        }
    }

    let kept_set: HashSet<&str> = kept_nodes.iter().map(String::as_str).collect();
    let mut pruned_edges = Vec::new();
    let kept_edges: Vec<_> = graph
        .edges
        .iter()
        .filter(|edge| {
            let keep = kept_set.contains(edge.source.as_str())
                && kept_set.contains(edge.target.as_str())
                && edge.weight >= rigidity;
            if !keep {
                pruned_edges.push(edge.id.clone());
            }
            keep
        })
        .cloned()
        .collect();

    let kept = Graph {
        nodes: graph
            .nodes
            .iter()
            .filter(|n| kept_set.contains(n.id.as_str()))
            .cloned()
            .collect(),
        edges: kept_edges,
    };

    // Node iteration already follows generation order; sorting makes the
    // lexicographic contract explicit regardless of id scheme.
    active.sort();
    kept_nodes.sort();
    pruned_nodes.sort();
    pruned_edges.sort();

    PruneOutcome {
        kept,
        active,
        kept_nodes,
        pruned_nodes,
        pruned_edges,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
