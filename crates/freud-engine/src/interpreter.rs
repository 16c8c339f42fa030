//! Step summarization: top nodes, top edges, centroid.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use freud_graph::{round3, Graph};
use freud_runlog::{BeamCandidate, InterpretationSummary, ScoreEntry};

/// Entries reported in each top list.
const TOP_N: usize = 5;

/// Summarize the pruned graph after reconstruction. Pure: no input is
/// mutated.
///
/// Top nodes rank kept nodes by activation score; top edges rank edges by
/// the summed score of every surviving candidate that traverses them. Both
/// break ties by id ascending. The centroid maps every kept node to its
/// current score.
pub fn interpret(
    kept: &Graph,
    scores: &BTreeMap<String, f64>,
    beam: &[BeamCandidate],
) -> InterpretationSummary {
    let score_of = |id: &str| scores.get(id).copied().unwrap_or(0.0);

    let mut top_nodes: Vec<ScoreEntry> = kept
        .nodes
        .iter()
        .map(|n| ScoreEntry {
            id: n.id.clone(),
            score: score_of(&n.id),
        })
        .collect();
    top_nodes.sort_by_cached_key(|e| (Reverse(OrderedFloat(e.score)), e.id.clone()));
    top_nodes.truncate(TOP_N);

    // Beam contribution per edge: each candidate adds its own cumulative
    // score to every edge on its path.
    let mut contribution: BTreeMap<&str, f64> = BTreeMap::new();
    for candidate in beam {
        for edge_id in &candidate.edge_path {
            *contribution.entry(edge_id.as_str()).or_default() += candidate.score;
        }
    }
    let mut top_edges: Vec<ScoreEntry> = contribution
        .into_iter()
        .map(|(id, total)| ScoreEntry {
            id: id.to_string(),
            score: round3(total),
        })
        .collect();
    top_edges.sort_by_cached_key(|e| (Reverse(OrderedFloat(e.score)), e.id.clone()));
    top_edges.truncate(TOP_N);

    let centroid: BTreeMap<String, f64> = kept
        .nodes
        .iter()
        .map(|n| (n.id.clone(), score_of(&n.id)))
        .collect();

    InterpretationSummary {
        top_nodes,
        top_edges,
        centroid,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
