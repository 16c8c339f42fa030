//! Bounded-width best-first path reconstruction over the pruned graph.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};

use ordered_float::OrderedFloat;

use freud_graph::{round3, Edge, Graph};
use freud_runlog::BeamCandidate;

/// Expansion rounds per step. Fixed: reconstruction depth is independent of
/// the run's recursion depth.
const EXPANSION_ROUNDS: usize = 3;

/// Seeds used when the active set is empty.
const FALLBACK_SEEDS: usize = 3;

/// Reconstruct the top `beam_width` paths through the pruned graph.
///
/// Seeds are the active nodes (in graph order), or the first few graph
/// nodes when no node cleared the activation threshold. Each round every
/// candidate extends along every incident edge to a neighbor not already
/// on its path; the pooled expansions are ranked by score (ties broken by
/// the concatenated node-path string) and cut to `beam_width`. A round
/// with no expansions ends the search early, keeping the current beam.
///
/// Deterministic: identical `(graph, scores, active, beam_width)` always
/// yield the same candidates in the same order.
pub fn reconstruct(
    graph: &Graph,
    scores: &BTreeMap<String, f64>,
    active: &[String],
    beam_width: usize,
) -> Vec<BeamCandidate> {
    let score_of = |id: &str| scores.get(id).copied().unwrap_or(0.0);

    // Incidence lists, scoped to this step.
    let mut adjacency: HashMap<&str, Vec<&Edge>> = HashMap::new();
    for edge in &graph.edges {
        adjacency.entry(edge.source.as_str()).or_default().push(edge);
        adjacency.entry(edge.target.as_str()).or_default().push(edge);
    }

    let active_set: HashSet<&str> = active.iter().map(String::as_str).collect();
    let mut beam: Vec<BeamCandidate> = if active_set.is_empty() {
        graph
            .nodes
            .iter()
            .take(FALLBACK_SEEDS.min(graph.nodes.len()))
            .map(|n| BeamCandidate::seed(&n.id, score_of(&n.id)))
            .collect()
    } else {
        graph
            .nodes
            .iter()
            .filter(|n| active_set.contains(n.id.as_str()))
            .map(|n| BeamCandidate::seed(&n.id, score_of(&n.id)))
            .collect()
    };

    for _ in 0..EXPANSION_ROUNDS {
        let mut pool: Vec<BeamCandidate> = Vec::new();
        for candidate in &beam {
            let Some(incident) = adjacency.get(candidate.head()) else {
                continue;
            };
            for edge in incident {
                let Some(neighbor) = edge.other_end(candidate.head()) else {
                    continue;
                };
                if candidate.visits(neighbor) {
                    continue;
                }
                let mut extended = candidate.clone();
                extended.node_path.push(neighbor.to_string());
                extended.edge_path.push(edge.id.clone());
                extended.score =
                    round3(candidate.score + score_of(neighbor) + edge.weight);
                pool.push(extended);
            }
        }

        if pool.is_empty() {
            break;
        }
        pool.sort_by_cached_key(|c| (Reverse(OrderedFloat(c.score)), c.path_key()));
        pool.truncate(beam_width);
        beam = pool;
    }

    beam
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
