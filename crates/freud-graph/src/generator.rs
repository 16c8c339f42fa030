//! Synthetic graph generation.
//!
//! A pure function of `(seed, nodeCount, edgeDensity, overlapPercent)`.
//! Draws are consumed in one fixed traversal order (nodes, then unordered
//! pairs `(i < j)`, then context values in node order) so the same inputs
//! always reproduce the same graph bit for bit.

use crate::model::{round3, ContextVector, Edge, Graph, Node};
use crate::params::SimParams;
use crate::rng::DetRng;

/// Generate the initial graph and context vector for a run.
///
/// Population layout: the first `priorCount` nodes are prior, and the last
/// `overlapCount` of those double as novel, giving a deliberate overlap band
/// between the two populations. `priorCount` is at least `overlapCount + 1`
/// so at least one node is prior-only.
pub fn generate(params: &SimParams) -> (Graph, ContextVector) {
    let n = params.node_count;
    let overlap_count = ((n as f64 * params.overlap_percent).floor() as usize).max(1);
    let prior_count = ((n as f64 * 0.6).floor() as usize).max(overlap_count + 1);

    let mut rng = DetRng::new(params.seed);

    // Nodes, in index order. Membership flags are a function of the index
    // alone; node generation consumes no draws.
    let nodes: Vec<Node> = (0..n)
        .map(|i| Node {
            id: Node::id_for(i),
            is_prior: i < prior_count,
            is_novel: i + overlap_count >= prior_count,
        })
        .collect();

    // One draw per unordered pair. The pair is connected iff the draw falls
    // under the density, and the same draw seeds the edge weight.
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let draw = rng.next_f64();
            if draw <= params.edge_density {
                let source = &nodes[i];
                let target = &nodes[j];
                edges.push(Edge {
                    id: Edge::id_for(&source.id, &target.id),
                    source: source.id.clone(),
                    target: target.id.clone(),
                    weight: round3(0.2 + draw * 0.8),
                    is_prior: source.is_prior && target.is_prior,
                });
            }
        }
    }

    // Context values, one draw per node in node order.
    let context: ContextVector = nodes
        .iter()
        .map(|node| {
            let base = if node.is_prior { 0.45 } else { 0.35 };
            let novelty = if node.is_novel { 0.20 } else { 0.0 };
            let value = round3(base + novelty + rng.next_f64() * 0.25);
            (node.id.clone(), value)
        })
        .collect();

    (Graph { nodes, edges }, context)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seed: u32, node_count: usize) -> SimParams {
        SimParams {
            seed,
            node_count,
            ..Default::default()
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let p = params(42, 24);
        let (g1, c1) = generate(&p);
        let (g2, c2) = generate(&p);
        assert_eq!(g1, g2);
        assert_eq!(c1, c2);
    }

    #[test]
    fn different_seeds_differ() {
        let (g1, _) = generate(&params(10, 24));
        let (g2, _) = generate(&params(11, 24));
        assert_ne!(g1, g2);
    }

    #[test]
    fn node_count_and_id_order() {
        let (graph, context) = generate(&params(1, 30));
        assert_eq!(graph.nodes.len(), 30);
        assert_eq!(context.len(), 30);
        for (i, node) in graph.nodes.iter().enumerate() {
            assert_eq!(node.id, Node::id_for(i));
        }
    }

    #[test]
    fn overlap_band_sits_at_prior_boundary() {
        // n = 20, overlap = floor(20 * 0.3) = 6, prior = floor(20 * 0.6) = 12.
        let (graph, _) = generate(&params(5, 20));
        let priors: Vec<bool> = graph.nodes.iter().map(|n| n.is_prior).collect();
        let novels: Vec<bool> = graph.nodes.iter().map(|n| n.is_novel).collect();

        assert_eq!(priors.iter().filter(|&&p| p).count(), 12);
        // Novel band starts at index prior - overlap = 6 and runs to the end.
        for (i, &novel) in novels.iter().enumerate() {
            assert_eq!(novel, i >= 6, "index {i}");
        }
        // Overlap band: indices 6..12 are both prior and novel.
        for i in 6..12 {
            assert!(priors[i] && novels[i]);
        }
    }

    #[test]
    fn edges_respect_pair_order_and_uniqueness() {
        let (graph, _) = generate(&params(3, 24));
        let mut seen = std::collections::HashSet::new();
        for edge in &graph.edges {
            assert!(edge.source < edge.target, "endpoints out of order: {}", edge.id);
            assert!(seen.insert(edge.id.clone()), "duplicate edge id {}", edge.id);
            assert!(graph.contains_node(&edge.source));
            assert!(graph.contains_node(&edge.target));
        }
    }

    #[test]
    fn edge_count_tracks_density() {
        let p = SimParams {
            seed: 7,
            node_count: 40,
            edge_density: 0.25,
            ..Default::default()
        };
        let (graph, _) = generate(&p);
        let pairs = 40 * 39 / 2;
        let expected = pairs as f64 * 0.25;
        let got = graph.edges.len() as f64;
        assert!(
            (got - expected).abs() < expected * 0.5,
            "edge count {got} far from expectation {expected}"
        );
    }

    #[test]
    fn weights_and_context_stay_in_range() {
        let (graph, context) = generate(&params(9, 24));
        for edge in &graph.edges {
            assert!((0.2..=1.0).contains(&edge.weight), "weight {}", edge.weight);
        }
        for (id, &v) in &context {
            assert!((0.0..=1.0).contains(&v), "context {id} = {v}");
        }
    }

    #[test]
    fn prior_edges_need_both_prior_endpoints() {
        let (graph, _) = generate(&params(13, 24));
        for edge in &graph.edges {
            let s = graph.node(&edge.source).unwrap();
            let t = graph.node(&edge.target).unwrap();
            assert_eq!(edge.is_prior, s.is_prior && t.is_prior, "{}", edge.id);
        }
    }

    #[test]
    fn single_node_graph_has_no_edges() {
        let (graph, context) = generate(&params(42, 1));
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        assert_eq!(context.len(), 1);
        // With n = 1: overlap = 1, prior = max(2, 0) = 2, so the lone node
        // is prior and below the novel band (0 < prior - overlap = 1).
        assert!(graph.nodes[0].is_prior);
        assert!(!graph.nodes[0].is_novel);
    }
}
