//! Per-node activation scoring.

use std::collections::{BTreeMap, HashMap};

use freud_graph::{round3, ContextVector, Graph};

/// Flat bonus applied to nodes in the novel band.
const NOVELTY_BONUS: f64 = 0.08;

/// Steepness of the squashing function around the 0.5 midpoint.
const SIGMOID_GAIN: f64 = 4.0;

#[inline]
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Compute the activation score of every node.
///
/// `degreeScore` is the mean weight of incident edges (0 for an isolated
/// node), blended with the node's context value by `context_blend`; novel
/// nodes get a flat bonus on top. The raw blend is squashed through a
/// sigmoid centred on 0.5 so scores land in (0, 1), then rounded to three
/// decimals.
///
/// Stateless and order-independent: a pure map over the node sequence.
pub fn score_activations(
    graph: &Graph,
    context: &ContextVector,
    context_blend: f64,
) -> BTreeMap<String, f64> {
    // Incident weight sums, one pass over the edges.
    let mut incident: HashMap<&str, (f64, usize)> = HashMap::new();
    for edge in &graph.edges {
        let s = incident.entry(edge.source.as_str()).or_default();
        s.0 += edge.weight;
        s.1 += 1;
        let t = incident.entry(edge.target.as_str()).or_default();
        t.0 += edge.weight;
        t.1 += 1;
    }

    graph
        .nodes
        .iter()
        .map(|node| {
            let degree_score = match incident.get(node.id.as_str()) {
                Some((sum, count)) if *count > 0 => sum / *count as f64,
                _ => 0.0,
            };
            let context_score = context.get(&node.id).copied().unwrap_or(0.0);
            let novelty = if node.is_novel { NOVELTY_BONUS } else { 0.0 };

            let raw = context_blend * context_score
                + (1.0 - context_blend) * degree_score
                + novelty;
            let score = round3(sigmoid((raw - 0.5) * SIGMOID_GAIN));
            (node.id.clone(), score)
        })
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use freud_graph::{Edge, Node};

    // ── helpers ──────────────────────────────────────────

    fn node(id: &str, novel: bool) -> Node {
        Node {
            id: id.to_string(),
            is_prior: !novel,
            is_novel: novel,
        }
    }

    fn edge(a: &str, b: &str, weight: f64) -> Edge {
        Edge {
            id: Edge::id_for(a, b),
            source: a.to_string(),
            target: b.to_string(),
            weight,
            is_prior: false,
        }
    }

    fn ctx(entries: &[(&str, f64)]) -> ContextVector {
        entries
            .iter()
            .map(|(id, v)| (id.to_string(), *v))
            .collect()
    }

    // ── scoring ──────────────────────────────────────────

    #[test]
    fn scores_stay_in_open_unit_interval() {
        let graph = Graph {
            nodes: vec![node("n000", false), node("n001", true)],
            edges: vec![edge("n000", "n001", 0.9)],
        };
        let scores =
            score_activations(&graph, &ctx(&[("n000", 0.5), ("n001", 0.8)]), 0.5);
        for (id, &s) in &scores {
            assert!(s > 0.0 && s < 1.0, "{id} scored {s}");
        }
    }

    #[test]
    fn isolated_node_falls_back_to_context_only() {
        let graph = Graph {
            nodes: vec![node("n000", false)],
            edges: vec![],
        };
        let scores = score_activations(&graph, &ctx(&[("n000", 0.5)]), 1.0);
        // raw = 1.0 * 0.5 + 0 + 0 = 0.5 → sigmoid(0) = 0.5
        assert_eq!(scores["n000"], 0.5);
    }

    #[test]
    fn blend_extremes_select_one_signal() {
        let graph = Graph {
            nodes: vec![node("n000", false), node("n001", false)],
            edges: vec![edge("n000", "n001", 1.0)],
        };
        let context = ctx(&[("n000", 0.0), ("n001", 0.0)]);

        // blend = 1: pure context (0.0) → raw = 0 → sigmoid(-2)
        let ctx_only = score_activations(&graph, &context, 1.0);
        assert_eq!(ctx_only["n000"], round3(sigmoid(-2.0)));

        // blend = 0: pure structure (mean weight 1.0) → sigmoid(2)
        let structure_only = score_activations(&graph, &context, 0.0);
        assert_eq!(structure_only["n000"], round3(sigmoid(2.0)));
    }

    #[test]
    fn novelty_bonus_lifts_novel_nodes() {
        let graph = Graph {
            nodes: vec![node("n000", false), node("n001", true)],
            edges: vec![],
        };
        let context = ctx(&[("n000", 0.5), ("n001", 0.5)]);
        let scores = score_activations(&graph, &context, 1.0);
        assert!(scores["n001"] > scores["n000"]);
    }

    #[test]
    fn degree_score_is_mean_not_sum() {
        // Hub with two incident weights 0.2 and 0.8 → mean 0.5, same as a
        // node with a single 0.5 edge.
        let graph = Graph {
            nodes: vec![
                node("n000", false),
                node("n001", false),
                node("n002", false),
                node("n003", false),
                node("n004", false),
            ],
            edges: vec![
                edge("n000", "n001", 0.2),
                edge("n000", "n002", 0.8),
                edge("n003", "n004", 0.5),
            ],
        };
        let context = ctx(&[
            ("n000", 0.0),
            ("n001", 0.0),
            ("n002", 0.0),
            ("n003", 0.0),
            ("n004", 0.0),
        ]);
        let scores = score_activations(&graph, &context, 0.0);
        assert_eq!(scores["n000"], scores["n003"]);
    }

    #[test]
    fn scoring_does_not_depend_on_edge_order() {
        let nodes = vec![node("n000", false), node("n001", false), node("n002", false)];
        let e1 = edge("n000", "n001", 0.3);
        let e2 = edge("n001", "n002", 0.9);
        let context = ctx(&[("n000", 0.4), ("n001", 0.4), ("n002", 0.4)]);

        let forward = Graph {
            nodes: nodes.clone(),
            edges: vec![e1.clone(), e2.clone()],
        };
        let backward = Graph {
            nodes,
            edges: vec![e2, e1],
        };
        assert_eq!(
            score_activations(&forward, &context, 0.5),
            score_activations(&backward, &context, 0.5)
        );
    }
}
