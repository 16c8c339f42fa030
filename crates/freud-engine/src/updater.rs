//! Between-step drift of edge weights and context values.
//!
//! Weight drift is stochastic and draws from a stream seeded per step
//! (`seed + step + 1`), so any step's update is replayable without
//! re-running earlier steps. Context drift is deliberately RNG-free: a
//! bounded periodic perturbation keyed on `(step, entry index)`, keeping
//! the two drift channels decoupled.

use std::collections::BTreeMap;

use freud_graph::{clamp01, round3, ContextVector, DetRng, Graph, SimParams};

/// Scale of the non-prior drift push on edge weights.
const NOVELTY_PUSH_SCALE: f64 = 0.05;

/// Half-width of the symmetric stochastic term on edge weights.
const WEIGHT_JITTER: f64 = 0.02;

/// Amplitude of the periodic context perturbation.
const CONTEXT_WAVE: f64 = 0.005;

/// Scale of the drift-bias term on context values.
const CONTEXT_PUSH_SCALE: f64 = 0.01;

/// Produce the next step's graph: same nodes, same edges, drifted weights.
///
/// Each edge pulls toward the mean activation of its endpoints at the
/// learning rate, gets a drift-bias push iff it is not a prior edge, and
/// one fresh draw of symmetric jitter. The result is clamped to [0, 1]
/// and rounded to three decimals. Consumes exactly one draw per edge, in
/// edge order.
pub fn drift_weights(
    graph: &Graph,
    scores: &BTreeMap<String, f64>,
    params: &SimParams,
    rng: &mut DetRng,
) -> Graph {
    let score_of = |id: &str| scores.get(id).copied().unwrap_or(0.0);
    let lr = params.weight_learning_rate;

    let edges = graph
        .edges
        .iter()
        .map(|edge| {
            let mean_activation = (score_of(&edge.source) + score_of(&edge.target)) / 2.0;
            let novelty_push = if edge.is_prior { 0.0 } else { params.drift_bias };
            let jitter = (rng.next_f64() - 0.5) * WEIGHT_JITTER;
            let weight = round3(clamp01(
                edge.weight * (1.0 - lr)
                    + mean_activation * lr
                    + novelty_push * NOVELTY_PUSH_SCALE
                    + jitter,
            ));
            freud_graph::Edge {
                weight,
                ..edge.clone()
            }
        })
        .collect();

    Graph {
        nodes: graph.nodes.clone(),
        edges,
    }
}

/// Produce the next step's context vector.
///
/// Entry `index` (in the fixed iteration order of the context keys) moves
/// by `sin((step+1) * (index+1)) * 0.005 + driftBias * 0.01`, clamped and
/// rounded. No RNG involved.
pub fn drift_context(context: &ContextVector, step: usize, drift_bias: f64) -> ContextVector {
    context
        .iter()
        .enumerate()
        .map(|(index, (id, &value))| {
            let wave = (((step + 1) * (index + 1)) as f64).sin() * CONTEXT_WAVE;
            let next = round3(clamp01(value + wave + drift_bias * CONTEXT_PUSH_SCALE));
            (id.clone(), next)
        })
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
