//! The simulation loop and engine entry point.
//!
//! ## Step protocol
//!
//! ```text
//! Generate graph + context once from (seed, shape params), then per step:
//!   1  Score every node                  (context ⊕ structure blend)
//!   2  Prune by threshold × rigidity     (active / kept / pruned sets)
//!   3  Beam-reconstruct paths            (3 rounds, width = beamWidth)
//!   4  Interpret                         (top nodes, top edges, centroid)
//!   5  Delta vs. previous activations    (L2; 0.0 on step 0)
//!   6  Record the StepRunLog
//!   7  Drift weights + context           (skipped after the final step)
//! ```
//!
//! Each step replaces the graph and context with fresh values instead of
//! mutating shared state, so every recorded step is an independently
//! reproducible snapshot.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use freud_graph::{generate, round3, ContextVector, DetRng, Graph, ParamError, SimParams};
use freud_runlog::{runlog_hash, RunLog, RunlogError, StepRunLog};

use crate::beam::reconstruct;
use crate::delta::activation_delta;
use crate::interpreter::interpret;
use crate::pruner::prune;
use crate::scorer::score_activations;
use crate::updater::{drift_context, drift_weights};

// ─────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Params(#[from] ParamError),

    #[error(transparent)]
    Runlog(#[from] RunlogError),
}

// ─────────────────────────────────────────────
// Outcome / report
// ─────────────────────────────────────────────

/// Everything a run returns: the drifted graph and context after the last
/// step, and the complete trace.
#[derive(Debug, Clone)]
pub struct SimOutcome {
    pub final_graph: Graph,
    pub final_context: ContextVector,
    pub runlog: RunLog,
}

impl SimOutcome {
    /// Compact summary of the run, including its canonical hash.
    pub fn report(&self) -> Result<RunReport, RunlogError> {
        let last = self.runlog.steps.last();
        Ok(RunReport {
            steps: self.runlog.steps.len(),
            final_delta: last.map(|s| s.delta).unwrap_or(0.0),
            final_active: last.map(|s| s.active_nodes.len()).unwrap_or(0),
            hash: runlog_hash(&self.runlog)?,
        })
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub steps: usize,
    pub final_delta: f64,
    pub final_active: usize,
    pub hash: String,
}

// ─────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────

/// Run the full simulation for a parameter record.
///
/// Validates once at the boundary, then never fails: the engine performs
/// no I/O and handles its only degenerate case (an empty active set) by
/// reseeding the beam from the first graph nodes.
pub fn run_simulation(params: &SimParams) -> Result<SimOutcome, EngineError> {
    params.validate()?;

    let (mut graph, mut context) = generate(params);
    info!(
        seed = params.seed,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        depth = params.recursion_depth,
        "starting run"
    );

    let mut steps: Vec<StepRunLog> = Vec::with_capacity(params.recursion_depth);
    let mut previous_activation = None;

    for step in 0..params.recursion_depth {
        let activation = score_activations(&graph, &context, params.context_blend);
        let pruned = prune(
            &graph,
            &activation,
            params.activation_threshold,
            params.rigidity,
        );
        let beam = reconstruct(
            &pruned.kept,
            &activation,
            &pruned.active,
            params.beam_width,
        );
        let interpretation = interpret(&pruned.kept, &activation, &beam);
        let delta = match &previous_activation {
            Some(previous) => round3(activation_delta(previous, &activation)),
            None => 0.0,
        };

        debug!(
            step,
            active = pruned.active.len(),
            kept = pruned.kept_nodes.len(),
            beams = beam.len(),
            delta,
            "step complete"
        );

        steps.push(StepRunLog {
            step,
            seed: params.seed,
            params: params.clone(),
            active_nodes: pruned.active,
            kept_nodes: pruned.kept_nodes,
            pruned_nodes: pruned.pruned_nodes,
            pruned_edges: pruned.pruned_edges,
            beam,
            interpretation,
            activation: activation.clone(),
            edge_weights: graph.weight_snapshot(),
            delta,
        });

        // Drift runs between steps, never after the last one.
        if step + 1 < params.recursion_depth {
            let mut rng = DetRng::for_step(params.seed, step);
            graph = drift_weights(&graph, &activation, params, &mut rng);
            context = drift_context(&context, step, params.drift_bias);
        }
        previous_activation = Some(activation);
    }

    let runlog = RunLog::new(params.clone(), steps);
    info!(steps = runlog.steps.len(), "run complete");

    Ok(SimOutcome {
        final_graph: graph,
        final_context: context,
        runlog,
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
