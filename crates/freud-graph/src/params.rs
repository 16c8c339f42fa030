use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// The eleven-field parameter record accepted by the engine entry point.
///
/// Field names serialize in camelCase because the runlog is the de facto
/// persisted schema and consumers round-trip it through JSON.
///
/// Ranges are invariants checked once by [`SimParams::validate`]; the engine
/// itself assumes in-range values everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimParams {
    /// Base seed for every derived random stream.
    pub seed: u32,
    /// Number of nodes to generate (≥ 1).
    pub node_count: usize,
    /// Probability that an unordered node pair carries an edge, in (0, 1].
    pub edge_density: f64,
    /// Fraction of nodes in the prior/novel overlap band, in [0, 1].
    pub overlap_percent: f64,
    /// Number of recursive simulation steps (≥ 1).
    pub recursion_depth: usize,
    /// Pruning strictness ρ, in (0, 1].
    pub rigidity: f64,
    /// Candidate paths retained per beam expansion round (≥ 1).
    pub beam_width: usize,
    /// Activation cutoff for the active set, in (0, 1).
    pub activation_threshold: f64,
    /// Context vs. structure blend in the activation score, in [0, 1].
    pub context_blend: f64,
    /// Learning rate pulling edge weights toward endpoint activation, in [0, 1].
    pub weight_learning_rate: f64,
    /// Additive drift favoring non-prior edges and context growth, in [0, 1].
    pub drift_bias: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            seed: 42,
            node_count: 24,
            edge_density: 0.22,
            overlap_percent: 0.3,
            recursion_depth: 6,
            rigidity: 0.3,
            beam_width: 4,
            activation_threshold: 0.5,
            context_blend: 0.55,
            weight_learning_rate: 0.2,
            drift_bias: 0.08,
        }
    }
}

impl SimParams {
    /// Check every documented range. Returns the first violation found,
    /// naming the offending field.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.node_count < 1 {
            return Err(ParamError::out_of_range(
                "nodeCount",
                "an integer >= 1",
                self.node_count,
            ));
        }
        if !(self.edge_density > 0.0 && self.edge_density <= 1.0) {
            return Err(ParamError::out_of_range(
                "edgeDensity",
                "a value in (0, 1]",
                self.edge_density,
            ));
        }
        if !(0.0..=1.0).contains(&self.overlap_percent) {
            return Err(ParamError::out_of_range(
                "overlapPercent",
                "a value in [0, 1]",
                self.overlap_percent,
            ));
        }
        if self.recursion_depth < 1 {
            return Err(ParamError::out_of_range(
                "recursionDepth",
                "an integer >= 1",
                self.recursion_depth,
            ));
        }
        if !(self.rigidity > 0.0 && self.rigidity <= 1.0) {
            return Err(ParamError::out_of_range(
                "rigidity",
                "a value in (0, 1]",
                self.rigidity,
            ));
        }
        if self.beam_width < 1 {
            return Err(ParamError::out_of_range(
                "beamWidth",
                "an integer >= 1",
                self.beam_width,
            ));
        }
        if !(self.activation_threshold > 0.0 && self.activation_threshold < 1.0) {
            return Err(ParamError::out_of_range(
                "activationThreshold",
                "a value in (0, 1)",
                self.activation_threshold,
            ));
        }
        if !(0.0..=1.0).contains(&self.context_blend) {
            return Err(ParamError::out_of_range(
                "contextBlend",
                "a value in [0, 1]",
                self.context_blend,
            ));
        }
        if !(0.0..=1.0).contains(&self.weight_learning_rate) {
            return Err(ParamError::out_of_range(
                "weightLearningRate",
                "a value in [0, 1]",
                self.weight_learning_rate,
            ));
        }
        if !(0.0..=1.0).contains(&self.drift_bias) {
            return Err(ParamError::out_of_range(
                "driftBias",
                "a value in [0, 1]",
                self.drift_bias,
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
