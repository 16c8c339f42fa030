//! # freud-graph
//!
//! Deterministic substrate for the freud simulation engine.
//!
//! Provides the seeded random stream, the validated parameter record, the
//! node/edge/context data model, and the synthetic graph generator:
//! - [`rng::DetRng`]          — pure seeded stream, one avalanche hash per draw
//! - [`params::SimParams`]    — the eleven-field parameter record + validation
//! - [`model::Graph`]         — ordered nodes/edges, weights in [0,1]
//! - [`generator::generate`]  — (seed, shape) → graph + context vector

pub mod error;
pub mod generator;
pub mod model;
pub mod params;
pub mod rng;

pub use error::ParamError;
pub use generator::generate;
pub use model::{clamp01, round3, ContextVector, Edge, Graph, Node};
pub use params::SimParams;
pub use rng::DetRng;
