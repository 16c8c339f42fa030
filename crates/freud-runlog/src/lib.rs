//! # freud-runlog
//!
//! The replayable trace of a simulation run and its canonical hash.
//!
//! A [`RunLog`] is a pure value: it carries no timestamps from the wall
//! clock, no object identity, and no references back to engine state, so
//! two runs with the same parameters produce bit-identical logs. The hash
//! side ([`canon`], [`hash`]) turns a log into an 8-hex-digit digest that
//! depends on content only: mapping key order is normalized away.

pub mod canon;
pub mod error;
pub mod hash;
pub mod model;

pub use canon::canonical_string;
pub use error::RunlogError;
pub use hash::{fnv1a_32, runlog_hash};
pub use model::{
    BeamCandidate, InterpretationSummary, RunLog, ScoreEntry, StepRunLog, MODEL_NAME,
    RUNLOG_TIMESTAMP,
};
