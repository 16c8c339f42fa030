//! # freud-cli
//!
//! Minimal consumer of the engine entry points: resolves a named preset or
//! a JSON parameter file, runs the simulation, and optionally exports the
//! runlog. All rendering/visualization concerns stay out of this crate;
//! it exists so the engine's external interface has one concrete caller.

pub mod export;
pub mod presets;
