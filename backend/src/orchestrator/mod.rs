//! Orchestrator - main simulation loop
//!
//! Drives the year-by-year progression, owns the run configuration and
//! fingerprints finished runs.
//!
//! See `engine.rs` for full implementation.

pub mod config;
pub mod engine;
pub mod fingerprint;

// Re-export main types for convenience
pub use config::{SimulationConfig, DEFAULT_DEFICIT, DEFAULT_POPULATION, DEFAULT_POPULATION_GROWTH_RATE};
pub use engine::{calculate_progression, Orchestrator, SimulationError};
pub use fingerprint::{compute_config_hash, trajectory_fingerprint};
