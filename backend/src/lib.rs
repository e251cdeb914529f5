//! Fiscal Simulator Core - Rust Engine
//!
//! Educational fiscal simulation: projects a nation's debt, GDP, population
//! and price level year by year, injects stochastic macroeconomic events, and
//! rates the resulting trajectory.
//!
//! # Architecture
//!
//! - **core**: Year index and calendar tracking
//! - **rng**: Deterministic random number generation
//! - **events**: Event values, profiles, the stochastic generator, scenarios
//! - **models**: Economic state, yearly snapshots, lifecycle log
//! - **orchestrator**: Configuration and the year-by-year progression loop
//! - **assessment**: Ratings, scores and the text report
//! - **simulator**: One-call entry point
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic given a seed (seeded RNG)
//! 2. Debt-to-GDP ratio is never negative
//! 3. Effective rates never drop below their floors
//!
//! # Example
//!
//! ```rust
//! use fiscal_simulator_core_rs::{simulate, SimulationConfig};
//!
//! let outcome = simulate(SimulationConfig {
//!     simulation_years: 30,
//!     random_seed: Some(12345),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert_eq!(outcome.trajectory.len(), 30);
//! assert!(outcome.assessment.metrics.score <= 20);
//! ```

// Module declarations
pub mod assessment;
pub mod core;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod simulator;

// Re-exports for convenience
pub use assessment::{assess, HealthAssessment, InitialConditions, OverallRating, ScoreBreakdown};
pub use core::time::SimulationClock;
pub use events::{EconomicEvent, EventGenerator, EventImpact, EventKind, EventSchedule, ScenarioEvent, ScheduledEvent};
pub use models::{
    event::{Event, EventLog},
    snapshot::YearlySnapshot,
    state::EconomicState,
};
pub use orchestrator::{
    calculate_progression, compute_config_hash, trajectory_fingerprint, Orchestrator, SimulationConfig,
    SimulationError,
};
pub use rng::{RandomSource, RngManager};
pub use simulator::{simulate, EconomicSimulator, SimulationOutcome};
