//! Simulator facade
//!
//! Single entry point: run the progression, assess it, and hand back one
//! outcome value.
//!
//! # Example
//!
//! ```rust
//! use fiscal_simulator_core_rs::{EconomicSimulator, SimulationConfig, SimulationError};
//!
//! let config = SimulationConfig {
//!     initial_debt: 10.0,
//!     simulation_years: 20,
//!     random_seed: Some(12345),
//!     ..Default::default()
//! };
//!
//! let mut simulator = EconomicSimulator::new(config).unwrap();
//! assert_eq!(simulator.results().unwrap_err(), SimulationError::ResultsNotGenerated);
//!
//! simulator.simulate().unwrap();
//! assert_eq!(simulator.results().unwrap().len(), 20);
//! println!("{}", simulator.assessment().unwrap());
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::{assess, HealthAssessment, InitialConditions};
use crate::models::event::EventLog;
use crate::models::snapshot::YearlySnapshot;
use crate::orchestrator::{trajectory_fingerprint, Orchestrator, SimulationConfig, SimulationError};

/// Everything a finished run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub trajectory: Vec<YearlySnapshot>,
    pub assessment: HealthAssessment,
    pub event_log: EventLog,
    /// SHA-256 of the trajectory
    pub fingerprint: String,
    /// Seed that drove the event generator (None when events are disabled)
    pub seed: Option<u64>,
}

/// Runs one configured simulation and keeps its results
pub struct EconomicSimulator {
    config: SimulationConfig,
    outcome: Option<SimulationOutcome>,
}

impl EconomicSimulator {
    /// Validate `config` and prepare a simulator
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            config,
            outcome: None,
        })
    }

    /// Run the progression and the assessment
    ///
    /// Calling this again reruns the simulation with a fresh generator.
    pub fn simulate(&mut self) -> Result<&mut Self, SimulationError> {
        let mut orchestrator = Orchestrator::new(self.config.clone())?;
        orchestrator.run_to_completion()?;
        let seed = orchestrator.seed();
        let (trajectory, event_log) = orchestrator.into_parts();

        let assessment = assess(&trajectory, InitialConditions::from_config(&self.config))?;
        let fingerprint = trajectory_fingerprint(&trajectory)?;

        info!(
            score = assessment.metrics.score,
            overall = %assessment.overall.rating,
            fingerprint = %fingerprint,
            "assessment complete"
        );

        self.outcome = Some(SimulationOutcome {
            trajectory,
            assessment,
            event_log,
            fingerprint,
            seed,
        });
        Ok(self)
    }

    /// Yearly snapshots of the last run
    pub fn results(&self) -> Result<&[YearlySnapshot], SimulationError> {
        self.outcome
            .as_ref()
            .map(|o| o.trajectory.as_slice())
            .ok_or(SimulationError::ResultsNotGenerated)
    }

    /// Assessment of the last run
    pub fn assessment(&self) -> Result<&HealthAssessment, SimulationError> {
        self.outcome
            .as_ref()
            .map(|o| &o.assessment)
            .ok_or(SimulationError::AssessmentNotGenerated)
    }

    /// Lifecycle log of the last run
    pub fn event_log(&self) -> Result<&EventLog, SimulationError> {
        self.outcome
            .as_ref()
            .map(|o| &o.event_log)
            .ok_or(SimulationError::ResultsNotGenerated)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Consume the simulator, returning the last run's outcome
    pub fn into_outcome(self) -> Result<SimulationOutcome, SimulationError> {
        self.outcome.ok_or(SimulationError::ResultsNotGenerated)
    }
}

/// Run and assess a simulation in one call
pub fn simulate(config: SimulationConfig) -> Result<SimulationOutcome, SimulationError> {
    let mut simulator = EconomicSimulator::new(config)?;
    simulator.simulate()?;
    simulator.into_outcome()
}
