//! Orchestrator Engine
//!
//! Main simulation loop integrating all components:
//! - Event generation (seeded stochastic process + scheduled scenarios)
//! - Rate folding (baseline rates plus event deltas, floored)
//! - State progression (population, GDP, debt, price level)
//! - Event logging (complete lifecycle history)
//!
//! # Architecture
//!
//! ```text
//! For each year i:
//! 1. Start from baseline rates (floored)
//! 2. Fetch year i's events; fold each event's deltas, re-flooring after each
//! 3. Advance population
//! 4. Advance GDP (real growth + half of population growth, then inflation)
//! 5. Interest on prior year-end debt
//! 6. Principal change = deficit(i) + event deficit impact
//! 7. Update debt
//! 8. Update price level, real debt
//! 9. Inflation adjustment
//! 10. Debt-to-GDP ratio
//! 11. Debt per capita
//! 12. Record snapshot
//! ```
//!
//! Only debt, GDP, population and the price level carry over between years.
//!
//! # Example
//!
//! ```rust
//! use fiscal_simulator_core_rs::{Orchestrator, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     initial_debt: 10.0,
//!     simulation_years: 5,
//!     random_events_enabled: true,
//!     random_seed: Some(12345),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = Orchestrator::new(config).unwrap();
//! let first = orchestrator.step().unwrap();
//! assert_eq!(first.year_index, 0);
//!
//! let trajectory = orchestrator.run_to_completion().unwrap();
//! assert_eq!(trajectory.len(), 5);
//! ```

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::core::time::SimulationClock;
use crate::events::generator::EventGenerator;
use crate::models::event::{Event, EventLog};
use crate::models::snapshot::YearlySnapshot;
use crate::models::state::{EconomicState, YearRates};
use crate::orchestrator::config::SimulationConfig;
use crate::rng::RngManager;

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Event generation requested for a year not after the previous one
    #[error("Events for year {requested} requested after year {last}; years must increase")]
    YearOutOfOrder { requested: usize, last: usize },

    /// Stepping past the configured horizon
    #[error("Simulation horizon of {horizon} years already completed")]
    HorizonExhausted { horizon: usize },

    /// Assessment requested for an empty trajectory
    #[error("Cannot assess an empty trajectory")]
    EmptyTrajectory,

    /// Results read before the simulation ran
    #[error("Results not yet generated")]
    ResultsNotGenerated,

    /// Assessment read before the simulation ran
    #[error("Assessment not yet generated")]
    AssessmentNotGenerated,

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Year-by-year progression engine
///
/// Owns the running economic state and the run's event generator. Each run
/// builds its own generator, so independent orchestrators share nothing.
pub struct Orchestrator {
    config: SimulationConfig,
    clock: SimulationClock,
    state: EconomicState,
    /// None when random events are disabled
    generator: Option<EventGenerator<RngManager>>,
    /// Seed driving the generator (drawn from entropy when not configured)
    seed: Option<u64>,
    trajectory: Vec<YearlySnapshot>,
    event_log: EventLog,
}

impl Orchestrator {
    /// Create new orchestrator from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Orchestrator)` - Successfully initialized orchestrator
    /// * `Err(SimulationError)` - Configuration validation failed
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let clock = SimulationClock::new(config.resolved_start_year(), config.simulation_years);
        let state = EconomicState::new(config.initial_debt, config.initial_gdp, config.population());

        let (generator, seed) = if config.random_events_enabled {
            let (rng, seed) = match config.random_seed {
                Some(seed) => (RngManager::new(seed), seed),
                None => {
                    let (rng, seed) = RngManager::from_entropy();
                    debug!(seed, "no seed configured, drew one from entropy");
                    (rng, seed)
                }
            };
            let generator = EventGenerator::new(rng).with_scenarios(config.scenario_events.clone());
            (Some(generator), Some(seed))
        } else {
            (None, None)
        };

        info!(
            years = config.simulation_years,
            start_year = clock.start_year(),
            events_enabled = config.random_events_enabled,
            seed = ?seed,
            "simulation initialized"
        );

        Ok(Self {
            config,
            clock,
            state,
            generator,
            seed,
            trajectory: Vec::new(),
            event_log: EventLog::new(),
        })
    }

    /// Baseline rates for any year, floored
    fn baseline_rates(&self) -> YearRates {
        YearRates {
            interest_rate: self.config.average_interest_rate,
            inflation_rate: self.config.inflation_rate,
            gdp_growth_rate: self.config.base_gdp_growth_rate,
            population_growth_rate: self.config.population_growth_rate(),
        }
        .clamped()
    }

    /// Simulate one year and return its snapshot
    ///
    /// # Errors
    ///
    /// `HorizonExhausted` once every configured year has been simulated.
    pub fn step(&mut self) -> Result<YearlySnapshot, SimulationError> {
        if self.clock.is_finished() {
            return Err(SimulationError::HorizonExhausted {
                horizon: self.clock.horizon(),
            });
        }

        let year_index = self.clock.current_index();
        let mut rates = self.baseline_rates();
        let mut events = Vec::new();
        let mut event_deficit_impact = 0.0;

        if let Some(generator) = self.generator.as_mut() {
            events = generator.events_for_year(year_index)?;
            for event in &events {
                event_deficit_impact += rates.apply(&event.impact);
            }
            self.event_log.extend(generator.drain_log());
        }

        let principal_change = self.config.deficit_for_year(year_index) + event_deficit_impact;
        let flows = self.state.advance(&rates, principal_change);

        let snapshot = YearlySnapshot {
            year_index,
            year: self.clock.calendar_year(),
            nominal_debt: self.state.nominal_debt(),
            real_debt: self.state.real_debt(),
            interest_payment: flows.interest_payment,
            principal_change: flows.principal_change,
            gdp: self.state.gdp(),
            debt_to_gdp_ratio: self.state.debt_to_gdp_ratio(),
            inflation_adjustment: flows.inflation_adjustment,
            inflation_rate: rates.inflation_rate,
            gdp_growth_rate: rates.gdp_growth_rate,
            interest_rate: rates.interest_rate,
            population: self.state.population(),
            population_growth_rate: rates.population_growth_rate,
            debt_per_capita: self.state.debt_per_capita(),
            events,
            event_deficit_impact,
        };

        trace!(
            year = snapshot.year,
            debt = snapshot.nominal_debt,
            ratio = snapshot.debt_to_gdp_ratio,
            events = snapshot.events.len(),
            "year simulated"
        );
        self.event_log.log(Event::YearCompleted {
            year: year_index,
            nominal_debt: snapshot.nominal_debt,
            debt_to_gdp_ratio: snapshot.debt_to_gdp_ratio,
            num_events: snapshot.events.len(),
        });

        self.trajectory.push(snapshot.clone());
        self.clock.advance_year();
        Ok(snapshot)
    }

    /// Simulate every remaining year and return the full trajectory
    pub fn run_to_completion(&mut self) -> Result<&[YearlySnapshot], SimulationError> {
        while !self.clock.is_finished() {
            self.step()?;
        }

        if let Some(last) = self.trajectory.last() {
            info!(
                years = self.trajectory.len(),
                final_debt = last.nominal_debt,
                final_ratio = last.debt_to_gdp_ratio,
                "simulation complete"
            );
        }
        Ok(&self.trajectory)
    }

    /// Consume the orchestrator, returning trajectory and lifecycle log
    pub fn into_parts(self) -> (Vec<YearlySnapshot>, EventLog) {
        (self.trajectory, self.event_log)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Index of the next year to simulate
    pub fn current_year_index(&self) -> usize {
        self.clock.current_index()
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get reference to the running economic state
    pub fn state(&self) -> &EconomicState {
        &self.state
    }

    /// Snapshots produced so far
    pub fn trajectory(&self) -> &[YearlySnapshot] {
        &self.trajectory
    }

    /// Get reference to the lifecycle log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Seed driving the event generator, if events are enabled
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Run a whole simulation and return its trajectory
pub fn calculate_progression(config: SimulationConfig) -> Result<Vec<YearlySnapshot>, SimulationError> {
    let mut orchestrator = Orchestrator::new(config)?;
    orchestrator.run_to_completion()?;
    Ok(orchestrator.into_parts().0)
}
