//! Simulation configuration
//!
//! All parameters a run needs, loadable from JSON. Rates are decimal
//! fractions (0.03 = 3%); money is in trillions; population in millions.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::events::handler::ScenarioEventHandler;
use crate::events::types::ScheduledEvent;
use crate::orchestrator::SimulationError;

/// Deficit assumed for years the configured deficit list does not cover (trillions)
pub const DEFAULT_DEFICIT: f64 = 0.8;

/// Population used when none is configured (millions)
pub const DEFAULT_POPULATION: f64 = 330.0;

/// Population growth used when none is configured
pub const DEFAULT_POPULATION_GROWTH_RATE: f64 = 0.007;

/// Complete simulation configuration
///
/// Missing fields take the values of [`SimulationConfig::default`] when
/// deserializing.
///
/// # Example
///
/// ```rust
/// use fiscal_simulator_core_rs::SimulationConfig;
///
/// let config = SimulationConfig::from_json(
///     r#"{"initial_debt": 10.0, "simulation_years": 5, "annual_deficits": [0.5]}"#,
/// ).unwrap();
///
/// assert_eq!(config.deficit_for_year(0), 0.5);
/// assert_eq!(config.deficit_for_year(4), 0.8); // padded
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Starting debt (trillions)
    pub initial_debt: f64,

    /// Number of years to simulate (>= 1)
    pub simulation_years: usize,

    /// Average interest rate paid on the debt
    pub average_interest_rate: f64,

    /// Baseline annual inflation rate
    pub inflation_rate: f64,

    /// Per-year deficits (trillions, negative = surplus); padded with
    /// [`DEFAULT_DEFICIT`] when shorter than the horizon
    pub annual_deficits: Vec<f64>,

    /// Starting nominal GDP (trillions)
    pub initial_gdp: f64,

    /// Baseline real GDP growth rate
    pub base_gdp_growth_rate: f64,

    /// Whether random economic events are generated
    pub random_events_enabled: bool,

    /// Seed for reproducible event sequences (None = entropy)
    pub random_seed: Option<u64>,

    /// Starting population (millions)
    pub initial_population: Option<f64>,

    /// Baseline population growth rate
    pub base_population_growth_rate: Option<f64>,

    /// Calendar year of the first simulated year (None = current year)
    pub start_year: Option<i32>,

    /// Events forced into the run at fixed years
    ///
    /// Only injected when random events are enabled.
    pub scenario_events: Vec<ScheduledEvent>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_debt: 20.0,
            simulation_years: 100,
            average_interest_rate: 0.03,
            inflation_rate: 0.02,
            annual_deficits: Vec::new(),
            initial_gdp: 20.0,
            base_gdp_growth_rate: 0.02,
            random_events_enabled: true,
            random_seed: None,
            initial_population: None,
            base_population_growth_rate: None,
            start_year: None,
            scenario_events: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| {
            SimulationError::SerializationError(format!("Config parsing failed: {}", e))
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.simulation_years == 0 {
            return Err(SimulationError::InvalidConfig(
                "simulation_years must be > 0".to_string(),
            ));
        }

        let numbers = [
            ("initial_debt", self.initial_debt),
            ("average_interest_rate", self.average_interest_rate),
            ("inflation_rate", self.inflation_rate),
            ("initial_gdp", self.initial_gdp),
            ("base_gdp_growth_rate", self.base_gdp_growth_rate),
            ("initial_population", self.population()),
            ("base_population_growth_rate", self.population_growth_rate()),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(SimulationError::InvalidConfig(format!(
                    "{field} must be a finite number"
                )));
            }
        }

        if let Some(idx) = self.annual_deficits.iter().position(|d| !d.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "annual_deficits[{idx}] must be a finite number"
            )));
        }

        if self.initial_gdp <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "initial_gdp must be > 0".to_string(),
            ));
        }

        if self.population() <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "initial_population must be > 0".to_string(),
            ));
        }

        if self.initial_debt < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "initial_debt must be >= 0".to_string(),
            ));
        }

        ScenarioEventHandler::new(self.scenario_events.clone())
            .validate()
            .map_err(SimulationError::InvalidConfig)
    }

    /// Deficit for a year index, padded with [`DEFAULT_DEFICIT`]
    pub fn deficit_for_year(&self, year: usize) -> f64 {
        self.annual_deficits
            .get(year)
            .copied()
            .unwrap_or(DEFAULT_DEFICIT)
    }

    /// Deficit sequence covering exactly the horizon
    pub fn padded_deficits(&self) -> Vec<f64> {
        (0..self.simulation_years)
            .map(|year| self.deficit_for_year(year))
            .collect()
    }

    /// Starting population, defaulted
    pub fn population(&self) -> f64 {
        self.initial_population.unwrap_or(DEFAULT_POPULATION)
    }

    /// Baseline population growth, defaulted
    pub fn population_growth_rate(&self) -> f64 {
        self.base_population_growth_rate
            .unwrap_or(DEFAULT_POPULATION_GROWTH_RATE)
    }

    /// Calendar year of year index 0
    pub fn resolved_start_year(&self) -> i32 {
        self.start_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Starting debt-to-GDP ratio, as a percentage
    pub fn initial_debt_ratio(&self) -> f64 {
        100.0 * self.initial_debt / self.initial_gdp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::{EventKind, EventSchedule, ScenarioEvent};

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let config = SimulationConfig {
            simulation_years: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig(msg)) if msg.contains("simulation_years")
        ));
    }

    #[test]
    fn test_non_positive_gdp_rejected() {
        let config = SimulationConfig {
            initial_gdp: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_deficit_rejected() {
        let config = SimulationConfig {
            annual_deficits: vec![0.5, f64::NAN],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("annual_deficits[1]"));
    }

    #[test]
    fn test_explicit_zero_population_growth_honored() {
        let config = SimulationConfig {
            base_population_growth_rate: Some(0.0),
            ..Default::default()
        };
        assert_eq!(config.population_growth_rate(), 0.0);
        assert_eq!(
            SimulationConfig::default().population_growth_rate(),
            DEFAULT_POPULATION_GROWTH_RATE
        );
    }

    #[test]
    fn test_padding_and_truncation() {
        let config = SimulationConfig {
            simulation_years: 3,
            annual_deficits: vec![1.0, -0.5, 2.0, 9.0],
            ..Default::default()
        };
        assert_eq!(config.padded_deficits(), vec![1.0, -0.5, 2.0]);

        let short = SimulationConfig {
            simulation_years: 3,
            annual_deficits: vec![1.0],
            ..Default::default()
        };
        assert_eq!(short.padded_deficits(), vec![1.0, 0.8, 0.8]);
    }

    #[test]
    fn test_unschedulable_scenario_rejected() {
        let config = SimulationConfig {
            scenario_events: vec![ScheduledEvent {
                event: ScenarioEvent {
                    kind: EventKind::WarOngoing,
                    severity: 1.0,
                },
                schedule: EventSchedule::OneTime { year: 0 },
            }],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_debt_ratio_is_percentage() {
        let config = SimulationConfig {
            initial_debt: 10.0,
            initial_gdp: 100.0,
            ..Default::default()
        };
        assert_eq!(config.initial_debt_ratio(), 10.0);
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = SimulationConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SimulationError::SerializationError(_)));
    }

    #[test]
    fn test_explicit_start_year_wins() {
        let config = SimulationConfig {
            start_year: Some(2000),
            ..Default::default()
        };
        assert_eq!(config.resolved_start_year(), 2000);
    }
}
