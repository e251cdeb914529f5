//! Simulation State
//!
//! Running economic state carried from one simulated year to the next. Every
//! other quantity is recomputed each year from baseline rates plus that
//! year's event adjustments.
//!
//! # Critical Invariants
//!
//! 1. **Positive GDP and population**: both only ever grow by factors > 0
//!    because the growth floors keep `1 + rate` positive
//! 2. **Non-negative debt**: surpluses retire debt down to zero, never below
//! 3. **Inflation factor**: cumulative product of `1 + inflation` since year 0

use crate::events::types::EventImpact;
use serde::{Deserialize, Serialize};

/// Lowest inflation rate any year may run at
pub const INFLATION_FLOOR: f64 = -0.02;
/// Lowest real GDP growth rate any year may run at
pub const GDP_GROWTH_FLOOR: f64 = -0.15;
/// Lowest interest rate any year may run at
pub const INTEREST_RATE_FLOOR: f64 = 0.005;
/// Lowest population growth rate any year may run at
pub const POPULATION_GROWTH_FLOOR: f64 = -0.03;

/// State owned and mutated by the orchestrator across years
///
/// # Example
///
/// ```rust
/// use fiscal_simulator_core_rs::EconomicState;
///
/// let state = EconomicState::new(20.0, 25.0, 330.0);
/// assert_eq!(state.debt_to_gdp_ratio(), 80.0);
/// assert_eq!(state.inflation_factor(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicState {
    /// Debt in current dollars (trillions)
    nominal_debt: f64,
    /// Nominal GDP (trillions)
    gdp: f64,
    /// Population (millions)
    population: f64,
    /// Price level relative to year 0
    inflation_factor: f64,
}

/// Rates in effect for one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRates {
    pub interest_rate: f64,
    pub inflation_rate: f64,
    pub gdp_growth_rate: f64,
    pub population_growth_rate: f64,
}

impl YearRates {
    /// Add one event's deltas, then re-apply the floors
    ///
    /// Returns the event's deficit impact so the caller can accumulate it.
    pub fn apply(&mut self, impact: &EventImpact) -> f64 {
        self.inflation_rate += impact.inflation;
        self.gdp_growth_rate += impact.gdp_growth;
        self.interest_rate += impact.interest_rate;
        if let Some(population) = impact.population_growth {
            self.population_growth_rate += population;
        }
        *self = self.clamped();
        impact.deficit
    }

    /// Copy with every rate raised to its floor where needed
    pub fn clamped(self) -> Self {
        Self {
            interest_rate: self.interest_rate.max(INTEREST_RATE_FLOOR),
            inflation_rate: self.inflation_rate.max(INFLATION_FLOOR),
            gdp_growth_rate: self.gdp_growth_rate.max(GDP_GROWTH_FLOOR),
            population_growth_rate: self.population_growth_rate.max(POPULATION_GROWTH_FLOOR),
        }
    }
}

/// Flows computed while advancing the state by one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearFlows {
    /// Interest on the prior year-end debt
    pub interest_payment: f64,
    /// Deficit plus event deficit impact
    pub principal_change: f64,
    /// Nominal amount inflation eroded this year
    pub inflation_adjustment: f64,
}

impl EconomicState {
    pub fn new(initial_debt: f64, initial_gdp: f64, initial_population: f64) -> Self {
        Self {
            nominal_debt: initial_debt,
            gdp: initial_gdp,
            population: initial_population,
            inflation_factor: 1.0,
        }
    }

    /// Advance population, GDP, debt and price level by one year
    ///
    /// Population growth feeds real GDP growth at half weight; inflation is
    /// applied to nominal GDP after real growth. Interest accrues on the debt
    /// as it stood before this year's deficit.
    pub fn advance(&mut self, rates: &YearRates, principal_change: f64) -> YearFlows {
        self.population *= 1.0 + rates.population_growth_rate;

        let total_gdp_growth = rates.gdp_growth_rate + 0.5 * rates.population_growth_rate;
        self.gdp *= (1.0 + total_gdp_growth) * (1.0 + rates.inflation_rate);

        let interest_payment = self.nominal_debt * rates.interest_rate;
        self.nominal_debt = (self.nominal_debt + principal_change + interest_payment).max(0.0);

        self.inflation_factor *= 1.0 + rates.inflation_rate;

        let inflation_adjustment =
            self.nominal_debt * rates.inflation_rate / (1.0 + rates.inflation_rate);

        YearFlows {
            interest_payment,
            principal_change,
            inflation_adjustment,
        }
    }

    pub fn nominal_debt(&self) -> f64 {
        self.nominal_debt
    }

    /// Debt in year-0 dollars
    pub fn real_debt(&self) -> f64 {
        self.nominal_debt / self.inflation_factor
    }

    pub fn gdp(&self) -> f64 {
        self.gdp
    }

    pub fn population(&self) -> f64 {
        self.population
    }

    pub fn inflation_factor(&self) -> f64 {
        self.inflation_factor
    }

    /// Debt as a percentage of GDP
    pub fn debt_to_gdp_ratio(&self) -> f64 {
        100.0 * self.nominal_debt / self.gdp
    }

    /// Debt per person in dollars (debt in trillions, population in millions)
    pub fn debt_per_capita(&self) -> f64 {
        (self.nominal_debt * 1e12) / (self.population * 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(interest: f64, inflation: f64, growth: f64, population: f64) -> YearRates {
        YearRates {
            interest_rate: interest,
            inflation_rate: inflation,
            gdp_growth_rate: growth,
            population_growth_rate: population,
        }
    }

    #[test]
    fn test_floors_applied_after_each_event() {
        let mut year = rates(0.01, 0.0, 0.0, 0.0);
        let crash = EventImpact {
            deficit: 1.0,
            gdp_growth: -0.2,
            inflation: -0.05,
            interest_rate: -0.02,
            population_growth: Some(-0.1),
        };

        let deficit = year.apply(&crash);

        assert_eq!(deficit, 1.0);
        assert_eq!(year.gdp_growth_rate, GDP_GROWTH_FLOOR);
        assert_eq!(year.inflation_rate, INFLATION_FLOOR);
        assert_eq!(year.interest_rate, INTEREST_RATE_FLOOR);
        assert_eq!(year.population_growth_rate, POPULATION_GROWTH_FLOOR);

        // A later positive delta starts from the floor, not the unclamped sum
        year.apply(&EventImpact {
            gdp_growth: 0.05,
            ..EventImpact::default()
        });
        assert!((year.gdp_growth_rate - (GDP_GROWTH_FLOOR + 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_interest_accrues_on_prior_debt() {
        let mut state = EconomicState::new(10.0, 100.0, 330.0);
        let flows = state.advance(&rates(0.03, 0.0, 0.02, 0.0), 1.0);

        assert!((flows.interest_payment - 0.3).abs() < 1e-12);
        assert!((state.nominal_debt() - 11.3).abs() < 1e-12);
    }

    #[test]
    fn test_population_contributes_half_to_growth() {
        let mut state = EconomicState::new(0.0, 100.0, 100.0);
        state.advance(&rates(0.01, 0.0, 0.02, 0.01), 0.0);

        assert!((state.population() - 101.0).abs() < 1e-9);
        assert!((state.gdp() - 102.5).abs() < 1e-9);
    }

    #[test]
    fn test_inflation_erodes_real_debt() {
        let mut state = EconomicState::new(10.0, 100.0, 330.0);
        let flows = state.advance(&rates(0.005, 0.10, 0.0, 0.0), 0.0);

        let nominal = 10.0 * 1.005;
        assert!((state.real_debt() - nominal / 1.1).abs() < 1e-12);
        assert!((flows.inflation_adjustment - nominal * 0.1 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_surplus_never_drives_debt_negative() {
        let mut state = EconomicState::new(1.0, 100.0, 330.0);
        let flows = state.advance(&rates(0.03, 0.0, 0.0, 0.0), -5.0);

        assert_eq!(state.nominal_debt(), 0.0);
        assert_eq!(flows.principal_change, -5.0);
        assert_eq!(state.debt_to_gdp_ratio(), 0.0);
    }

    #[test]
    fn test_debt_per_capita_units() {
        let state = EconomicState::new(33.0, 100.0, 330.0);
        assert!((state.debt_per_capita() - 100_000.0).abs() < 1e-6);
    }
}
