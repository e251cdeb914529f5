//! Yearly snapshot
//!
//! One frozen record per simulated year. The ordered sequence of snapshots is
//! the trajectory handed to callers and to the assessment.

use crate::events::types::{EconomicEvent, EventKind};
use serde::{Deserialize, Serialize};

/// Economic picture at the end of one simulated year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// 0-based index within the run
    pub year_index: usize,
    /// Calendar year
    pub year: i32,
    /// Debt in current dollars (trillions)
    ///
    /// Floored at zero: a surplus larger than the outstanding debt retires
    /// it and the excess is dropped, not banked for later years.
    pub nominal_debt: f64,
    /// Debt in year-0 dollars (trillions)
    pub real_debt: f64,
    /// Interest paid this year (trillions)
    pub interest_payment: f64,
    /// Deficit plus event deficit impact (trillions), before the zero floor
    pub principal_change: f64,
    /// Nominal GDP (trillions)
    pub gdp: f64,
    /// Debt as a percentage of GDP; never negative, see `nominal_debt`
    pub debt_to_gdp_ratio: f64,
    /// Nominal amount inflation eroded this year (trillions)
    pub inflation_adjustment: f64,
    pub inflation_rate: f64,
    pub gdp_growth_rate: f64,
    pub interest_rate: f64,
    /// Population (millions)
    pub population: f64,
    pub population_growth_rate: f64,
    /// Debt per person (dollars)
    pub debt_per_capita: f64,
    /// Events active this year, with year-relative descriptions
    pub events: Vec<EconomicEvent>,
    /// Sum of event deficit impacts (trillions)
    pub event_deficit_impact: f64,
}

impl YearlySnapshot {
    /// Whether any event of the given category was active this year
    pub fn has_event(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind == kind)
    }

    /// Whether a recession or depression was active this year
    pub fn had_downturn(&self) -> bool {
        self.events.iter().any(|e| e.kind.is_downturn())
    }

    /// Whether a boom or technological revolution was active this year
    pub fn had_expansion(&self) -> bool {
        self.events.iter().any(|e| e.kind.is_expansion())
    }

    /// Interest payment as a fraction of GDP
    pub fn interest_to_gdp(&self) -> f64 {
        self.interest_payment / self.gdp
    }
}
