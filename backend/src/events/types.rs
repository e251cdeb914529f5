//! Economic event types
//!
//! An [`EconomicEvent`] is an immutable value describing one macroeconomic
//! shock and the rate adjustments it applies while active. Scenario types at
//! the bottom of the module let a configuration force events at specific
//! years.
//!
//! # Design Principles
//!
//! 1. **Immutability**: aftermath variants are new values built with
//!    [`EconomicEvent::with_scaled_impacts`], never in-place edits
//! 2. **Rates are decimals**: every impact is a fraction (0.01 = one point)
//! 3. **Money is trillions**: deficit impacts use the same unit as debt and GDP

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an economic event
///
/// Also used as the key of the generator's ongoing-event map, where each
/// category (slot) holds at most one active record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    WarStart,
    WarOngoing,
    WarEnd,
    Recession,
    Depression,
    EconomicBoom,
    NaturalDisaster,
    Pandemic,
    TechRevolution,
    EnergyCrisis,
    PeaceDividend,
    FinancialCrisis,
}

const WAR_SLOTS: &[EventKind] = &[EventKind::WarStart, EventKind::WarOngoing, EventKind::WarEnd];
const DOWNTURN_SLOTS: &[EventKind] = &[EventKind::Recession, EventKind::Depression];
const BOOM_SLOTS: &[EventKind] = &[
    EventKind::Recession,
    EventKind::Depression,
    EventKind::EconomicBoom,
];
const PEACE_SLOTS: &[EventKind] = &[
    EventKind::WarStart,
    EventKind::WarOngoing,
    EventKind::Recession,
    EventKind::Depression,
    EventKind::PeaceDividend,
];

impl EventKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::WarStart => "War Begins",
            EventKind::WarOngoing => "War Continues",
            EventKind::WarEnd => "War Ends",
            EventKind::Recession => "Economic Recession",
            EventKind::Depression => "Economic Depression",
            EventKind::EconomicBoom => "Economic Boom",
            EventKind::NaturalDisaster => "Natural Disaster",
            EventKind::Pandemic => "Global Pandemic",
            EventKind::TechRevolution => "Technological Revolution",
            EventKind::EnergyCrisis => "Energy Crisis",
            EventKind::PeaceDividend => "Peace Dividend",
            EventKind::FinancialCrisis => "Financial Crisis",
        }
    }

    /// Key under which a freshly created event of this kind is tracked
    ///
    /// A war starts as a `WarStart` event but is tracked in the `WarOngoing`
    /// slot until its aftermath moves it to `WarEnd`.
    pub fn slot(&self) -> EventKind {
        match self {
            EventKind::WarStart => EventKind::WarOngoing,
            other => *other,
        }
    }

    /// Slots that must all be empty before a new event of this kind may start
    ///
    /// Natural disasters are never gated.
    pub fn blocking_slots(&self) -> &'static [EventKind] {
        match self {
            EventKind::WarStart | EventKind::WarOngoing | EventKind::WarEnd => WAR_SLOTS,
            EventKind::Recession | EventKind::Depression => DOWNTURN_SLOTS,
            EventKind::EconomicBoom => BOOM_SLOTS,
            EventKind::PeaceDividend => PEACE_SLOTS,
            EventKind::NaturalDisaster => &[],
            EventKind::Pandemic => &[EventKind::Pandemic],
            EventKind::TechRevolution => &[EventKind::TechRevolution],
            EventKind::EnergyCrisis => &[EventKind::EnergyCrisis],
            EventKind::FinancialCrisis => &[EventKind::FinancialCrisis],
        }
    }

    /// Recession or depression
    pub fn is_downturn(&self) -> bool {
        matches!(self, EventKind::Recession | EventKind::Depression)
    }

    /// Boom or technological revolution
    pub fn is_expansion(&self) -> bool {
        matches!(self, EventKind::EconomicBoom | EventKind::TechRevolution)
    }

    /// Whether a scenario may force an event of this kind
    ///
    /// Wars are scheduled as `WarStart`; the later war phases only arise from
    /// the lifecycle itself.
    pub fn is_schedulable(&self) -> bool {
        !matches!(self, EventKind::WarOngoing | EventKind::WarEnd)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate adjustments an event applies to one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EventImpact {
    /// Additional deficit (trillions; negative reduces the deficit)
    pub deficit: f64,
    /// Added to the year's real GDP growth rate
    pub gdp_growth: f64,
    /// Added to the year's inflation rate
    pub inflation: f64,
    /// Added to the year's interest rate
    pub interest_rate: f64,
    /// Added to the year's population growth rate, when the event affects it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_growth: Option<f64>,
}

impl EventImpact {
    /// Multiply every field (population included) by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            deficit: self.deficit * factor,
            gdp_growth: self.gdp_growth * factor,
            inflation: self.inflation * factor,
            interest_rate: self.interest_rate * factor,
            population_growth: self.population_growth.map(|p| p * factor),
        }
    }
}

/// A macroeconomic event affecting one or more simulated years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicEvent {
    pub kind: EventKind,
    pub name: String,
    pub description: String,
    pub impact: EventImpact,
    /// Years of full impact
    pub duration: u32,
    /// Years of reduced impact after the active phase
    pub aftermath_duration: u32,
    /// Impact scaling applied once the aftermath begins, in [0, 1]
    pub aftermath_multiplier: f64,
}

impl EconomicEvent {
    /// Copy of this event with the four rate deltas scaled by `multiplier`
    ///
    /// The population delta is left untouched.
    ///
    /// # Example
    /// ```
    /// use fiscal_simulator_core_rs::events::catalog;
    ///
    /// let peace = catalog::peace_dividend(&mut || 0.5);
    /// let aftermath = peace.with_scaled_impacts(peace.aftermath_multiplier);
    /// assert_eq!(aftermath.impact.deficit, peace.impact.deficit * 0.5);
    /// assert_eq!(peace.impact.deficit, -0.2);
    /// ```
    pub fn with_scaled_impacts(&self, multiplier: f64) -> Self {
        let mut impact = self.impact.scaled(multiplier);
        impact.population_growth = self.impact.population_growth;
        Self {
            impact,
            ..self.clone()
        }
    }

    /// Copy of this event carrying a different description
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Active years plus aftermath years
    pub fn total_duration(&self) -> u32 {
        self.duration + self.aftermath_duration
    }

    /// Key identifying one event instance for description tracking
    pub fn instance_key(&self) -> String {
        format!("{}-{}", self.kind.label(), self.name)
    }
}

// ============================================================================
// Scenario scheduling
// ============================================================================

/// An event the configuration forces into the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvent {
    pub kind: EventKind,
    /// Multiplier applied to the event's rate deltas (1.0 = catalog profile)
    #[serde(default = "default_severity")]
    pub severity: f64,
}

fn default_severity() -> f64 {
    1.0
}

/// When to inject a scenario event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventSchedule {
    /// Inject once at a specific year index
    OneTime { year: usize },

    /// Inject at regular intervals starting from `start_year`
    Repeating { start_year: usize, interval: usize },
}

impl EventSchedule {
    /// Check if this schedule fires at the given year index
    pub fn should_execute(&self, year: usize) -> bool {
        match self {
            EventSchedule::OneTime { year: event_year } => year == *event_year,
            EventSchedule::Repeating {
                start_year,
                interval,
            } => *interval > 0 && year >= *start_year && (year - start_year) % interval == 0,
        }
    }
}

/// A scenario event paired with its schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub event: ScenarioEvent,
    pub schedule: EventSchedule,
}
