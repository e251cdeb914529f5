//! Lifecycle logging for simulation replay and auditing.
//!
//! The [`Event`] enum records every significant transition of the event
//! machinery and the end of every simulated year. The log enables:
//! - Debugging (why was a recession still active in year 12?)
//! - Auditing (verify mutual exclusion and aftermath transitions)
//! - Analysis (count how often scenario injections were blocked)
//!
//! # Example
//!
//! ```rust
//! use fiscal_simulator_core_rs::models::{Event, EventLog};
//! use fiscal_simulator_core_rs::EventKind;
//!
//! let mut log = EventLog::new();
//! log.log(Event::EventStarted {
//!     year: 4,
//!     kind: EventKind::Recession,
//!     name: "Credit Crunch".to_string(),
//!     duration: 2,
//!     aftermath_duration: 3,
//! });
//!
//! assert_eq!(log.events_at_year(4).len(), 1);
//! assert_eq!(log.events()[0].event_type(), "EventStarted");
//! ```

use crate::events::types::EventKind;
use serde::{Deserialize, Serialize};

/// Simulation log entry.
///
/// All entries carry the year index they happened in and are logged in the
/// order they occur within that year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A new event was rolled or injected and began its active phase
    EventStarted {
        year: usize,
        kind: EventKind,
        name: String,
        duration: u32,
        aftermath_duration: u32,
    },

    /// An ongoing event moved into its reduced-impact aftermath
    AftermathBegan {
        year: usize,
        kind: EventKind,
        name: String,
        multiplier: f64,
    },

    /// Fighting stopped; the war's slot now holds its reconstruction phase
    WarEnded { year: usize, war_name: String },

    /// An ongoing event ran out of years and was removed
    EventExpired {
        year: usize,
        kind: EventKind,
        name: String,
    },

    /// A scheduled scenario event entered the simulation
    ScenarioInjected {
        year: usize,
        kind: EventKind,
        name: String,
    },

    /// A scheduled scenario event was blocked by an active event
    ScenarioSkipped {
        year: usize,
        kind: EventKind,
        blocked_by: EventKind,
    },

    /// A year finished and its snapshot was recorded
    YearCompleted {
        year: usize,
        nominal_debt: f64,
        debt_to_gdp_ratio: f64,
        num_events: usize,
    },
}

impl Event {
    /// Year index the entry belongs to
    pub fn year(&self) -> usize {
        match self {
            Event::EventStarted { year, .. }
            | Event::AftermathBegan { year, .. }
            | Event::WarEnded { year, .. }
            | Event::EventExpired { year, .. }
            | Event::ScenarioInjected { year, .. }
            | Event::ScenarioSkipped { year, .. }
            | Event::YearCompleted { year, .. } => *year,
        }
    }

    /// Variant name, used for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::EventStarted { .. } => "EventStarted",
            Event::AftermathBegan { .. } => "AftermathBegan",
            Event::WarEnded { .. } => "WarEnded",
            Event::EventExpired { .. } => "EventExpired",
            Event::ScenarioInjected { .. } => "ScenarioInjected",
            Event::ScenarioSkipped { .. } => "ScenarioSkipped",
            Event::YearCompleted { .. } => "YearCompleted",
        }
    }

    /// Event category, when the entry concerns one
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Event::EventStarted { kind, .. }
            | Event::AftermathBegan { kind, .. }
            | Event::EventExpired { kind, .. }
            | Event::ScenarioInjected { kind, .. }
            | Event::ScenarioSkipped { kind, .. } => Some(*kind),
            Event::WarEnded { .. } => Some(EventKind::WarEnd),
            Event::YearCompleted { .. } => None,
        }
    }
}

/// Append-only log of lifecycle entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an entry to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Append every entry of another log, preserving order
    pub fn extend(&mut self, other: EventLog) {
        self.events.extend(other.events);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all entries
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get entries for a specific year index
    pub fn events_at_year(&self, year: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.year() == year).collect()
    }

    /// Get entries of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get entries concerning one event category
    pub fn events_for_kind(&self, kind: EventKind) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.kind() == Some(kind))
            .collect()
    }
}
