//! Scenario event scheduling
//!
//! Resolves which configured scenario events fire in a given year. The event
//! generator decides whether a due event can actually start.

use crate::events::types::{EventKind, EventSchedule, ScenarioEvent, ScheduledEvent};

/// Holds the configured scenario events for a run
#[derive(Debug, Clone, Default)]
pub struct ScenarioEventHandler {
    events: Vec<ScheduledEvent>,
}

impl ScenarioEventHandler {
    /// Create a new handler with the given events
    pub fn new(events: Vec<ScheduledEvent>) -> Self {
        Self { events }
    }

    /// Get all events scheduled for a specific year index, in configuration order
    pub fn events_for_year(&self, year: usize) -> Vec<&ScenarioEvent> {
        self.events
            .iter()
            .filter(|scheduled| scheduled.schedule.should_execute(year))
            .map(|scheduled| &scheduled.event)
            .collect()
    }

    /// Check that every configured event can be scheduled
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        for (idx, scheduled) in self.events.iter().enumerate() {
            let kind = scheduled.event.kind;
            if !kind.is_schedulable() {
                return Err(format!(
                    "scenario event {idx}: {kind} cannot be scheduled (schedule {} instead)",
                    EventKind::WarStart
                ));
            }
            if !scheduled.event.severity.is_finite() || scheduled.event.severity < 0.0 {
                return Err(format!(
                    "scenario event {idx}: severity must be a non-negative number"
                ));
            }
            if let EventSchedule::Repeating { interval: 0, .. } = scheduled.schedule {
                return Err(format!("scenario event {idx}: repeat interval must be > 0"));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
