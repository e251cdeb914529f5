//! Time management for the simulation
//!
//! The simulation advances in whole years. Year indices start at 0 and map
//! onto calendar years starting at the configured start year.

use serde::{Deserialize, Serialize};

/// Tracks the current year of a run against its horizon
///
/// # Example
/// ```
/// use fiscal_simulator_core_rs::SimulationClock;
///
/// let mut clock = SimulationClock::new(2025, 3);
/// assert_eq!(clock.current_index(), 0);
/// assert_eq!(clock.calendar_year(), 2025);
///
/// clock.advance_year();
/// assert_eq!(clock.calendar_year(), 2026);
/// assert!(!clock.is_finished());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Calendar year of year index 0
    start_year: i32,
    /// Years elapsed since the start of the run
    current_index: usize,
    /// Total number of years to simulate
    horizon: usize,
}

impl SimulationClock {
    /// Create a clock for a run of `horizon` years starting at `start_year`
    pub fn new(start_year: i32, horizon: usize) -> Self {
        Self {
            start_year,
            current_index: 0,
            horizon,
        }
    }

    /// Advance time by one year
    pub fn advance_year(&mut self) {
        self.current_index += 1;
    }

    /// Index of the year about to be simulated (0-based)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Calendar year of the year about to be simulated
    pub fn calendar_year(&self) -> i32 {
        self.year_for_index(self.current_index)
    }

    /// Calendar year for an arbitrary index
    pub fn year_for_index(&self, index: usize) -> i32 {
        self.start_year + index as i32
    }

    /// True once every year of the horizon has been simulated
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.horizon
    }

    /// Years left to simulate
    pub fn remaining_years(&self) -> usize {
        self.horizon.saturating_sub(self.current_index)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_finishes_after_horizon() {
        let mut clock = SimulationClock::new(2030, 2);
        assert_eq!(clock.remaining_years(), 2);

        clock.advance_year();
        clock.advance_year();

        assert!(clock.is_finished());
        assert_eq!(clock.remaining_years(), 0);
        assert_eq!(clock.calendar_year(), 2032);
    }

    #[test]
    fn test_year_for_index() {
        let clock = SimulationClock::new(1999, 10);
        assert_eq!(clock.year_for_index(0), 1999);
        assert_eq!(clock.year_for_index(9), 2008);
    }
}
