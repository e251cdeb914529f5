//! Stochastic event generator
//!
//! Produces the set of economic events active in each simulated year. The
//! generator is a forward-only process: ongoing events age by one year per
//! call, so years must be requested exactly once and in increasing order.
//!
//! # Per-year algorithm
//!
//! ```text
//! 1. Age ongoing events (expire, enter aftermath, or carry over)
//! 2. Roll for war          (5%,  no war in any phase)
//! 3. Roll for downturn     (10%, no recession/depression; 30% of hits are depressions)
//! 4. Roll for boom         (8%,  no boom/recession/depression)
//! 5. Roll for disaster     (7%,  never gated, never tracked)
//! 6. Roll for tech boom    (3%,  none active)
//! 7. Roll for peace        (10%, no active war/recession/depression/peace)
//! 8. Inject scheduled scenario events whose slots are free
//! ```
//!
//! Gated rolls consume no random draw; every performed roll consumes one.
//!
//! The first aftermath year emits a copy scaled by the aftermath multiplier.
//! Later aftermath years emit the original event again. Ongoing events are
//! emitted in the order they started; a war keeps its place when it moves to
//! its WarEnd phase. Rate floors are re-applied after each event, so clamped
//! rates depend on this order.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::events::catalog;
use crate::events::handler::ScenarioEventHandler;
use crate::events::types::{EconomicEvent, EventKind, ScheduledEvent};
use crate::models::event::{Event, EventLog};
use crate::orchestrator::SimulationError;
use crate::rng::RandomSource;

const WAR_PROBABILITY: f64 = 0.05;
const DOWNTURN_PROBABILITY: f64 = 0.10;
const DEPRESSION_SHARE: f64 = 0.30;
const BOOM_PROBABILITY: f64 = 0.08;
const DISASTER_PROBABILITY: f64 = 0.07;
const TECH_REVOLUTION_PROBABILITY: f64 = 0.03;
const PEACE_DIVIDEND_PROBABILITY: f64 = 0.10;

/// An event currently occupying a slot
#[derive(Debug, Clone, PartialEq)]
pub struct OngoingEvent {
    /// Event emitted each year; only a war swaps it, for its WarEnd phase
    pub event: EconomicEvent,
    /// Active plus aftermath years left
    pub years_remaining: u32,
    pub in_aftermath: bool,
    /// Start sequence number; ongoing events are aged and emitted in this order
    pub started: u64,
}

/// Generates the events for each simulated year
pub struct EventGenerator<R: RandomSource> {
    rng: R,
    /// Slot → active record; at most one record per slot
    ongoing: BTreeMap<EventKind, OngoingEvent>,
    next_start: u64,
    /// Instance key → year index of first appearance
    first_seen: HashMap<String, usize>,
    scenarios: ScenarioEventHandler,
    last_year: Option<usize>,
    log: EventLog,
}

impl<R: RandomSource> EventGenerator<R> {
    /// Create a generator drawing from `rng`
    ///
    /// # Example
    /// ```
    /// use fiscal_simulator_core_rs::{EventGenerator, RngManager};
    ///
    /// let mut generator = EventGenerator::new(RngManager::new(12345));
    /// let first = generator.events_for_year(0).unwrap();
    /// let second = generator.events_for_year(1).unwrap();
    /// assert!(generator.events_for_year(1).is_err());
    /// # let _ = (first, second);
    /// ```
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ongoing: BTreeMap::new(),
            next_start: 0,
            first_seen: HashMap::new(),
            scenarios: ScenarioEventHandler::default(),
            last_year: None,
            log: EventLog::new(),
        }
    }

    /// Attach scheduled scenario events
    pub fn with_scenarios(mut self, scenarios: Vec<ScheduledEvent>) -> Self {
        self.scenarios = ScenarioEventHandler::new(scenarios);
        self
    }

    /// Events active in `year`, with year-relative descriptions
    ///
    /// # Errors
    ///
    /// `YearOutOfOrder` when `year` is not strictly greater than the previous
    /// request. The generator state is left untouched in that case.
    pub fn events_for_year(&mut self, year: usize) -> Result<Vec<EconomicEvent>, SimulationError> {
        if let Some(last) = self.last_year {
            if year <= last {
                return Err(SimulationError::YearOutOfOrder {
                    requested: year,
                    last,
                });
            }
        }
        self.last_year = Some(year);

        // (event, is a brand-new instance)
        let mut emitted: Vec<(EconomicEvent, bool)> = Vec::new();

        self.advance_ongoing(year, &mut emitted);

        if self.blocker(EventKind::WarStart).is_none() && self.rng.chance(WAR_PROBABILITY) {
            let war = catalog::war(&mut self.rng);
            self.start(year, war, &mut emitted);
        }

        if self.blocker(EventKind::Recession).is_none() && self.rng.chance(DOWNTURN_PROBABILITY) {
            let downturn = if self.rng.chance(DEPRESSION_SHARE) {
                catalog::depression(&mut self.rng)
            } else {
                catalog::recession(&mut self.rng)
            };
            self.start(year, downturn, &mut emitted);
        }

        if self.blocker(EventKind::EconomicBoom).is_none() && self.rng.chance(BOOM_PROBABILITY) {
            let boom = catalog::economic_boom(&mut self.rng);
            self.start(year, boom, &mut emitted);
        }

        if self.rng.chance(DISASTER_PROBABILITY) {
            let disaster = catalog::natural_disaster(&mut self.rng);
            self.start(year, disaster, &mut emitted);
        }

        if self.blocker(EventKind::TechRevolution).is_none()
            && self.rng.chance(TECH_REVOLUTION_PROBABILITY)
        {
            let tech = catalog::tech_revolution(&mut self.rng);
            self.start(year, tech, &mut emitted);
        }

        if self.blocker(EventKind::PeaceDividend).is_none()
            && self.rng.chance(PEACE_DIVIDEND_PROBABILITY)
        {
            let peace = catalog::peace_dividend(&mut self.rng);
            self.start(year, peace, &mut emitted);
        }

        self.inject_scenarios(year, &mut emitted);

        let mut events = Vec::with_capacity(emitted.len());
        for (event, fresh) in emitted {
            events.push(self.decorate(year, event, fresh));
        }
        trace!(year, num_events = events.len(), "events generated");
        Ok(events)
    }

    /// Age every ongoing event by one year
    ///
    /// Records are visited in start order. Slot changes are collected during
    /// the pass and applied afterwards.
    fn advance_ongoing(&mut self, year: usize, emitted: &mut Vec<(EconomicEvent, bool)>) {
        let mut expired = Vec::new();
        let mut war_ended = false;

        let mut order: Vec<(u64, EventKind)> = self
            .ongoing
            .iter()
            .map(|(slot, record)| (record.started, *slot))
            .collect();
        order.sort_unstable();

        for (_, slot) in order {
            let Some(record) = self.ongoing.get_mut(&slot) else {
                continue;
            };
            record.years_remaining = record.years_remaining.saturating_sub(1);

            if record.years_remaining == 0 {
                expired.push(slot);
                continue;
            }

            if record.years_remaining == record.event.aftermath_duration && !record.in_aftermath {
                record.in_aftermath = true;

                if slot == EventKind::WarOngoing {
                    let war_name = record.event.name.clone();
                    let war_end = catalog::war_end(&war_name);
                    debug!(year, war = %war_name, "war ended");
                    self.log.log(Event::WarEnded { year, war_name });
                    record.event = war_end.clone();
                    emitted.push((war_end, true));
                    war_ended = true;
                } else {
                    let multiplier = record.event.aftermath_multiplier;
                    debug!(year, kind = %slot, name = %record.event.name, multiplier, "aftermath began");
                    self.log.log(Event::AftermathBegan {
                        year,
                        kind: slot,
                        name: record.event.name.clone(),
                        multiplier,
                    });
                    emitted.push((record.event.with_scaled_impacts(multiplier), false));
                }
            } else {
                emitted.push((record.event.clone(), false));
            }
        }

        for slot in expired {
            if let Some(record) = self.ongoing.remove(&slot) {
                debug!(year, kind = %slot, name = %record.event.name, "event expired");
                self.first_seen.remove(&record.event.instance_key());
                self.log.log(Event::EventExpired {
                    year,
                    kind: slot,
                    name: record.event.name,
                });
            }
        }

        if war_ended {
            if let Some(record) = self.ongoing.remove(&EventKind::WarOngoing) {
                self.ongoing.insert(EventKind::WarEnd, record);
            }
        }
    }

    /// Register a brand-new event and emit it for this year
    fn start(&mut self, year: usize, event: EconomicEvent, emitted: &mut Vec<(EconomicEvent, bool)>) {
        debug!(
            year,
            kind = %event.kind,
            name = %event.name,
            duration = event.duration,
            aftermath = event.aftermath_duration,
            "event started"
        );
        self.log.log(Event::EventStarted {
            year,
            kind: event.kind,
            name: event.name.clone(),
            duration: event.duration,
            aftermath_duration: event.aftermath_duration,
        });

        if event.kind != EventKind::NaturalDisaster {
            self.ongoing.insert(
                event.kind.slot(),
                OngoingEvent {
                    event: event.clone(),
                    years_remaining: event.total_duration(),
                    in_aftermath: false,
                    started: self.next_start,
                },
            );
            self.next_start += 1;
        }
        emitted.push((event, true));
    }

    fn inject_scenarios(&mut self, year: usize, emitted: &mut Vec<(EconomicEvent, bool)>) {
        let due: Vec<_> = self
            .scenarios
            .events_for_year(year)
            .into_iter()
            .cloned()
            .collect();

        for scenario in due {
            if let Some(blocked_by) = self.blocker(scenario.kind) {
                debug!(year, kind = %scenario.kind, blocked_by = %blocked_by, "scenario event skipped");
                self.log.log(Event::ScenarioSkipped {
                    year,
                    kind: scenario.kind,
                    blocked_by,
                });
                continue;
            }

            let Some(mut event) = catalog::for_kind(scenario.kind, &mut self.rng) else {
                continue;
            };
            event.impact = event.impact.scaled(scenario.severity);

            self.log.log(Event::ScenarioInjected {
                year,
                kind: event.kind,
                name: event.name.clone(),
            });
            self.start(year, event, emitted);
        }
    }

    /// First active slot preventing a new event of `kind` from starting
    fn blocker(&self, kind: EventKind) -> Option<EventKind> {
        kind.blocking_slots()
            .iter()
            .copied()
            .find(|slot| self.ongoing.contains_key(slot))
    }

    /// Rewrite the description relative to the instance's first year
    fn decorate(&mut self, year: usize, event: EconomicEvent, fresh: bool) -> EconomicEvent {
        let key = event.instance_key();
        if fresh {
            self.first_seen.insert(key, year);
        }
        let first = *self.first_seen.entry(event.instance_key()).or_insert(year);

        let k = (year - first) as u32;
        let duration = event.duration;
        let aftermath = event.aftermath_duration;

        let description = if k == 0 {
            if aftermath > 0 {
                format!(
                    "{} ({} year event with {} year aftermath)",
                    event.description, duration, aftermath
                )
            } else if duration > 1 {
                format!("{} ({} year event)", event.description, duration)
            } else {
                return event;
            }
        } else if k < duration {
            format!("(Year {} of {})", k + 1, duration)
        } else if k < duration + aftermath {
            format!("(Aftermath year {} of {})", k - duration + 1, aftermath)
        } else {
            return event;
        };

        event.with_description(description)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Active records keyed by slot
    pub fn ongoing(&self) -> &BTreeMap<EventKind, OngoingEvent> {
        &self.ongoing
    }

    /// Whether a slot currently holds an event
    pub fn is_active(&self, slot: EventKind) -> bool {
        self.ongoing.contains_key(&slot)
    }

    /// Lifecycle entries logged since the last drain
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Take the pending lifecycle entries, leaving the internal log empty
    pub fn drain_log(&mut self) -> EventLog {
        std::mem::take(&mut self.log)
    }

    /// Last year index generated, if any
    pub fn last_year(&self) -> Option<usize> {
        self.last_year
    }
}
