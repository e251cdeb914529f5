//! Economic events
//!
//! - **types**: event values, categories and scenario schedules
//! - **catalog**: constructors for every event profile
//! - **generator**: per-year stochastic event process
//! - **handler**: scheduled scenario resolution

pub mod catalog;
pub mod generator;
pub mod handler;
pub mod types;

pub use generator::{EventGenerator, OngoingEvent};
pub use handler::ScenarioEventHandler;
pub use types::{EconomicEvent, EventImpact, EventKind, EventSchedule, ScenarioEvent, ScheduledEvent};
