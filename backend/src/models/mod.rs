//! Domain models for the fiscal simulator

pub mod event;
pub mod snapshot;
pub mod state;

// Re-exports
pub use event::{Event, EventLog};
pub use snapshot::YearlySnapshot;
pub use state::{EconomicState, YearFlows, YearRates};
