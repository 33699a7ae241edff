//! Conceptual sizing chain for small electric aircraft.
//!
//! The chain runs in four steps: evaluate the power each mission phase
//! demands at a candidate takeoff mass, size a battery pack against the
//! peak-power and endurance constraints, predict the empty mass a plane of
//! that takeoff mass should have from a historical fleet trend, and iterate
//! the takeoff mass until the empty mass left over for structure matches
//! the prediction.

pub mod battery;
pub mod catalog;
pub mod iterate;
pub mod power;
pub mod trend;

pub use battery::{BatteryError, BatteryPackSizing, size_battery_pack};
pub use iterate::{IterationSettings, MassIterationError, MassIterationResult, converge};
pub use power::{PhasePowerEntry, PhasePowerTable, PowerError, compute_phase_powers};
pub use trend::{AircraftClass, HistoricalTrend, SimilarPlane, TrendError, TrendLine};
