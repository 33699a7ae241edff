//! Conceptual sizing toolkit for small electric aircraft.
//!
//! The workspace splits the sizing chain into small crates; this root crate
//! stitches them back together so front-ends (CLI, tests, future GUIs)
//! share one surface.

pub use esizer_core::{constants, units};

pub use esizer_config as config;
pub use esizer_export as export;
pub use esizer_matching as matching;
pub use esizer_mission as mission;
pub use esizer_pattern as pattern;
pub use esizer_powerplant as powerplant;
pub use esizer_sizing as sizing;
