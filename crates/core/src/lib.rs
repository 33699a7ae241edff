//! Core units, constants, and conversion helpers for the Electric Aircraft Sizer workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Basic unit conversion helpers.
///
/// Battery datasheets quote capacity in ampere-hours, specific energy in
/// watt-hours per kilogram, and discharge limits as hourly C-rates; the
/// sizing math runs entirely in seconds, so everything crosses through here
/// exactly once.
pub mod units {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert an hourly rate (1/h) to a per-second rate (1/s).
    #[inline]
    pub fn per_hour_to_per_second(v: f64) -> f64 {
        v / SECONDS_PER_HOUR
    }

    /// Convert ampere-hours to ampere-seconds (coulombs).
    #[inline]
    pub fn ampere_hours_to_ampere_seconds(v: f64) -> f64 {
        v * SECONDS_PER_HOUR
    }

    /// Convert watt-hours to joules. Also applies to Wh/kg → J/kg.
    #[inline]
    pub fn watt_hours_to_joules(v: f64) -> f64 {
        v * SECONDS_PER_HOUR
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn degrees_to_radians(v: f64) -> f64 {
        v * std::f64::consts::PI / 180.0
    }
}
