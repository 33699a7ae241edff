//! Historical weight-trend regression over a reference fleet.
//!
//! Empty mass scales with takeoff mass as a power law across similar
//! aircraft, so the fit runs as ordinary least squares in base-10 log-log
//! space. The 2x2 normal equations are solved explicitly; a vanishing
//! determinant is the single signal for every degenerate fleet (too few
//! planes, or all takeoff masses coincident).

use thiserror::Error;

/// Determinant magnitude below which the normal equations are treated as
/// singular.
const DEGENERATE_DETERMINANT_EPS: f64 = 1.0e-12;

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("reference plane masses must be positive")]
    NonPositiveMass,
    #[error("trend fit requires at least two reference planes")]
    FleetTooSmall,
    #[error("reference fleet is degenerate: takeoff masses do not spread")]
    DegenerateFleet,
}

/// Airframe category a reference fleet can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftClass {
    Trainer,
    EnduranceUav,
    MotorGlider,
}

/// One reference aircraft, with its logs precomputed at construction.
#[derive(Debug, Clone)]
pub struct SimilarPlane {
    pub takeoff_mass_kg: f64,
    pub empty_mass_kg: f64,
    pub log_takeoff_mass: f64,
    pub log_empty_mass: f64,
}

impl SimilarPlane {
    pub fn new(takeoff_mass_kg: f64, empty_mass_kg: f64) -> Result<Self, TrendError> {
        if takeoff_mass_kg <= 0.0 || empty_mass_kg <= 0.0 {
            return Err(TrendError::NonPositiveMass);
        }
        Ok(Self {
            takeoff_mass_kg,
            empty_mass_kg,
            log_takeoff_mass: takeoff_mass_kg.log10(),
            log_empty_mass: empty_mass_kg.log10(),
        })
    }
}

/// Fitted log-log regression line.
#[derive(Debug, Clone, Copy)]
pub struct TrendLine {
    pub slope: f64,
    pub y_intercept: f64,
}

impl TrendLine {
    /// Empty mass the trend predicts for a takeoff mass (kg).
    pub fn empty_mass_required_kg(&self, takeoff_mass_kg: f64) -> f64 {
        10.0_f64.powf(self.slope * takeoff_mass_kg.log10() + self.y_intercept)
    }
}

/// The reference fleet a trend line is fitted against.
#[derive(Debug, Clone, Default)]
pub struct HistoricalTrend {
    similar_planes: Vec<SimilarPlane>,
}

impl HistoricalTrend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_similar_planes<I>(&mut self, planes: I)
    where
        I: IntoIterator<Item = SimilarPlane>,
    {
        self.similar_planes.extend(planes);
    }

    pub fn similar_planes(&self) -> &[SimilarPlane] {
        &self.similar_planes
    }

    /// Fit the log-log regression line over the current fleet.
    pub fn fit(&self) -> Result<TrendLine, TrendError> {
        if self.similar_planes.len() < 2 {
            return Err(TrendError::FleetTooSmall);
        }

        let n = self.similar_planes.len() as f64;
        let mut sum_t = 0.0;
        let mut sum_t2 = 0.0;
        let mut sum_e = 0.0;
        let mut sum_et = 0.0;
        for plane in &self.similar_planes {
            sum_t += plane.log_takeoff_mass;
            sum_t2 += plane.log_takeoff_mass * plane.log_takeoff_mass;
            sum_e += plane.log_empty_mass;
            sum_et += plane.log_empty_mass * plane.log_takeoff_mass;
        }

        // Normal equations in log space:
        //   [ n    Σt  ] [intercept]   [ Σe  ]
        //   [ Σt   Σt² ] [slope    ] = [ Σet ]
        let determinant = n * sum_t2 - sum_t * sum_t;
        if determinant.abs() < DEGENERATE_DETERMINANT_EPS {
            return Err(TrendError::DegenerateFleet);
        }

        // Invert the 2x2 through the adjugate.
        let y_intercept = (sum_t2 * sum_e - sum_t * sum_et) / determinant;
        let slope = (n * sum_et - sum_t * sum_e) / determinant;

        Ok(TrendLine { slope, y_intercept })
    }
}
