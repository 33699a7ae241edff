//! Mission profile models.
//!
//! A mission is an ordered list of flight phases. Phases may repeat (taxi at
//! both ends, circuits in the pattern); energy accounting must see every
//! occurrence while the peak-power scan only needs the distinct set, so the
//! mission keeps both views in sync.

/// Fraction of nominal pack voltage still available at the low-voltage
/// cutoff, used when a mission does not override it.
pub const DEFAULT_LOW_VOLTAGE_RATIO: f64 = 0.8;

/// One segment of a mission, described by its endpoint kinematics.
///
/// Speeds are airspeeds in m/s. `speed_change_m_s` is signed (negative while
/// decelerating), and `vertical_speed_m_s` is signed (negative in descent).
/// Value equality over every field is what makes two occurrences "the same
/// phase" for de-duplication.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub name: String,
    pub final_speed_m_s: f64,
    pub lift_over_drag: f64,
    pub duration_s: f64,
    pub vertical_speed_m_s: f64,
    pub speed_change_m_s: f64,
}

impl Phase {
    pub fn new(
        name: &str,
        final_speed_m_s: f64,
        lift_over_drag: f64,
        duration_s: f64,
        vertical_speed_m_s: f64,
        speed_change_m_s: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            final_speed_m_s,
            lift_over_drag,
            duration_s,
            vertical_speed_m_s,
            speed_change_m_s,
        }
    }

    /// Airspeed at the start of the phase, recovered from the endpoint and
    /// the signed change.
    pub fn initial_speed_m_s(&self) -> f64 {
        self.final_speed_m_s - self.speed_change_m_s
    }

    /// The larger of the entry and exit airspeeds, whichever way the phase
    /// accelerates.
    pub fn peak_speed_m_s(&self) -> f64 {
        self.final_speed_m_s.max(self.initial_speed_m_s())
    }
}

/// A mission profile plus the top-level sizing inputs tied to it.
///
/// `all_phases` preserves every occurrence in flight order; `unique_phases`
/// holds the first occurrence of each distinct phase, in first-seen order.
#[derive(Debug, Clone)]
pub struct Mission {
    pub takeoff_mass_guess_kg: f64,
    pub payload_kg: f64,
    pub low_voltage_ratio: f64,
    all_phases: Vec<Phase>,
    unique_phases: Vec<Phase>,
}

impl Mission {
    pub fn new(takeoff_mass_guess_kg: f64, payload_kg: f64) -> Self {
        Self {
            takeoff_mass_guess_kg,
            payload_kg,
            low_voltage_ratio: DEFAULT_LOW_VOLTAGE_RATIO,
            all_phases: Vec::new(),
            unique_phases: Vec::new(),
        }
    }

    /// Override the low-voltage derating ratio for packs flown below the
    /// default cutoff.
    pub fn with_low_voltage_ratio(mut self, ratio: f64) -> Self {
        self.low_voltage_ratio = ratio;
        self
    }

    /// Append phases in flight order, refreshing the unique set.
    pub fn add_phases<I>(&mut self, phases: I)
    where
        I: IntoIterator<Item = Phase>,
    {
        self.all_phases.extend(phases);
        self.rebuild_unique();
    }

    /// Every phase occurrence, in flight order.
    pub fn all_phases(&self) -> &[Phase] {
        &self.all_phases
    }

    /// The distinct phases, first occurrence first.
    pub fn unique_phases(&self) -> &[Phase] {
        &self.unique_phases
    }

    fn rebuild_unique(&mut self) {
        self.unique_phases.clear();
        for phase in &self.all_phases {
            if !self.unique_phases.contains(phase) {
                self.unique_phases.push(phase.clone());
            }
        }
    }
}
