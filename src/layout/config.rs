//! Configuration for annotation placement

/// Fallback scan step used when a configured step is not a positive number
pub const DEFAULT_SCAN_STEP: f64 = 5.0;

/// Finest fallback scan step honoured; smaller steps are rounded up to it
pub const MIN_SCAN_STEP: f64 = 0.5;

/// Configuration options for grouping and collision resolution
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Maximum distance in days between an annotation and any member of a group it joins
    pub proximity_days: i64,

    /// Horizontal distance (days, offsets included) below which two labels may overlap
    pub horizontal_clearance: f64,

    /// Vertical distance below which two labels may overlap
    pub vertical_clearance: f64,

    /// Vertical shifts tried, in order, when a base position collides
    pub shift_candidates: Vec<f64>,

    /// Step of the top-to-bottom scan used when every shift collides.
    ///
    /// Non-positive or NaN values scan with `DEFAULT_SCAN_STEP`; values below
    /// `MIN_SCAN_STEP` are raised to it.
    pub scan_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            proximity_days: 5,
            horizontal_clearance: 3.0,
            vertical_clearance: 30.0,
            shift_candidates: vec![0.0, 15.0, -15.0, 30.0, -30.0, 45.0, -45.0],
            scan_step: DEFAULT_SCAN_STEP,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping distance in days
    pub fn with_proximity_days(mut self, days: i64) -> Self {
        self.proximity_days = days;
        self
    }

    /// Set the horizontal and vertical collision clearances
    pub fn with_clearance(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_clearance = horizontal;
        self.vertical_clearance = vertical;
        self
    }

    /// Set the ordered vertical shifts tried on collision
    pub fn with_shift_candidates(mut self, shifts: impl Into<Vec<f64>>) -> Self {
        self.shift_candidates = shifts.into();
        self
    }

    /// Set the fallback scan step; non-positive values are ignored
    pub fn with_scan_step(mut self, step: f64) -> Self {
        if step > 0.0 {
            self.scan_step = step;
        }
        self
    }

    /// Scan step actually used by the collision resolver
    pub fn effective_scan_step(&self) -> f64 {
        if self.scan_step > 0.0 {
            self.scan_step.max(MIN_SCAN_STEP)
        } else {
            DEFAULT_SCAN_STEP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.proximity_days, 5);
        assert_eq!(config.horizontal_clearance, 3.0);
        assert_eq!(config.vertical_clearance, 30.0);
        assert_eq!(
            config.shift_candidates,
            vec![0.0, 15.0, -15.0, 30.0, -30.0, 45.0, -45.0]
        );
        assert_eq!(config.scan_step, 5.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_proximity_days(2)
            .with_clearance(1.5, 20.0)
            .with_shift_candidates([0.0, 10.0]);

        assert_eq!(config.proximity_days, 2);
        assert_eq!(config.horizontal_clearance, 1.5);
        assert_eq!(config.vertical_clearance, 20.0);
        assert_eq!(config.shift_candidates, vec![0.0, 10.0]);
    }

    #[test]
    fn test_scan_step_rejects_non_positive() {
        let config = LayoutConfig::new().with_scan_step(0.0).with_scan_step(-5.0);
        assert_eq!(config.scan_step, 5.0);
    }

    #[test]
    fn test_effective_scan_step_guards_field_literals() {
        let step = |scan_step| LayoutConfig {
            scan_step,
            ..Default::default()
        }
        .effective_scan_step();

        assert_eq!(step(0.0), DEFAULT_SCAN_STEP);
        assert_eq!(step(-3.0), DEFAULT_SCAN_STEP);
        assert_eq!(step(f64::NAN), DEFAULT_SCAN_STEP);
        assert_eq!(step(1e-12), MIN_SCAN_STEP);
        assert_eq!(step(10.0), 10.0);
    }
}
