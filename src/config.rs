//! Simulation configuration.
//!
//! All simulation constants live in an explicit immutable [`SimConfig`]
//! passed to constructors, so trials stay independent and testable in
//! isolation.

use thiserror::Error;

/// Errors raised by configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("mission duration must be positive")]
    NonPositiveDuration,

    #[error("sensor count must be positive")]
    NoSensors,

    #[error("required sensors per mission must be positive")]
    NoRequiredSensors,

    #[error("required sensors per mission ({required}) exceeds sensor count ({available})")]
    RequiredExceedsSensors { required: usize, available: usize },

    #[error("mission batch must contain at least one mission")]
    EmptyMissionBatch,

    #[error("at least one trial is required")]
    NoTrials,

    #[error("maximum start gap must be positive")]
    NonPositiveStartGap,

    #[error("area of interest must have positive dimensions")]
    DegenerateArea,

    #[error("mission detection radius must be positive")]
    NonPositiveRadius,
}

/// Configuration for the allocation simulation.
///
/// Controls the area of interest, sensor energy budget, mission stream
/// shape, and trial repetition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    // --- Area of interest ---
    /// Largest x-coordinate within the area of interest.
    pub area_width: f64,
    /// Largest y-coordinate within the area of interest.
    pub area_height: f64,
    /// Detection radius around each mission epicenter.
    pub mission_radius: f64,

    // --- Sensors ---
    /// Energy every sensor starts a trial with.
    pub initial_energy: u64,
    /// Number of sensors placed per trial.
    pub sensor_count: usize,
    /// Distinct sensors required to fully staff one mission.
    pub required_sensors: usize,

    // --- Mission stream ---
    /// Duration of each mission in ticks; also its energy cost.
    pub mission_duration: u64,
    /// Missions generated per trial.
    pub mission_count: usize,
    /// Upper bound (exclusive) on the random gap between consecutive
    /// mission start times.
    pub max_start_gap: u64,

    // --- Repetition ---
    /// Number of independent trials averaged into the report.
    pub trials: usize,
}

impl SimConfig {
    /// Checks every parameter the strategies assume to be positive.
    ///
    /// The core itself degrades gracefully on an unsatisfiable mission, but
    /// an out-of-range configuration is reported here instead of producing a
    /// run whose every mission silently fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mission_duration == 0 {
            return Err(ConfigError::NonPositiveDuration);
        }
        if self.sensor_count == 0 {
            return Err(ConfigError::NoSensors);
        }
        if self.required_sensors == 0 {
            return Err(ConfigError::NoRequiredSensors);
        }
        if self.required_sensors > self.sensor_count {
            return Err(ConfigError::RequiredExceedsSensors {
                required: self.required_sensors,
                available: self.sensor_count,
            });
        }
        if self.mission_count == 0 {
            return Err(ConfigError::EmptyMissionBatch);
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.max_start_gap == 0 {
            return Err(ConfigError::NonPositiveStartGap);
        }
        if self.area_width <= 0.0 || self.area_height <= 0.0 {
            return Err(ConfigError::DegenerateArea);
        }
        if self.mission_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius);
        }
        Ok(())
    }

    /// Energy level below which a sensor counts as low-energy: one mission
    /// duration, i.e. the sensor can no longer take any mission.
    pub fn low_energy_threshold(&self) -> u64 {
        self.mission_duration
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            area_width: 50.0,
            area_height: 50.0,
            mission_radius: 5.0,
            initial_energy: 1000,
            sensor_count: 100,
            required_sensors: 3,
            mission_duration: 100,
            mission_count: 1000,
            max_start_gap: 50,
            trials: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_duration_rejected() {
        let cfg = SimConfig {
            mission_duration: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveDuration));
    }

    #[test]
    fn required_exceeding_sensor_count_rejected() {
        let cfg = SimConfig {
            sensor_count: 2,
            required_sensors: 3,
            ..SimConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::RequiredExceedsSensors {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn required_equal_to_sensor_count_accepted() {
        let cfg = SimConfig {
            sensor_count: 3,
            required_sensors: 3,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn zero_start_gap_rejected() {
        let cfg = SimConfig {
            max_start_gap: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveStartGap));
    }

    #[test]
    fn degenerate_area_rejected() {
        let cfg = SimConfig {
            area_width: 0.0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::DegenerateArea));
    }

    #[test]
    fn low_energy_threshold_is_mission_duration() {
        let cfg = SimConfig {
            mission_duration: 250,
            ..SimConfig::default()
        };
        assert_eq!(cfg.low_energy_threshold(), 250);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_serde_roundtrip() {
        let cfg = SimConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let restored: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cfg);
    }
}
