use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PITCHOVER_ALTITUDE, DEFAULT_TARGET_APOGEE};
use crate::errors::SimulationError;

use super::guidance::SearchSettings;
use super::rocket::VehicleConfig;

/// A complete search scenario: which vehicle, where it pitches over and which apogee it
/// has to reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub vehicle: VehicleConfig,
    pub target_apogee: f64,
    #[serde(default = "default_pitchover_altitude")]
    pub pitchover_altitude: f64,
    #[serde(default)]
    pub search: SearchSettings,
}

fn default_pitchover_altitude() -> f64 {
    DEFAULT_PITCHOVER_ALTITUDE
}

impl Default for Mission {
    fn default() -> Self {
        Mission {
            vehicle: VehicleConfig {
                frequency: 20,
                wet_mass: 9665.0,
                dry_mass: 3072.0,
                sea_level_thrust: 112_900.0,
                vacuum_thrust: 123_600.0,
                burn_duration: 142.0,
            },
            target_apogee: DEFAULT_TARGET_APOGEE,
            pitchover_altitude: DEFAULT_PITCHOVER_ALTITUDE,
            search: SearchSettings::default(),
        }
    }
}

impl Mission {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let file = File::open(path)?;
        let mission: Mission = serde_yaml::from_reader(file)?;
        mission.validate()?;
        Ok(mission)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, SimulationError> {
        let mission: Mission = serde_yaml::from_str(text)?;
        mission.validate()?;
        Ok(mission)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.vehicle.validate()?;
        self.search.validate()?;

        if !self.target_apogee.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "target apogee must be finite, got {}",
                self.target_apogee
            )));
        }
        if !(self.pitchover_altitude.is_finite() && self.pitchover_altitude >= 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "pitchover altitude must be a non-negative number, got {} m",
                self.pitchover_altitude
            )));
        }
        Ok(())
    }
}
