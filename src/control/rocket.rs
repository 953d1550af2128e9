use serde::{Deserialize, Serialize};

use crate::constants::MAX_INTEGRATION_STEPS;
use crate::errors::SimulationError;

use super::propulsion::PropulsionSystem;

/// Single-stage vehicle description. Construct through [`VehicleConfig::new`] or call
/// [`VehicleConfig::validate`] after deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub frequency: u32,        // Sim updates per second (Hz)
    pub wet_mass: f64,         // kg, with propellant
    pub dry_mass: f64,         // kg, without propellant
    pub sea_level_thrust: f64, // N at 1 atm
    pub vacuum_thrust: f64,    // N
    pub burn_duration: f64,    // s
}

impl VehicleConfig {
    pub fn new(
        frequency: u32,
        wet_mass: f64,
        dry_mass: f64,
        sea_level_thrust: f64,
        vacuum_thrust: f64,
        burn_duration: f64,
    ) -> Result<Self, SimulationError> {
        let config = VehicleConfig {
            frequency,
            wet_mass,
            dry_mass,
            sea_level_thrust,
            vacuum_thrust,
            burn_duration,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("wet_mass", self.wet_mass),
            ("dry_mass", self.dry_mass),
            ("sea_level_thrust", self.sea_level_thrust),
            ("vacuum_thrust", self.vacuum_thrust),
            ("burn_duration", self.burn_duration),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.frequency == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "frequency must be at least 1 Hz".to_string(),
            ));
        }
        if self.dry_mass <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "dry mass must be positive, got {} kg",
                self.dry_mass
            )));
        }
        if self.dry_mass >= self.wet_mass {
            return Err(SimulationError::InvalidConfiguration(format!(
                "dry mass ({} kg) must be below wet mass ({} kg)",
                self.dry_mass, self.wet_mass
            )));
        }
        if self.burn_duration <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "burn duration must be positive, got {} s",
                self.burn_duration
            )));
        }
        if self.sea_level_thrust < 0.0 || self.vacuum_thrust < 0.0 {
            return Err(SimulationError::InvalidConfiguration(
                "thrust cannot be negative".to_string(),
            ));
        }
        let burn_steps = self.burn_duration * self.frequency as f64;
        if burn_steps > MAX_INTEGRATION_STEPS as f64 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "burn of {} s at {} Hz needs {:.0} steps, more than the {} allowed",
                self.burn_duration, self.frequency, burn_steps, MAX_INTEGRATION_STEPS
            )));
        }

        Ok(())
    }

    /// Propellant consumption in kg/s. Negative: mass decreases over time.
    pub fn mass_flow_rate(&self) -> f64 {
        (self.dry_mass - self.wet_mass) / self.burn_duration
    }

    pub fn timestep(&self) -> f64 {
        1.0 / self.frequency as f64
    }

    /// Upper bound on integration steps for one burn.
    pub fn max_steps(&self) -> usize {
        ((self.burn_duration * self.frequency as f64).ceil() as usize).saturating_add(2)
    }

    pub fn propulsion(&self) -> PropulsionSystem {
        PropulsionSystem::new(self)
    }
}
