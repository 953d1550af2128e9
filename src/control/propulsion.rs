use super::environment::Atmosphere;
use super::rocket::VehicleConfig;

/// Thrust and mass model of a single engine burning at a constant rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionSystem {
    pub sea_level_thrust: f64,
    pub vacuum_thrust: f64,
    pub wet_mass: f64,
    pub dry_mass: f64,
    pub mass_flow_rate: f64,
}

impl PropulsionSystem {
    pub fn new(vehicle: &VehicleConfig) -> Self {
        PropulsionSystem {
            sea_level_thrust: vehicle.sea_level_thrust,
            vacuum_thrust: vehicle.vacuum_thrust,
            wet_mass: vehicle.wet_mass,
            dry_mass: vehicle.dry_mass,
            mass_flow_rate: vehicle.mass_flow_rate(),
        }
    }

    /// Linear interpolation between vacuum (fraction 0) and sea-level (fraction 1) thrust.
    pub fn thrust(&self, pressure_fraction: f64) -> f64 {
        self.vacuum_thrust + (self.sea_level_thrust - self.vacuum_thrust) * pressure_fraction
    }

    pub fn thrust_at_altitude(&self, altitude: f64) -> f64 {
        self.thrust(Atmosphere::pressure_fraction(altitude))
    }

    /// Vehicle mass after `elapsed_time` seconds, floored at the dry mass once the
    /// propellant is gone.
    pub fn mass(&self, elapsed_time: f64) -> f64 {
        (self.wet_mass + self.mass_flow_rate * elapsed_time).max(self.dry_mass)
    }

    pub fn is_out_of_propellant(&self, elapsed_time: f64) -> bool {
        self.wet_mass + self.mass_flow_rate * elapsed_time <= self.dry_mass
    }
}
