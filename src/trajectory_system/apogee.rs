use crate::constants::GRAVITY;

use super::kinematics::FlightState;

/// Peak altitude reached by coasting from `state` under constant gravity with the engine
/// off. Only meaningful for the state at which integration stopped.
pub fn estimate_apogee(state: &FlightState) -> f64 {
    state.altitude - state.vertical_velocity().powi(2) / (2.0 * GRAVITY)
}
