pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::environment::Atmosphere;
pub use control::guidance::{
    AngleConvention, PitchAngleSearch, PitchSolution, SearchOutcome, SearchSettings,
    SearchStrategy,
};
pub use control::mission::Mission;
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::VehicleConfig;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::apogee::estimate_apogee;
pub use trajectory_system::ascent::{AscentOutcome, AscentSimulator, SimulationResult};
pub use trajectory_system::kinematics::{step, FlightState};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
