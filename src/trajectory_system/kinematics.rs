use crate::{
    constants::{DEGENERATE_HORIZONTAL_VELOCITY, GRAVITY, VERTICAL_ANGLE},
    control::rocket::VehicleConfig,
    utils::vector2d::Vector2D,
};

/// Kinematic state of one trial. Each trial starts from `FlightState::default()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub time: f64,              // s since ignition
    pub flight_path_angle: f64, // rad above the horizon
    pub velocity: Vector2D,     // m/s, x horizontal, y vertical
    pub altitude: f64,          // m above the launch point
    pub impacted: bool,
}

impl Default for FlightState {
    fn default() -> Self {
        FlightState {
            time: 0.0,
            flight_path_angle: VERTICAL_ANGLE,
            velocity: Vector2D::new(0.0, 0.0),
            altitude: 0.0,
            impacted: false,
        }
    }
}

impl FlightState {
    pub fn vertical_velocity(&self) -> f64 {
        self.velocity.y
    }

    pub fn horizontal_velocity(&self) -> f64 {
        self.velocity.x
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Same state with the velocity vector angle forced to `angle`.
    pub fn pitched_to(self, angle: f64) -> Self {
        FlightState {
            flight_path_angle: angle,
            ..self
        }
    }
}

/// Angle of `velocity` above the horizon, or `None` while the horizontal component is too
/// small for the angle to be defined.
pub fn flight_path_angle(velocity: Vector2D) -> Option<f64> {
    if velocity.x.abs() < DEGENERATE_HORIZONTAL_VELOCITY {
        None
    } else {
        Some(velocity.angle())
    }
}

/// Thrust and gravity acceleration acting on `state`.
pub fn acceleration(state: &FlightState, vehicle: &VehicleConfig) -> Vector2D {
    let propulsion = vehicle.propulsion();
    let thrust_acceleration =
        propulsion.thrust_at_altitude(state.altitude) / propulsion.mass(state.time);

    Vector2D::new(
        thrust_acceleration * state.flight_path_angle.cos(),
        thrust_acceleration * state.flight_path_angle.sin() + GRAVITY,
    )
}

/// Advances `state` by one explicit Euler step of `1 / frequency` seconds.
///
/// The flight path angle is re-derived from the new velocity; while the horizontal
/// velocity is degenerate the previous angle is held.
pub fn step(state: &FlightState, vehicle: &VehicleConfig) -> FlightState {
    let frequency = vehicle.frequency as f64;

    let velocity = state.velocity + acceleration(state, vehicle) / frequency;
    let altitude = state.altitude + velocity.y / frequency;
    let flight_path_angle = flight_path_angle(velocity).unwrap_or(state.flight_path_angle);

    FlightState {
        time: state.time + vehicle.timestep(),
        flight_path_angle,
        velocity,
        altitude,
        impacted: state.impacted || altitude < 0.0,
    }
}
