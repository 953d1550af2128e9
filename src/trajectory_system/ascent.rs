use crate::{control::rocket::VehicleConfig, errors::SimulationError};

use super::{
    apogee::estimate_apogee,
    kinematics::{step, FlightState},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AscentOutcome {
    Burnout,
    GroundImpact { time: f64 },
    /// Step budget ran out while the engine was still burning.
    StepLimitReached { time: f64 },
}

/// Outcome of a single pitchover trial.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub pitch_angle: f64, // rad above the horizon
    pub apogee: f64,
    pub cutoff_altitude: f64,
    pub outcome: AscentOutcome,
    pub pitched_over: bool,
    pub steps: usize,
    pub final_state: FlightState,
}

impl SimulationResult {
    pub fn impacted(&self) -> bool {
        matches!(self.outcome, AscentOutcome::GroundImpact { .. })
    }
}

/// Runs the vertical climb / pitchover / burn sequence for one vehicle.
#[derive(Debug, Clone)]
pub struct AscentSimulator {
    vehicle: VehicleConfig,
}

impl AscentSimulator {
    pub fn new(vehicle: VehicleConfig) -> Result<Self, SimulationError> {
        vehicle.validate()?;
        Ok(AscentSimulator { vehicle })
    }

    pub fn vehicle(&self) -> &VehicleConfig {
        &self.vehicle
    }

    pub fn run(&self, pitchover_altitude: f64, pitch_angle: f64) -> SimulationResult {
        self.run_with(pitchover_altitude, pitch_angle, |_, _| {})
    }

    /// Same as [`run`](Self::run), handing every integrated state to `on_step` together
    /// with whether the pitchover has happened yet.
    pub fn run_with<F>(
        &self,
        pitchover_altitude: f64,
        pitch_angle: f64,
        on_step: F,
    ) -> SimulationResult
    where
        F: FnMut(&FlightState, bool),
    {
        self.run_bounded(
            pitchover_altitude,
            pitch_angle,
            self.vehicle.max_steps(),
            on_step,
        )
    }

    fn run_bounded<F>(
        &self,
        pitchover_altitude: f64,
        pitch_angle: f64,
        max_steps: usize,
        mut on_step: F,
    ) -> SimulationResult
    where
        F: FnMut(&FlightState, bool),
    {
        let burn_duration = self.vehicle.burn_duration;
        let mut state = FlightState::default();
        let mut steps = 0;

        while state.altitude < pitchover_altitude
            && !state.impacted
            && state.time <= burn_duration
            && steps < max_steps
        {
            state = step(&state, &self.vehicle);
            steps += 1;
            on_step(&state, false);
        }

        let pitched_over = !state.impacted && state.altitude >= pitchover_altitude;
        if pitched_over {
            state = state.pitched_to(pitch_angle);
        }

        while state.time <= burn_duration && !state.impacted && steps < max_steps {
            state = step(&state, &self.vehicle);
            steps += 1;
            on_step(&state, pitched_over);
        }

        let outcome = if state.impacted {
            log::trace!(
                "Hit ground at t+ {:.2}s (pitch {:.4}°)",
                state.time,
                pitch_angle.to_degrees()
            );
            AscentOutcome::GroundImpact { time: state.time }
        } else if state.time <= burn_duration {
            log::warn!(
                "Step limit of {} reached at t+ {:.2}s, before burnout at {:.2}s",
                max_steps,
                state.time,
                burn_duration
            );
            AscentOutcome::StepLimitReached { time: state.time }
        } else {
            AscentOutcome::Burnout
        };

        SimulationResult {
            pitch_angle,
            apogee: estimate_apogee(&state),
            cutoff_altitude: state.altitude,
            outcome,
            pitched_over,
            steps,
            final_state: state,
        }
    }
}
