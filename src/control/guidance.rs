use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        APOGEE_TOLERANCE, LINEAR_SCAN_STEP_DEG, MAX_BISECTION_ITERATIONS, MIN_SCAN_STEP_DEG,
        RIGHT_ANGLE_DEG, VERTICAL_ANGLE,
    },
    errors::SimulationError,
    telemetry_system::telemetry::Telemetry,
    trajectory_system::ascent::{AscentSimulator, SimulationResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    LinearScan,
    #[default]
    Bisection,
}

/// Reference frame of a reported pitch angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleConvention {
    /// Degrees above the local horizon; what the linear scan reports.
    FromHorizon,
    /// Degrees away from vertical (`90° - angle above horizon`); what bisection reports.
    FromVertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub strategy: SearchStrategy,
    pub scan_step_deg: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            strategy: SearchStrategy::default(),
            scan_step_deg: LINEAR_SCAN_STEP_DEG,
            tolerance: APOGEE_TOLERANCE,
            max_iterations: MAX_BISECTION_ITERATIONS,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.scan_step_deg.is_finite() && self.scan_step_deg > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "scan step must be a positive number of degrees, got {}",
                self.scan_step_deg
            )));
        }
        if self.scan_step_deg < MIN_SCAN_STEP_DEG {
            return Err(SimulationError::InvalidConfiguration(format!(
                "scan step of {}° is below the {}° minimum",
                self.scan_step_deg, MIN_SCAN_STEP_DEG
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "apogee tolerance must be positive, got {} m",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "bisection needs at least one iteration".to_string(),
            ));
        }
        Ok(())
    }
}

/// A candidate pitch angle together with the trial that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchSolution {
    pub pitch_angle: f64, // rad above the horizon, as simulated
    pub convention: AngleConvention,
    pub trials: usize,
    pub result: SimulationResult,
}

impl PitchSolution {
    pub fn degrees_from_horizon(&self) -> f64 {
        self.pitch_angle.to_degrees()
    }

    pub fn degrees_from_vertical(&self) -> f64 {
        RIGHT_ANGLE_DEG - self.degrees_from_horizon()
    }

    /// The angle in this solution's own convention.
    pub fn reported_degrees(&self) -> f64 {
        match self.convention {
            AngleConvention::FromHorizon => self.degrees_from_horizon(),
            AngleConvention::FromVertical => self.degrees_from_vertical(),
        }
    }

    pub fn apogee(&self) -> f64 {
        self.result.apogee
    }

    pub fn cutoff_altitude(&self) -> f64 {
        self.result.cutoff_altitude
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Converged(PitchSolution),
    /// Linear scan reached 90° without meeting the target; the angle is saturated.
    Exhausted(PitchSolution),
    /// Bisection ran out of iterations or bracket without entering the tolerance band.
    NonConvergence(PitchSolution),
}

impl SearchOutcome {
    pub fn solution(&self) -> &PitchSolution {
        match self {
            SearchOutcome::Converged(solution)
            | SearchOutcome::Exhausted(solution)
            | SearchOutcome::NonConvergence(solution) => solution,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, SearchOutcome::Converged(_))
    }
}

/// Searches for the pitchover angle that yields a target apogee.
pub struct PitchAngleSearch {
    simulator: AscentSimulator,
    pitchover_altitude: f64,
    settings: SearchSettings,
    telemetry: Telemetry,
}

impl PitchAngleSearch {
    pub fn new(
        simulator: AscentSimulator,
        pitchover_altitude: f64,
        settings: SearchSettings,
    ) -> Result<Self, SimulationError> {
        if !(pitchover_altitude.is_finite() && pitchover_altitude >= 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "pitchover altitude must be a non-negative number, got {} m",
                pitchover_altitude
            )));
        }
        settings.validate()?;

        Ok(PitchAngleSearch {
            simulator,
            pitchover_altitude,
            settings,
            telemetry: Telemetry::new(),
        })
    }

    pub fn simulator(&self) -> &AscentSimulator {
        &self.simulator
    }

    /// Trial statistics of the most recent search.
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn run(&mut self, strategy: SearchStrategy, target_apogee: f64) -> SearchOutcome {
        match strategy {
            SearchStrategy::LinearScan => self.linear_scan(target_apogee),
            SearchStrategy::Bisection => self.bisection(target_apogee),
        }
    }

    /// Tries angles upward from 0° in fixed steps and stops at the first one whose apogee
    /// meets the target. The reported angle is measured from the horizon.
    pub fn linear_scan(&mut self, target_apogee: f64) -> SearchOutcome {
        self.telemetry = Telemetry::with_target(target_apogee);

        let step = self.settings.scan_step_deg;
        let last_index = (RIGHT_ANGLE_DEG / step).ceil() as usize;
        let mut index = 0;

        loop {
            let degrees = (index as f64 * step).min(RIGHT_ANGLE_DEG);
            let result = self.trial(degrees.to_radians());
            let met = result.apogee >= target_apogee;
            let solution = PitchSolution {
                pitch_angle: degrees.to_radians(),
                convention: AngleConvention::FromHorizon,
                trials: index + 1,
                result,
            };

            if met {
                log::info!(
                    "Linear scan converged at {:.3}° after {} trials (apogee {:.1} m)",
                    degrees,
                    solution.trials,
                    solution.apogee()
                );
                return SearchOutcome::Converged(solution);
            }
            if index >= last_index {
                log::warn!(
                    "Linear scan exhausted at {:.3}°: apogee {:.1} m is short of {:.1} m",
                    degrees,
                    solution.apogee(),
                    target_apogee
                );
                return SearchOutcome::Exhausted(solution);
            }
            index += 1;
        }
    }

    /// Bisects the 0..90° bracket until a trial lands within the tolerance band. The
    /// reported angle is measured from vertical.
    pub fn bisection(&mut self, target_apogee: f64) -> SearchOutcome {
        self.telemetry = Telemetry::with_target(target_apogee);

        let tolerance = self.settings.tolerance;
        let mut low = 0.0_f64;
        let mut high = VERTICAL_ANGLE;
        let mut iteration = 0;

        loop {
            iteration += 1;
            let midpoint = 0.5 * (low + high);
            let result = self.trial(midpoint);
            let apogee = result.apogee;
            let solution = PitchSolution {
                pitch_angle: midpoint,
                convention: AngleConvention::FromVertical,
                trials: iteration,
                result,
            };

            if !apogee.is_finite() {
                log::warn!("Bisection produced a non-finite apogee at {} rad", midpoint);
                return SearchOutcome::NonConvergence(solution);
            }

            if apogee < target_apogee - tolerance {
                low = midpoint;
            } else if apogee > target_apogee + tolerance {
                high = midpoint;
            } else {
                log::info!(
                    "Bisection converged at {:.6}° from vertical after {} trials (apogee {:.1} m)",
                    solution.degrees_from_vertical(),
                    iteration,
                    apogee
                );
                return SearchOutcome::Converged(solution);
            }

            let next = 0.5 * (low + high);
            let collapsed = next <= low || next >= high;
            if collapsed || iteration >= self.settings.max_iterations {
                log::warn!(
                    "Bisection did not converge after {} trials: bracket [{:e}, {:e}] rad, apogee {:.1} m",
                    iteration,
                    low,
                    high,
                    apogee
                );
                return SearchOutcome::NonConvergence(solution);
            }
        }
    }

    fn trial(&mut self, pitch_angle: f64) -> SimulationResult {
        let result = self.simulator.run(self.pitchover_altitude, pitch_angle);
        log::debug!(
            "Trial at {:.6}°: apogee {:.2} m, cutoff {:.2} m, {:?}",
            pitch_angle.to_degrees(),
            result.apogee,
            result.cutoff_altitude,
            result.outcome
        );
        self.telemetry.record_trial(&result);
        result
    }
}
