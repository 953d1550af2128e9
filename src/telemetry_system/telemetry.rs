use crate::control::environment::Atmosphere;
use crate::trajectory_system::{ascent::SimulationResult, kinematics::FlightState};

/// One search trial, reduced to what the report needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    pub pitch_angle: f64,
    pub apogee: f64,
    pub cutoff_altitude: f64,
    pub impacted: bool,
}

pub struct Telemetry {
    pub log: Vec<String>,
    target_apogee: Option<f64>,
    trials: usize,
    impacts: usize,
    max_apogee: f64,
    min_apogee: f64,
    closest_trial: Option<TrialRecord>,
    log_interval: f64,
    next_log_time: f64,
    max_altitude: f64,
    max_speed: f64,
    flight_time: f64,
    was_pitched: bool,
    pitchover_time: Option<f64>,
    atmosphere_exit_time: Option<f64>,
    burnout_time: Option<f64>,
    impact_time: Option<f64>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            target_apogee: None,
            trials: 0,
            impacts: 0,
            max_apogee: f64::MIN,
            min_apogee: f64::MAX,
            closest_trial: None,
            log_interval: 10.0,
            next_log_time: 0.0,
            max_altitude: 0.0,
            max_speed: 0.0,
            flight_time: 0.0,
            was_pitched: false,
            pitchover_time: None,
            atmosphere_exit_time: None,
            burnout_time: None,
            impact_time: None,
        }
    }

    pub fn with_target(target_apogee: f64) -> Self {
        Telemetry {
            target_apogee: Some(target_apogee),
            ..Self::new()
        }
    }

    /// Seconds of flight time between trajectory log entries.
    pub fn with_log_interval(mut self, seconds: f64) -> Self {
        self.log_interval = seconds;
        self
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn record_trial(&mut self, result: &SimulationResult) {
        self.trials += 1;
        if result.impacted() {
            self.impacts += 1;
        }
        self.max_apogee = self.max_apogee.max(result.apogee);
        self.min_apogee = self.min_apogee.min(result.apogee);

        let record = TrialRecord {
            pitch_angle: result.pitch_angle,
            apogee: result.apogee,
            cutoff_altitude: result.cutoff_altitude,
            impacted: result.impacted(),
        };
        if let Some(target) = self.target_apogee {
            let closer = self
                .closest_trial
                .map_or(true, |best| (record.apogee - target).abs() < (best.apogee - target).abs());
            if closer {
                self.closest_trial = Some(record);
            }
        }
    }

    /// Tracks one integrated state of a replayed trajectory. `pitched` tells whether the
    /// pitch event has happened by this state.
    pub fn collect_data(&mut self, state: &FlightState, pitched: bool) {
        self.flight_time = state.time;
        self.max_altitude = self.max_altitude.max(state.altitude);
        self.max_speed = self.max_speed.max(state.speed());

        if pitched && !self.was_pitched {
            self.pitchover_time = Some(state.time);
        }
        self.was_pitched = pitched;
        if !Atmosphere::is_in_atmosphere(state.altitude) && self.atmosphere_exit_time.is_none() {
            self.atmosphere_exit_time = Some(state.time);
        }
        if state.impacted && self.impact_time.is_none() {
            self.impact_time = Some(state.time);
        }

        if state.time >= self.next_log_time || state.impacted {
            self.log.push(format!(
                "Time: {} | Altitude: {} | Velocity: x = {:.2} m/s, y = {:.2} m/s | Flight path: {:.3}°",
                Self::format_time(state.time),
                Self::format_altitude(state.altitude),
                state.horizontal_velocity(),
                state.vertical_velocity(),
                state.flight_path_angle.to_degrees()
            ));
            self.next_log_time = state.time + self.log_interval;
        }
    }

    /// Marks engine cutoff; only the first call counts.
    pub fn record_burnout(&mut self, time: f64) {
        if self.burnout_time.is_none() {
            self.burnout_time = Some(time);
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn impacts(&self) -> usize {
        self.impacts
    }

    pub fn max_apogee(&self) -> Option<f64> {
        (self.trials > 0).then_some(self.max_apogee)
    }

    pub fn min_apogee(&self) -> Option<f64> {
        (self.trials > 0).then_some(self.min_apogee)
    }

    pub fn closest_trial(&self) -> Option<TrialRecord> {
        self.closest_trial
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn pitchover_time(&self) -> Option<f64> {
        self.pitchover_time
    }

    pub fn atmosphere_exit_time(&self) -> Option<f64> {
        self.atmosphere_exit_time
    }

    pub fn burnout_time(&self) -> Option<f64> {
        self.burnout_time
    }

    pub fn impact_time(&self) -> Option<f64> {
        self.impact_time
    }

    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        if self.trials > 0 {
            lines.push(format!(
                "Trials: {} ({} ended in ground impact)",
                self.trials, self.impacts
            ));
        }

        if let (Some(min), Some(max)) = (self.min_apogee(), self.max_apogee()) {
            lines.push(format!(
                "Apogee range: {} .. {}",
                Self::format_altitude(min),
                Self::format_altitude(max)
            ));
        }
        if let Some(best) = self.closest_trial {
            lines.push(format!(
                "Closest trial: {:.6}° above horizon, apogee {}",
                best.pitch_angle.to_degrees(),
                Self::format_altitude(best.apogee)
            ));
        }
        if self.flight_time > 0.0 {
            lines.push(format!("Flight time: {}", Self::format_time(self.flight_time)));
            lines.push(format!("Max Altitude: {}", Self::format_altitude(self.max_altitude)));
            lines.push(format!("Max Speed: {:.2} m/s", self.max_speed));
        }
        if let Some(time) = self.pitchover_time {
            lines.push(format!("Pitchover at: {}", Self::format_time(time)));
        }
        if let Some(time) = self.atmosphere_exit_time {
            lines.push(format!("Left atmosphere at: {}", Self::format_time(time)));
        }
        if let Some(time) = self.burnout_time {
            lines.push(format!("Burnout at: {}", Self::format_time(time)));
        }
        if let Some(time) = self.impact_time {
            lines.push(format!("Ground impact at: {}", Self::format_time(time)));
        }

        lines.join("\n")
    }

    pub fn display_data(&self) {
        if !self.log.is_empty() {
            println!("--- Trajectory ---");
            for entry in &self.log {
                println!("{}", entry);
            }
            println!("--- End of Trajectory ---");
        }

        println!("\n--- Simulation Summary ---");
        println!("{}", self.summary());
    }
}
