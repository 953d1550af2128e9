// Physical Constants
pub const GRAVITY: f64 = -9.8; // m/s², negative is down

// Barometric Formula
pub const BAROMETRIC_COEFFICIENT: f64 = 2.25577e-5; // 1/m
pub const BAROMETRIC_EXPONENT: f64 = 5.25588;
pub const BAROMETRIC_CEILING: f64 = 44_330.0; // m, pressure taken as zero above

// Flight Path
pub const VERTICAL_ANGLE: f64 = std::f64::consts::FRAC_PI_2; // rad
pub const RIGHT_ANGLE_DEG: f64 = 90.0;
pub const DEGENERATE_HORIZONTAL_VELOCITY: f64 = 1e-9; // m/s

// Integration
pub const MAX_INTEGRATION_STEPS: usize = 100_000_000; // per trial

// Search Parameters
pub const LINEAR_SCAN_STEP_DEG: f64 = 0.001; // degrees per trial
pub const MIN_SCAN_STEP_DEG: f64 = 1e-6; // caps a scan at 90 million trials
pub const APOGEE_TOLERANCE: f64 = 0.1; // m
pub const MAX_BISECTION_ITERATIONS: usize = 64;

// Reference Scenario
pub const DEFAULT_PITCHOVER_ALTITUDE: f64 = 20.0; // m
pub const DEFAULT_TARGET_APOGEE: f64 = 100_000.0; // m
