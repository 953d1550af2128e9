use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use ascent_simulation::{
    errors::SimulationError, AngleConvention, AscentSimulator, Mission, PitchAngleSearch,
    SearchOutcome, SearchSettings, SearchStrategy, VehicleConfig,
};

// Helper function to create the reference single-stage vehicle
fn create_test_vehicle() -> VehicleConfig {
    VehicleConfig::new(20, 9665.0, 3072.0, 112_900.0, 123_600.0, 142.0)
        .expect("reference vehicle is valid")
}

fn create_search(scan_step_deg: f64) -> PitchAngleSearch {
    let simulator = AscentSimulator::new(create_test_vehicle()).expect("valid simulator");
    let settings = SearchSettings {
        scan_step_deg,
        ..SearchSettings::default()
    };
    PitchAngleSearch::new(simulator, 20.0, settings).expect("valid search")
}

#[test]
fn test_reference_scenario_bisection() {
    let mut search = create_search(0.001);
    let outcome = search.run(SearchStrategy::Bisection, 100_000.0);

    let solution = match &outcome {
        SearchOutcome::Converged(solution) => solution,
        other => panic!("bisection should converge, got {:?}", other),
    };

    let from_horizon = solution.degrees_from_horizon();
    assert!(from_horizon > 0.0 && from_horizon < 90.0);
    let reported = solution.reported_degrees();
    assert!(reported > 0.0 && reported < 90.0);
    assert_eq!(solution.convention, AngleConvention::FromVertical);

    assert_abs_diff_eq!(solution.apogee(), 100_000.0, epsilon = 0.1);
    assert!(!solution.result.impacted());
    assert!(solution.cutoff_altitude() > 0.0);
    assert!(solution.cutoff_altitude() < solution.apogee());
    assert!(solution.trials <= 64);
    assert_eq!(search.telemetry().trials(), solution.trials);

    println!(
        "Bisection: {:.6}° from vertical, apogee {:.2} m, cutoff {:.2} m, {} trials",
        reported,
        solution.apogee(),
        solution.cutoff_altitude(),
        solution.trials
    );
}

#[test]
fn test_linear_scan_and_bisection_agree() {
    let step = 0.01;
    let mut search = create_search(step);

    let linear = search.run(SearchStrategy::LinearScan, 100_000.0);
    let bisection = search.run(SearchStrategy::Bisection, 100_000.0);
    assert!(linear.is_converged());
    assert!(bisection.is_converged());

    let linear = linear.solution();
    let bisection = bisection.solution();
    assert_eq!(linear.convention, AngleConvention::FromHorizon);
    assert_eq!(bisection.convention, AngleConvention::FromVertical);

    // The scan accepts the first candidate at or above the target, so in the common
    // frame bisection's angle sits in the final scan interval.
    let linear_deg = linear.degrees_from_horizon();
    let bisection_deg = bisection.degrees_from_horizon();
    assert!(bisection_deg <= linear_deg + 1e-9);
    assert!(bisection_deg > linear_deg - step - 1e-9);

    assert!(linear.apogee() >= 100_000.0);
    assert_abs_diff_eq!(bisection.apogee(), 100_000.0, epsilon = 0.1);

    // The reported numbers differ by the convention transform only.
    assert_abs_diff_eq!(
        linear.reported_degrees() + bisection.reported_degrees(),
        90.0 + linear_deg - bisection_deg,
        epsilon = 1e-9
    );
}

#[test]
fn test_linear_scan_is_monotonic_in_target() {
    let mut search = create_search(0.01);
    let mut previous = 0.0;

    for target in [5_000.0, 20_000.0, 60_000.0, 100_000.0, 150_000.0] {
        let outcome = search.linear_scan(target);
        let angle = outcome.solution().reported_degrees();
        assert!(
            angle >= previous,
            "target {} gave {}°, lower than {}°",
            target,
            angle,
            previous
        );
        previous = angle;
    }
}

#[test]
fn test_low_target_terminates_immediately() {
    let mut search = create_search(0.001);

    let linear = search.linear_scan(0.0);
    assert!(linear.is_converged());
    assert_eq!(linear.solution().trials, 1);
    assert_eq!(linear.solution().reported_degrees(), 0.0);

    let bisection = search.bisection(0.0);
    match bisection {
        SearchOutcome::NonConvergence(solution) => {
            assert!(solution.pitch_angle < 1e-6);
            assert!(solution.trials <= 64);
        }
        other => panic!("expected collapse toward zero, got {:?}", other),
    }
}

#[test]
fn test_unreachable_target_is_flagged() {
    let mut search = create_search(0.5);

    let linear = search.linear_scan(1.0e7);
    assert!(matches!(linear, SearchOutcome::Exhausted(_)));
    assert_eq!(linear.solution().reported_degrees(), 90.0);

    let bisection = search.bisection(1.0e7);
    assert!(matches!(bisection, SearchOutcome::NonConvergence(_)));
    assert!(bisection.solution().apogee() < 1.0e7);
}

#[test]
fn test_trials_are_deterministic() {
    let simulator = AscentSimulator::new(create_test_vehicle()).expect("valid simulator");
    let mut rng = StdRng::seed_from_u64(142);

    for _ in 0..20 {
        let angle = rng.gen_range(0.0..std::f64::consts::FRAC_PI_2);
        let first = simulator.run(20.0, angle);
        let second = simulator.run(20.0, angle);
        assert_eq!(first, second, "trial at {} rad is not reproducible", angle);
    }

    let mut first_search = create_search(0.001);
    let mut second_search = create_search(0.001);
    assert_eq!(
        first_search.bisection(100_000.0),
        second_search.bisection(100_000.0)
    );
}

#[test]
fn test_pathological_vehicle_rejected() {
    let err = VehicleConfig::new(20, 3072.0, 9665.0, 112_900.0, 123_600.0, 142.0).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidConfiguration(_)));

    let mut mission = Mission::default();
    mission.vehicle.dry_mass = mission.vehicle.wet_mass;
    assert!(mission.validate().is_err());
    assert!(AscentSimulator::new(mission.vehicle).is_err());
}

#[test]
fn test_huge_burn_rejected_before_simulation() {
    let mut mission = Mission::default();
    mission.vehicle.burn_duration = 1.0e300;
    let err = mission.validate().unwrap_err();
    assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
    assert!(AscentSimulator::new(mission.vehicle).is_err());
}

#[test]
fn test_shipped_scenarios_load() {
    let reference = Mission::load("config/scenario.yaml").expect("reference scenario");
    assert_eq!(reference, Mission::default());

    let rs112 = Mission::load("config/rs112.yaml").expect("rs112 scenario");
    assert_eq!(rs112.vehicle.burn_duration, 95.0);
    assert_eq!(rs112.search.strategy, SearchStrategy::LinearScan);
}

#[test]
fn test_mission_drives_search() {
    let text = "
vehicle:
  frequency: 20
  wet_mass: 9665.0
  dry_mass: 3072.0
  sea_level_thrust: 112900.0
  vacuum_thrust: 123600.0
  burn_duration: 142.0
target_apogee: 60000.0
";
    let mission = Mission::from_yaml_str(text).expect("valid mission");
    let simulator = AscentSimulator::new(mission.vehicle.clone()).expect("valid simulator");
    let mut search =
        PitchAngleSearch::new(simulator, mission.pitchover_altitude, mission.search.clone())
            .expect("valid search");

    let outcome = search.run(mission.search.strategy, mission.target_apogee);
    assert!(outcome.is_converged());
    assert_abs_diff_eq!(outcome.solution().apogee(), 60_000.0, epsilon = 0.1);
}
