use ascent_simulation::*;

fn parse_strategy(name: &str) -> Result<SearchStrategy, SimulationError> {
    match name {
        "linear" | "linear_scan" => Ok(SearchStrategy::LinearScan),
        "bisection" | "binary" => Ok(SearchStrategy::Bisection),
        other => Err(SimulationError::InvalidConfiguration(format!(
            "unknown search strategy '{}', expected 'linear' or 'bisection'",
            other
        ))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mission = match args.next() {
        Some(path) => {
            log::info!("Loading scenario from {}", path);
            Mission::load(&path)?
        }
        None => Mission::default(),
    };
    let strategy = match args.next() {
        Some(name) => parse_strategy(&name)?,
        None => mission.search.strategy,
    };

    let simulator = AscentSimulator::new(mission.vehicle.clone())?;
    let mut search =
        PitchAngleSearch::new(simulator, mission.pitchover_altitude, mission.search.clone())?;

    println!("Wait a few moments...");
    let outcome = search.run(strategy, mission.target_apogee);
    let solution = outcome.solution();

    let convention = match solution.convention {
        AngleConvention::FromHorizon => "above horizon",
        AngleConvention::FromVertical => "from vertical",
    };
    match &outcome {
        SearchOutcome::Converged(_) => println!(
            "Pitch angle: {:.6}° {} ({} trials)",
            solution.reported_degrees(),
            convention,
            solution.trials
        ),
        SearchOutcome::Exhausted(_) => println!(
            "Target apogee unreachable: scan saturated at {:.3}° {}",
            solution.reported_degrees(),
            convention
        ),
        SearchOutcome::NonConvergence(_) => println!(
            "Search did not converge; last candidate {:.6}° {}",
            solution.reported_degrees(),
            convention
        ),
    }
    println!("Apogee: {:.2} m", solution.apogee());
    println!("Cutoff Altitude: {:.2} m", solution.cutoff_altitude());
    match solution.result.outcome {
        AscentOutcome::GroundImpact { time } => {
            println!("Final trial hit the ground at t+ {:.2}s", time)
        }
        AscentOutcome::StepLimitReached { time } => {
            println!("Final trial stopped at the step limit at t+ {:.2}s", time)
        }
        AscentOutcome::Burnout => {}
    }

    // Replay the final trial for the trajectory report
    let mut telemetry = Telemetry::new();
    let propulsion = search.simulator().vehicle().propulsion();
    search.simulator().run_with(
        mission.pitchover_altitude,
        solution.pitch_angle,
        |state, pitched| {
            telemetry.collect_data(state, pitched);
            if propulsion.is_out_of_propellant(state.time) {
                telemetry.record_burnout(state.time);
            }
        },
    );
    telemetry.display_data();

    println!("\n--- Search Trials ---");
    println!("{}", search.telemetry().summary());

    Ok(())
}
