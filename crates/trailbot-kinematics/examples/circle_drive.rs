use trailbot_kinematics::*;

fn main() {
    let limits_result = Limits::new(20.0, 1.0, 3.35, 1.0);
    let integrator_result = Integrator::new(IntegrationOrder::TurnFirst, 100.0);
    let num_steps = 20;

    match (limits_result, integrator_result) {
        (Ok(limits), Ok(integrator)) => {
            let mut state = RobotState::new(0.0, 0.0, 0.0, limits).with_motion(10.0, 3.35, 0.0);

            println!("Initializing simulation...");
            println!("  Limits:       {}", limits);
            println!("  Integrator:   {}", integrator);
            println!("  Initial State: {}", state);
            println!("  Num Steps:    {}", num_steps);
            println!("\nSimulating...");

            for i in 0..num_steps {
                match integrator.step(&mut state, 1.0) {
                    Ok(_) => println!("Step {:>2}: {}", i + 1, state),
                    Err(e) => {
                        eprintln!("Error during simulation step {}: {:?}", i + 1, e);
                        break;
                    }
                }
            }

            println!("\nSimulation complete.");
            println!("Final State: {:?}", state);
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Failed to initialize kinematics: {:?}", e);
        }
    }
}
