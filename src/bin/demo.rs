//! Scripted headless flight: takeoff, climb-out, level cruise.
//!
//! Runs a trainer through a fixed 30 second flight plan and prints one
//! telemetry line per simulated second. Useful as a smoke test and as a
//! minimal example of driving the simulation without an ECS app.

use aerobat::utils::rad_to_deg;
use aerobat::{ControlInput, FlightSession, VehicleProfile};

const DT: f64 = 1.0 / 60.0;
const FLIGHT_SECONDS: u64 = 30;

fn main() {
    let mut session = FlightSession::new(VehicleProfile::trainer()).expect("preset profile");
    println!("Flying: {}", session.profile().name);

    let mut liftoff_at = None;

    for tick in 0..FLIGHT_SECONDS * 60 {
        let input = plan_input(&session);
        session.step(&input, DT);

        let telemetry = session.telemetry();
        if liftoff_at.is_none() && telemetry.altitude > session.constants().ground_level {
            liftoff_at = Some(session.elapsed());
        }

        if tick % 60 == 0 {
            let stall = if telemetry.stall_warning(session.constants()) {
                "  STALL"
            } else {
                ""
            };
            println!(
                "t={:5.1}s  alt={:8.2}  spd={:5.2}  pitch={:6.1} deg  gear={}{}",
                session.elapsed(),
                telemetry.altitude,
                telemetry.speed,
                rad_to_deg(telemetry.pitch),
                if telemetry.gear { "down" } else { "up  " },
                stall
            );
        }
    }

    match liftoff_at {
        Some(t) => println!("Lifted off at t={:.2}s", t),
        None => println!("Never left the ground"),
    }
    println!(
        "Final: altitude {:.1}, speed {:.2} after {} ticks",
        session.telemetry().altitude,
        session.telemetry().speed,
        session.ticks()
    );
}

/// Simple three-phase flight plan reacting to the latest telemetry.
fn plan_input(session: &FlightSession) -> ControlInput {
    let telemetry = session.telemetry();
    let mut input = ControlInput::neutral(session.profile().engine_count);

    if telemetry.altitude < 5.0 {
        // Takeoff roll and initial climb: firewall the throttle.
        input.set_throttle(100.0);
    } else if telemetry.altitude < 60.0 {
        // Climb-out: gear up, keep climbing.
        input.set_throttle(100.0);
        input.gear = false;
    } else {
        // Cruise: come back on the power and push the nose down gently.
        input.set_throttle(35.0);
        input.gear = false;
        input.pitch = -0.2;
    }

    input
}
