/* 3rd party libraries */
use crossbeam_channel as cbc;
use std::thread::Builder;

/* Custom libraries */
use control::ControlListener;
use shared::{ControlEvent, StatusSnapshot};
use simulation::SimulationClock;
use status::StatusReporter;

/* Modules */
mod config;
mod control;
mod error;
mod shared;
mod simulation;
mod status;

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::init();

    // Load the configuration
    let config = crate::unwrap_or_exit!(config::load_config());

    // Announce PID, hostname and application name for the control utilities
    status::announce();

    // Initialize channels
    let (control_tx, control_rx) = cbc::unbounded::<ControlEvent>();
    let (status_tx, status_rx) = cbc::unbounded::<StatusSnapshot>();

    // Start the control listener
    let control_listener = ControlListener::new(&config.control, control_tx)?;
    let control_listener_thread = Builder::new().name("control_listener".into());
    control_listener_thread.spawn(move || control_listener.run())?;

    // Start the status reporter
    let status_reporter = StatusReporter::new(status_rx);
    let status_reporter_thread = Builder::new().name("status_reporter".into());
    status_reporter_thread.spawn(move || status_reporter.run())?;

    // Run the simulation clock on the main thread
    let clock = SimulationClock::new(&config.simulation, control_rx, status_tx);
    clock.run();

    Ok(())
}
