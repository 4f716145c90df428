use std::fs;
use std::process;

use crate::shared::{Announcement, StatusSnapshot};
use crossbeam_channel as cbc;

pub const APP_NAME: &str = "elevator_sim";

/**
 * Status reporter: consumes per-tick fleet snapshots and makes them visible.
 *
 * This is the seam towards external observers (terminal renderer, remote
 * telemetry publisher). The reporter logs a one-line fleet summary per tick
 * and the full JSON payload at debug level; losing the reporter never stalls
 * the simulation, since snapshots arrive over an unbounded channel.
 *
 * # Fields
 * - `status_rx`:   Receiver for fleet snapshots from the clock.
 */
pub struct StatusReporter {
    status_rx: cbc::Receiver<StatusSnapshot>,
}

impl StatusReporter {
    pub fn new(status_rx: cbc::Receiver<StatusSnapshot>) -> StatusReporter {
        StatusReporter { status_rx }
    }

    pub fn run(self) {
        loop {
            match self.status_rx.recv() {
                Ok(snapshot) => self.report(&snapshot),
                // Clock hung up, the run is over.
                Err(_) => return,
            }
        }
    }

    fn report(&self, snapshot: &StatusSnapshot) {
        log::info!(
            "Tick {} | idle: {} | queue: {} | out of service: {} | repair requested: {} (eta {} ticks){}",
            snapshot.tick,
            snapshot.idle_count,
            snapshot.queue_length,
            snapshot.broken_count,
            if snapshot.repair_requested { "yes" } else { "no" },
            snapshot.repair_time,
            if snapshot.fire_mode { " | FIRE" } else { "" },
        );

        for (id, elevator) in snapshot.elevators.iter().enumerate() {
            log::debug!(
                "Elevator {}: floor {} target {:?} broken {}",
                id + 1,
                elevator.current_floor,
                elevator.target_floor,
                elevator.broken
            );
        }

        match serde_json::to_string(snapshot) {
            Ok(payload) => log::debug!("Status payload: {}", payload),
            Err(e) => log::warn!("Failed to serialize status snapshot: {}", e),
        }
    }
}

/// Announces this process once at startup so the control utilities can find
/// it: PID, host identity and application name as one JSON payload.
pub fn announce() {
    let announcement = Announcement {
        pid: process::id(),
        hostname: hostname(),
        application: APP_NAME.to_string(),
    };

    match serde_json::to_string(&announcement) {
        Ok(payload) => log::info!("Announcement: {}", payload),
        Err(e) => log::warn!("Failed to serialize announcement: {}", e),
    }
}

fn hostname() -> String {
    fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

/***************************************/
/*             Unit tests              */
/***************************************/
