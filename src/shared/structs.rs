/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A floor-to-floor trip waiting for an elevator.
///
/// Created by arrival generation and consumed exactly once by the dispatcher,
/// which transfers `target_floor` onto the chosen elevator. `start_floor` is
/// only used for the distance computation when picking an elevator.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub start_floor: u8,
    pub target_floor: u8,
}

/// Externally injected control event, drained by the clock at the start of
/// each tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ControlEvent {
    Breakdown,
    Fire,
}

/// Per-elevator slice of a status snapshot.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub current_floor: u8,
    pub target_floor: Option<u8>,
    pub broken: bool,
}

/// Read-only view of the fleet, emitted once per tick for the status
/// reporter. Producing it never blocks the simulation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub tick: u64,
    pub idle_count: usize,
    pub broken_count: usize,
    pub queue_length: usize,
    pub repair_requested: bool,
    pub repair_time: u32,
    pub fire_mode: bool,
    pub elevators: Vec<ElevatorStatus>,
}

/// Startup announcement identifying this run, so the control utilities can
/// locate the process.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Announcement {
    pub pid: u32,
    pub hostname: String,
    pub application: String,
}
