/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Number of cabins in the fleet. Fixed at build time, no dynamic resizing.
pub const NUM_ELEVATORS: usize = 3;

/**
 * One elevator cabin's motion and fault state.
 *
 * The cabin is pure state: it is owned by the simulation clock and mutated by
 * the dispatcher, motion controller and fault controller each tick.
 *
 * # Fields
 * - `current_floor`:       Floor the cabin is on, in [0, n_floors).
 * - `target_floor`:        Destination floor, `None` while there is no outstanding destination.
 * - `idle`:                True iff the cabin has no destination and is not moving.
 * - `broken`:              True iff the cabin is out of service. A broken cabin never moves.
 * - `repair_intervals`:    Ticks left until repaired. Meaningful only while `broken`.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Elevator {
    pub current_floor: u8,
    pub target_floor: Option<u8>,
    pub idle: bool,
    pub broken: bool,
    pub repair_intervals: u32,
}

impl Elevator {
    pub fn new() -> Elevator {
        Elevator {
            current_floor: 0,
            target_floor: None,
            idle: true,
            broken: false,
            repair_intervals: 0,
        }
    }

    /// Assigns a destination. Clears `idle` and sets the target in one step so
    /// the two are never observed inconsistent.
    pub fn assign(&mut self, target_floor: u8) {
        self.target_floor = Some(target_floor);
        self.idle = false;
    }
}

/// Builds the fleet, all cabins idle at the ground floor.
pub fn new_fleet() -> Vec<Elevator> {
    vec![Elevator::new(); NUM_ELEVATORS]
}
