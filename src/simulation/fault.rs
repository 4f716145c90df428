/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::rngs::StdRng;
use rand::Rng;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::simulation::elevator::Elevator;

/// Repair countdown bounds in ticks, inclusive.
pub const MIN_REPAIR_INTERVALS: u32 = 10;
pub const MAX_REPAIR_INTERVALS: u32 = 50;

/**
 * Fault controller: breakdown injection, repair countdowns and the fire
 * override.
 *
 * Both triggers arrive as external control events; the clock calls into this
 * module after draining its control channel, never from an interrupt context.
 */

/// Marks a uniformly random non-broken cabin as out of service and returns its
/// index together with the repair countdown drawn from
/// [`MIN_REPAIR_INTERVALS`, `MAX_REPAIR_INTERVALS`].
///
/// Draws up to one random index per cabin; if every draw lands on an already
/// broken cabin the event is a no-op and `None` is returned.
pub fn breakdown(elevators: &mut [Elevator], rng: &mut StdRng) -> Option<(usize, u32)> {
    for _ in 0..elevators.len() {
        let id = rng.gen_range(0..elevators.len());
        if !elevators[id].broken {
            let repair_intervals = rng.gen_range(MIN_REPAIR_INTERVALS..=MAX_REPAIR_INTERVALS);
            elevators[id].broken = true;
            elevators[id].repair_intervals = repair_intervals;
            return Some((id, repair_intervals));
        }
    }
    None
}

/// Counts every broken cabin one tick closer to repair. A countdown reaching
/// zero puts the cabin back in service. Must not be called while the fire
/// override is active.
pub fn handle_repair(elevators: &mut [Elevator]) {
    for elevator in elevators.iter_mut() {
        if elevator.broken {
            elevator.repair_intervals = elevator.repair_intervals.saturating_sub(1);
            if elevator.repair_intervals == 0 {
                elevator.broken = false;
            }
        }
    }
}

/// Fleet-wide repair aggregate: whether any cabin is still out of service,
/// and the worst remaining countdown.
pub fn repair_status(elevators: &[Elevator]) -> (bool, u32) {
    let repair_time = elevators
        .iter()
        .filter(|e| e.broken)
        .map(|e| e.repair_intervals)
        .max();
    (repair_time.is_some(), repair_time.unwrap_or(0))
}

/// Fire override: every cabin is sent to the ground floor, broken cabins are
/// forced back into service to evacuate. Idempotent.
pub fn fire_response(elevators: &mut [Elevator]) {
    for elevator in elevators.iter_mut() {
        elevator.target_floor = Some(0);
        elevator.idle = false;
        elevator.broken = false;
        elevator.repair_intervals = 0;
    }
}

/// True once every cabin has reached the ground floor.
pub fn all_elevators_at_ground(elevators: &[Elevator]) -> bool {
    elevators.iter().all(|e| e.current_floor == 0)
}
