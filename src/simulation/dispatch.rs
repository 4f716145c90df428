/***************************************/
/*           Local modules             */
/***************************************/
use crate::simulation::elevator::Elevator;
use crate::simulation::queue::RequestQueue;

/**
 * Dispatcher: matches queued requests to idle elevators.
 *
 * Runs once per tick. The queue is scanned in arrival order; each request is
 * matched to the nearest idle, non-broken elevator by absolute distance from
 * the elevator's current floor to the request's start floor, ties going to
 * the lowest elevator index. A matched elevator leaves the idle set
 * immediately, so it is matched at most once per tick. Requests with no
 * eligible elevator stay queued; that is normal backpressure, not an error.
 */
pub fn dispatch(queue: &mut RequestQueue, elevators: &mut [Elevator]) {
    let mut i = 0;
    while i < queue.len() {
        let start_floor = queue.get(i).start_floor;
        match find_nearest_idle_elevator(elevators, start_floor) {
            Some(id) => {
                let request = queue.remove(i);
                elevators[id].assign(request.target_floor);
                log::debug!(
                    "Request ({} -> {}) assigned to elevator {}",
                    request.start_floor,
                    request.target_floor,
                    id + 1
                );
            }
            None => i += 1,
        }
    }
}

/// Returns the index of the idle, non-broken elevator closest to
/// `request_floor`, or `None` if the whole fleet is busy or broken.
pub fn find_nearest_idle_elevator(elevators: &[Elevator], request_floor: u8) -> Option<usize> {
    let mut nearest: Option<usize> = None;
    let mut nearest_distance = u8::MAX;

    for (id, elevator) in elevators.iter().enumerate() {
        if elevator.idle && !elevator.broken {
            let distance = elevator.current_floor.abs_diff(request_floor);
            if distance < nearest_distance {
                nearest = Some(id);
                nearest_distance = distance;
            }
        }
    }
    nearest
}
