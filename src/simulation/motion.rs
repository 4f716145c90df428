/***************************************/
/*           Local modules             */
/***************************************/
use crate::simulation::elevator::Elevator;

/**
 * Motion controller: advances one elevator one floor per tick.
 *
 * Broken and idle cabins do not move. Reaching the target floor marks the
 * cabin idle and clears the destination; the tick is the only time unit, so
 * there is no multi-floor step or acceleration model.
 */
pub fn move_elevator(elevator: &mut Elevator) {
    if elevator.broken || elevator.idle {
        return;
    }

    match elevator.target_floor {
        Some(target) if elevator.current_floor < target => elevator.current_floor += 1,
        Some(target) if elevator.current_floor > target => elevator.current_floor -= 1,
        _ => {
            // Arrived (or lost its destination): back to the idle set.
            elevator.idle = true;
            elevator.target_floor = None;
        }
    }
}
