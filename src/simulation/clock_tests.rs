/*
 * Scenario tests for the simulation clock
 *
 * The clock is driven headless through `step()`, with control events injected
 * over the same channel the listener thread would use. Arrival generation is
 * suppressed where a scenario needs a hand-built queue, by exhausting the
 * request budget up front.
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod clock_tests {
    use crate::config::SimulationConfig;
    use crate::shared::{ControlEvent, Request, StatusSnapshot};
    use crate::simulation::{RunState, SimulationClock};
    use crossbeam_channel as cbc;
    use crossbeam_channel::unbounded;

    fn test_config(n_floors: u8, num_requests: u32) -> SimulationConfig {
        SimulationConfig {
            n_floors,
            num_requests,
            interval: 2,
            queue_capacity: 100,
            tick_ms: 0,
            fire_grace_ms: 0,
            seed: Some(42),
        }
    }

    fn setup_clock(
        config: &SimulationConfig,
    ) -> (
        SimulationClock,
        cbc::Sender<ControlEvent>,
        cbc::Receiver<StatusSnapshot>,
    ) {
        let (control_tx, control_rx) = unbounded::<ControlEvent>();
        let (status_tx, status_rx) = unbounded::<StatusSnapshot>();
        let clock = SimulationClock::new(config, control_rx, status_tx);
        (clock, control_tx, status_rx)
    }

    #[test]
    fn test_single_eligible_elevator_services_request() {
        // Arrange: 10 floors, only elevator 0 eligible, no generated arrivals
        let (mut clock, _control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        clock.test_elevators_mut()[1].broken = true;
        clock.test_elevators_mut()[2].broken = true;
        clock.test_enqueue(Request {
            start_floor: 5,
            target_floor: 9,
        });

        // Act: first tick dispatches and moves one floor
        clock.step();

        // Assert
        assert_eq!(clock.test_elevators()[0].target_floor, Some(9));
        assert!(!clock.test_elevators()[0].idle);
        assert_eq!(clock.test_queue_len(), 0);
        assert_eq!(clock.test_elevators()[0].current_floor, 1);

        // Act: exactly 9 ticks in total to reach floor 9
        for _ in 0..8 {
            clock.step();
        }

        // Assert
        assert_eq!(clock.test_elevators()[0].current_floor, 9);
        assert!(!clock.test_elevators()[0].idle);

        // One more tick marks the arrival
        clock.step();
        assert!(clock.test_elevators()[0].idle);
        assert_eq!(clock.test_elevators()[0].target_floor, None);
    }

    #[test]
    fn test_breakdown_event_marks_cabin_and_raises_repair_flag() {
        // Arrange
        let (mut clock, control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();

        // Act
        control_tx.send(ControlEvent::Breakdown).unwrap();
        clock.step();

        // Assert
        let broken: Vec<_> = clock.test_elevators().iter().filter(|e| e.broken).collect();
        assert_eq!(broken.len(), 1);
        // The countdown was drawn before this tick's repair pass ran
        assert!(broken[0].repair_intervals >= 9);
        assert!(broken[0].repair_intervals <= 49);
        let (repair_requested, repair_time) = clock.test_repair_status();
        assert!(repair_requested);
        assert!(repair_time > 0);
    }

    #[test]
    fn test_repair_countdown_restores_cabin_after_exact_interval() {
        // Arrange
        let (mut clock, control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        control_tx.send(ControlEvent::Breakdown).unwrap();
        clock.step();

        let id = clock
            .test_elevators()
            .iter()
            .position(|e| e.broken)
            .unwrap();
        let remaining = clock.test_elevators()[id].repair_intervals;

        // Act: run down the remaining repair ticks
        for _ in 0..remaining {
            assert!(clock.test_elevators()[id].broken);
            clock.step();
        }

        // Assert
        assert!(!clock.test_elevators()[id].broken);
        assert_eq!(clock.test_repair_status(), (false, 0));
    }

    #[test]
    fn test_breakdown_with_all_cabins_broken_changes_nothing() {
        // Arrange
        let (mut clock, control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        for elevator in clock.test_elevators_mut().iter_mut() {
            elevator.broken = true;
            elevator.repair_intervals = 20;
        }

        // Act
        control_tx.send(ControlEvent::Breakdown).unwrap();
        clock.step();

        // Assert: no new countdown was drawn, only the repair pass ran
        for elevator in clock.test_elevators().iter() {
            assert!(elevator.broken);
            assert_eq!(elevator.repair_intervals, 19);
        }
    }

    #[test]
    fn test_fire_event_evacuates_broken_cabin_from_floor_seven() {
        // Arrange: cabin 0 broken at floor 7
        let (mut clock, control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        clock.test_elevators_mut()[0].current_floor = 7;
        clock.test_elevators_mut()[0].broken = true;
        clock.test_elevators_mut()[0].repair_intervals = 30;

        // Act
        control_tx.send(ControlEvent::Fire).unwrap();
        let state = clock.step();

        // Assert: back in service and descending immediately
        assert!(clock.test_fire_mode());
        assert!(!clock.test_elevators()[0].broken);
        assert_eq!(clock.test_elevators()[0].target_floor, Some(0));
        assert_eq!(clock.test_elevators()[0].current_floor, 6);
        assert_eq!(state, RunState::Running);

        // Act: six more ticks reach the ground and complete the run
        let mut state = RunState::Running;
        for _ in 0..6 {
            state = clock.step();
        }

        // Assert
        assert_eq!(clock.test_elevators()[0].current_floor, 0);
        assert_eq!(state, RunState::Completed);
    }

    #[test]
    fn test_fire_mode_suspends_dispatch() {
        // Arrange: a queued request and an idle fleet
        let (mut clock, control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        clock.test_elevators_mut()[1].current_floor = 8;
        clock.test_enqueue(Request {
            start_floor: 3,
            target_floor: 6,
        });

        // Act
        control_tx.send(ControlEvent::Fire).unwrap();
        clock.step();
        clock.step();

        // Assert: the request is never matched, every cabin heads for ground
        assert_eq!(clock.test_queue_len(), 1);
        for elevator in clock.test_elevators().iter() {
            assert_ne!(elevator.target_floor, Some(6));
        }
    }

    #[test]
    fn test_fire_mode_ignores_breakdown_events() {
        // Arrange
        let (mut clock, control_tx, _status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        clock.test_elevators_mut()[2].current_floor = 5;

        // Act: fire first, then a breakdown attempt on the next tick
        control_tx.send(ControlEvent::Fire).unwrap();
        clock.step();
        control_tx.send(ControlEvent::Breakdown).unwrap();
        clock.step();

        // Assert
        assert!(clock.test_elevators().iter().all(|e| !e.broken));
        assert_eq!(clock.test_repair_status(), (false, 0));
    }

    #[test]
    fn test_double_fire_matches_single_fire() {
        // Arrange: two identically seeded clocks
        let config = test_config(10, 1);
        let (mut once, once_tx, _once_status) = setup_clock(&config);
        let (mut twice, twice_tx, _twice_status) = setup_clock(&config);
        once.test_exhaust_request_budget();
        twice.test_exhaust_request_budget();
        once.test_elevators_mut()[1].current_floor = 4;
        twice.test_elevators_mut()[1].current_floor = 4;

        // Act
        once_tx.send(ControlEvent::Fire).unwrap();
        twice_tx.send(ControlEvent::Fire).unwrap();
        twice_tx.send(ControlEvent::Fire).unwrap();
        once.step();
        twice.step();
        twice_tx.send(ControlEvent::Fire).unwrap();
        let mut state_once = RunState::Running;
        let mut state_twice = RunState::Running;
        for _ in 0..10 {
            state_once = once.step();
            state_twice = twice.step();
        }

        // Assert
        assert_eq!(state_once, RunState::Completed);
        assert_eq!(state_twice, RunState::Completed);
        assert_eq!(once.test_elevators(), twice.test_elevators());
    }

    #[test]
    fn test_run_completes_when_budget_exhausted_and_queue_drained() {
        // Arrange: a short seeded run with real arrival generation
        let config = SimulationConfig {
            n_floors: 5,
            num_requests: 10,
            interval: 1,
            queue_capacity: 100,
            tick_ms: 0,
            fire_grace_ms: 0,
            seed: Some(7),
        };
        let (mut clock, _control_tx, status_rx) = setup_clock(&config);

        // Act
        let mut ticks = 0;
        while clock.step() == RunState::Running {
            ticks += 1;
            assert!(ticks < 10_000, "simulation failed to terminate");
        }

        // Assert
        assert_eq!(clock.test_queue_len(), 0);
        let last = status_rx.try_iter().last().unwrap();
        assert!(!last.fire_mode);
        assert_eq!(last.queue_length, 0);
    }

    #[test]
    fn test_floors_stay_in_bounds_for_a_full_run() {
        // Arrange
        let config = SimulationConfig {
            n_floors: 5,
            num_requests: 25,
            interval: 1,
            queue_capacity: 100,
            tick_ms: 0,
            fire_grace_ms: 0,
            seed: Some(1337),
        };
        let (mut clock, _control_tx, _status_rx) = setup_clock(&config);

        // Act + Assert: every cabin stays inside the building on every tick
        let mut ticks = 0;
        loop {
            let state = clock.step();
            for elevator in clock.test_elevators().iter() {
                assert!(elevator.current_floor < config.n_floors);
                if let Some(target) = elevator.target_floor {
                    assert!(target < config.n_floors);
                }
            }
            if state == RunState::Completed {
                break;
            }
            ticks += 1;
            assert!(ticks < 10_000, "simulation failed to terminate");
        }
    }

    #[test]
    fn test_snapshot_reflects_fleet_state() {
        // Arrange
        let (mut clock, _control_tx, status_rx) = setup_clock(&test_config(10, 1));
        clock.test_exhaust_request_budget();
        clock.test_elevators_mut()[2].broken = true;
        clock.test_elevators_mut()[2].repair_intervals = 15;

        // Act
        clock.step();
        let snapshot = status_rx.recv().unwrap();

        // Assert
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.broken_count, 1);
        assert_eq!(snapshot.idle_count, 2);
        assert_eq!(snapshot.queue_length, 0);
        assert_eq!(snapshot.elevators.len(), 3);
        assert!(snapshot.elevators[2].broken);
    }
}
