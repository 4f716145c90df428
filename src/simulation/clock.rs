/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::thread::sleep;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::shared::{ControlEvent, ElevatorStatus, Request, StatusSnapshot};
use crate::simulation::elevator::{self, Elevator};
use crate::simulation::queue::RequestQueue;
use crate::simulation::{dispatch, fault, motion};

/**
 * Drives the simulation, one fixed-interval tick at a time.
 *
 * Each tick runs to completion in this order: drain control events, generate
 * an arrival, dispatch queued requests, move the fleet, process repairs,
 * publish a status snapshot. Control events only ever enter through the
 * channel drained at the start of the tick, so the fleet is never mutated
 * mid-tick from outside.
 *
 * # Fields
 * - `n_floors`:            Building height; floors are [0, n_floors).
 * - `num_requests`:        Total arrival budget for the run.
 * - `interval`:            Inter-arrival probability denominator (one arrival per tick with probability 1/interval).
 * - `tick_ms`:             Wall-clock tick period. Pacing only, not correctness.
 * - `fire_grace_ms`:       Delay between fire evacuation finishing and process exit.
 * - `elevators`:           The fleet, owned for the lifetime of the run.
 * - `queue`:               Pending requests in arrival order.
 * - `active_requests`:     Arrivals generated so far (dropped arrivals included).
 * - `fire_mode`:           Fleet-wide emergency flag, monotonic once set.
 * - `repair_requested`:    True while any cabin is out of service.
 * - `repair_time`:         Worst remaining repair countdown, for the reporter.
 * - `control_rx`:          Receiver for externally injected control events.
 * - `status_tx`:           Sender for per-tick status snapshots.
 */
pub struct SimulationClock {
    n_floors: u8,
    num_requests: u32,
    interval: u32,
    tick_ms: u64,
    fire_grace_ms: u64,
    tick: u64,
    elevators: Vec<Elevator>,
    queue: RequestQueue,
    active_requests: u32,
    fire_mode: bool,
    repair_requested: bool,
    repair_time: u32,
    rng: StdRng,
    control_rx: cbc::Receiver<ControlEvent>,
    status_tx: cbc::Sender<StatusSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunState {
    Running,
    Completed,
}

impl SimulationClock {
    pub fn new(
        config: &SimulationConfig,
        control_rx: cbc::Receiver<ControlEvent>,
        status_tx: cbc::Sender<StatusSnapshot>,
    ) -> SimulationClock {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        SimulationClock {
            n_floors: config.n_floors,
            num_requests: config.num_requests,
            interval: config.interval,
            tick_ms: config.tick_ms,
            fire_grace_ms: config.fire_grace_ms,
            tick: 0,
            elevators: elevator::new_fleet(),
            queue: RequestQueue::new(config.queue_capacity),
            active_requests: 0,
            fire_mode: false,
            repair_requested: false,
            repair_time: 0,
            rng,
            control_rx,
            status_tx,
        }
    }

    /// Runs the simulation to completion at the configured tick rate.
    pub fn run(mut self) {
        loop {
            if self.step() == RunState::Completed {
                break;
            }
            sleep(Duration::from_millis(self.tick_ms));
        }

        // Leave the evacuation outcome observable before the process exits.
        if self.fire_mode {
            sleep(Duration::from_millis(self.fire_grace_ms));
        }
        log::info!("Simulation ended due to fire response or completion of all requests");
    }

    /// Advances the simulation by exactly one tick.
    pub fn step(&mut self) -> RunState {
        self.tick += 1;

        self.drain_control_events();
        self.generate_arrival();

        if !self.fire_mode {
            dispatch::dispatch(&mut self.queue, &mut self.elevators);
        }

        for elevator in self.elevators.iter_mut() {
            motion::move_elevator(elevator);
        }

        if !self.fire_mode && self.elevators.iter().any(|e| e.broken) {
            fault::handle_repair(&mut self.elevators);
            let (repair_requested, repair_time) = fault::repair_status(&self.elevators);
            self.repair_requested = repair_requested;
            self.repair_time = repair_time;
        }

        self.publish_status();

        if self.completed() {
            RunState::Completed
        } else {
            RunState::Running
        }
    }

    fn drain_control_events(&mut self) {
        while let Ok(event) = self.control_rx.try_recv() {
            match event {
                ControlEvent::Breakdown => self.handle_breakdown(),
                ControlEvent::Fire => self.handle_fire(),
            }
        }
    }

    fn handle_breakdown(&mut self) {
        if self.fire_mode {
            log::info!("Breakdown event ignored: fire override is active");
            return;
        }

        match fault::breakdown(&mut self.elevators, &mut self.rng) {
            Some((id, repair_intervals)) => {
                self.repair_requested = true;
                self.repair_time = self.repair_time.max(repair_intervals);
                log::warn!(
                    "Elevator {} broke down! Repair in {} ticks",
                    id + 1,
                    repair_intervals
                );
            }
            None => {
                log::warn!("All elevators are currently broken. No new breakdown occurred");
            }
        }
    }

    fn handle_fire(&mut self) {
        if !self.fire_mode {
            log::warn!("Fire alarm triggered! Sending all elevators to the ground floor");
        }
        self.fire_mode = true;
        fault::fire_response(&mut self.elevators);
        self.repair_requested = false;
        self.repair_time = 0;
    }

    fn generate_arrival(&mut self) {
        if self.fire_mode || self.active_requests >= self.num_requests {
            return;
        }
        if self.rng.gen_range(0..self.interval) != 0 {
            return;
        }

        let request = Request {
            start_floor: self.rng.gen_range(0..self.n_floors),
            target_floor: self.rng.gen_range(0..self.n_floors),
        };
        self.active_requests += 1;

        // Drop-newest on overflow; the arrival still counts against the budget.
        if let Err(e) = self.queue.enqueue(request) {
            log::warn!(
                "Request ({} -> {}) dropped: {}",
                request.start_floor,
                request.target_floor,
                e
            );
        }
    }

    fn publish_status(&self) {
        let snapshot = StatusSnapshot {
            tick: self.tick,
            idle_count: self.elevators.iter().filter(|e| e.idle && !e.broken).count(),
            broken_count: self.elevators.iter().filter(|e| e.broken).count(),
            queue_length: self.queue.len(),
            repair_requested: self.repair_requested,
            repair_time: self.repair_time,
            fire_mode: self.fire_mode,
            elevators: self
                .elevators
                .iter()
                .map(|e| ElevatorStatus {
                    current_floor: e.current_floor,
                    target_floor: e.target_floor,
                    broken: e.broken,
                })
                .collect(),
        };

        // Reporter loss degrades observability, never the simulation.
        if let Err(e) = self.status_tx.send(snapshot) {
            log::warn!("Status sink unavailable: {}", e);
        }
    }

    fn completed(&self) -> bool {
        if self.fire_mode {
            fault::all_elevators_at_ground(&self.elevators)
        } else {
            self.active_requests >= self.num_requests && self.queue.is_empty()
        }
    }
}

/***************************************/
/*            Test helpers             */
/***************************************/
#[cfg(test)]
impl SimulationClock {
    pub fn test_elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn test_elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }

    pub fn test_enqueue(&mut self, request: Request) {
        self.queue
            .enqueue(request)
            .expect("test queue should not overflow");
    }

    pub fn test_exhaust_request_budget(&mut self) {
        self.active_requests = self.num_requests;
    }

    pub fn test_queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn test_fire_mode(&self) -> bool {
        self.fire_mode
    }

    pub fn test_repair_status(&self) -> (bool, u32) {
        (self.repair_requested, self.repair_time)
    }
}
