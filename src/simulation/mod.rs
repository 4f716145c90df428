pub mod clock;
pub mod dispatch;
pub mod elevator;
pub mod fault;
pub mod motion;
pub mod queue;

pub mod clock_tests;

pub use clock::RunState;
pub use clock::SimulationClock;
pub use elevator::Elevator;
pub use elevator::NUM_ELEVATORS;
pub use queue::RequestQueue;
