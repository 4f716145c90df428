pub mod macros;
pub mod structs;

pub use structs::Announcement;
pub use structs::ControlEvent;
pub use structs::ElevatorStatus;
pub use structs::Request;
pub use structs::StatusSnapshot;
