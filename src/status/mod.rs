pub mod reporter;

pub use reporter::announce;
pub use reporter::StatusReporter;
