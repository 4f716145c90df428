pub mod listener;

pub use listener::ControlListener;
