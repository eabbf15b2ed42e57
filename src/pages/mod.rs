//! Page components for Static Gate.

mod gate;

pub use gate::GatePage;
