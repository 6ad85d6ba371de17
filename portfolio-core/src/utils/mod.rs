//! Utility helpers shared by the services and the sidebar.

pub mod markup;
pub mod millis;
pub mod timer;

pub use timer::CancellableTimer;
