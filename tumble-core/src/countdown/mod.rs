//! Wash countdown
//!
//! A run starts from the current cycle's duration and loses one minute per
//! alarm. The engine never touches the timer itself; it returns an
//! [`AlarmCommand`] for the caller to apply.

pub mod engine;
pub mod state;

pub use engine::{AlarmCommand, CountdownEngine, CountdownTick};
pub use state::{RunEvent, RunState};
