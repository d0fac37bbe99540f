//! Embassy async tasks
//!
//! Each task only raises a flag on `EVENT_FLAGS`; the main loop does the rest.

pub mod alarm;
pub mod door;

pub use alarm::alarm_task;
pub use door::door_task;
