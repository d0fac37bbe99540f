//! Statics shared between the main loop and the flag-raising tasks
//!
//! The door and alarm tasks stand in for interrupt handlers: their only
//! effect on application state is raising a flag on [`EVENT_FLAGS`].

use tumble_core::events::EventFlags;
use tumble_hal_rp2040::alarm::AlarmSignal;

/// Event flags drained once per main-loop iteration
pub static EVENT_FLAGS: EventFlags = EventFlags::new();

/// Alarm deadlines from the main loop's `EmbassyAlarm` to the alarm task
pub static ALARM_SIGNAL: AlarmSignal = AlarmSignal::new();
