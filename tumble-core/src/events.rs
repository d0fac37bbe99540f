//! Interrupt-to-main-loop event flags
//!
//! Interrupt handlers only raise flags; the main loop drains each flag
//! exactly once with an atomic swap. Raising an already-raised flag is a
//! no-op, so multiple edges between two polls collapse into one event.

use portable_atomic::{AtomicBool, Ordering};

/// Asynchronous events signalled from interrupt context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flag {
    /// The door switch changed level
    DoorToggled,
    /// The countdown alarm fired
    AlarmFired,
}

/// Pending-event flags shared between interrupt handlers and the main loop
///
/// Intended to live in a `static`.
#[derive(Debug)]
pub struct EventFlags {
    door_toggled: AtomicBool,
    alarm_fired: AtomicBool,
}

impl EventFlags {
    /// All flags cleared
    pub const fn new() -> Self {
        Self {
            door_toggled: AtomicBool::new(false),
            alarm_fired: AtomicBool::new(false),
        }
    }

    fn slot(&self, flag: Flag) -> &AtomicBool {
        match flag {
            Flag::DoorToggled => &self.door_toggled,
            Flag::AlarmFired => &self.alarm_fired,
        }
    }

    /// Mark an event pending (interrupt side)
    pub fn raise(&self, flag: Flag) {
        self.slot(flag).store(true, Ordering::Release);
    }

    /// Consume a pending event (main-loop side)
    ///
    /// Returns `true` at most once per raise.
    pub fn take(&self, flag: Flag) -> bool {
        self.slot(flag).swap(false, Ordering::AcqRel)
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}
