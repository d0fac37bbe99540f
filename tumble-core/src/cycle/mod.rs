//! Cycle menu
//!
//! Five wash cycles arranged in a ring with a movable "current" cursor.
//! Navigation moves the cursor; attribute edits change the current cycle
//! in place.

pub mod preset;
pub mod ring;

pub use preset::{Cycle, MAX_RINSE_COUNT, MAX_SPIN_MINUTES};
pub use ring::{CycleId, CycleRing, CYCLE_COUNT};
