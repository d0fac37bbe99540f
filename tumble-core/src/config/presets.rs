//! Factory cycle presets

use crate::cycle::{Cycle, CYCLE_COUNT};

/// Factory presets, indexed by [`crate::cycle::CycleId`]
pub const DEFAULT_PRESETS: [Cycle; CYCLE_COUNT] = [
    Cycle::new("Quick", 1, 5, 5, false, false),
    Cycle::new("Daily", 2, 8, 15, true, false),
    Cycle::new("Heavy", 3, 10, 20, true, true),
    Cycle::new("Rinse", 2, 5, 10, false, false),
    Cycle::new("Spin", 0, 12, 0, false, false),
];
