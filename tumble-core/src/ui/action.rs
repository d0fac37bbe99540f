//! Actions bound to buttons

/// State change requested by a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Move the cycle cursor to the predecessor
    PreviousCycle,
    /// Move the cycle cursor to the successor
    NextCycle,
    /// Start (or restart) the countdown for the current cycle
    Play,
    /// Step the current cycle's rinse-repeat count
    IncrementRinseCount,
    /// Step the current cycle's spin duration
    IncrementSpinTime,
    /// Flip bubble agitation on the current cycle
    ToggleBubbles,
    /// Flip heavy-duty mode on the current cycle
    ToggleHeavyDuty,
    /// Lock or unlock the panel
    ToggleLock,
}
