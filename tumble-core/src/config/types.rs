//! Configuration type definitions

use crate::cycle::{Cycle, CYCLE_COUNT};

use super::presets::DEFAULT_PRESETS;

/// Status bytes at or above this value are treated as noise / non-contact
pub const DEFAULT_NOISE_STATUS: u8 = 60;

/// Screen size in pixels, in the orientation the UI is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenGeometry {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl ScreenGeometry {
    /// 480x320 landscape TFT (ILI9488 rotated 90°)
    pub const LANDSCAPE_480X320: Self = Self {
        width: 480,
        height: 320,
    };
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self::LANDSCAPE_480X320
    }
}

/// Touch input settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchConfig {
    /// Samples whose status is `>= noise_status` are never dispatched
    pub noise_status: u8,
    /// Keep polling the touch sensor while the door is open
    pub touch_while_door_open: bool,
}

impl TouchConfig {
    /// Default touch settings
    pub const DEFAULT: Self = Self {
        noise_status: DEFAULT_NOISE_STATUS,
        touch_while_door_open: true,
    };

    /// Check whether a status byte denotes a real contact
    pub const fn is_contact(&self, status: u8) -> bool {
        status < self.noise_status
    }
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Countdown alarm intervals
///
/// Ticks are counted in the alarm timer's own unit; with `prescale` equal
/// to the 32.768 kHz slow clock one tick is one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmConfig {
    /// Timer prescaler (slow-clock cycles per tick)
    pub prescale: u16,
    /// Ticks until the first alarm after a run starts
    pub first_ticks: u32,
    /// Ticks between subsequent alarms (one countdown minute)
    pub period_ticks: u32,
}

impl AlarmConfig {
    /// Fire almost immediately, then once a minute at 1 Hz
    pub const DEFAULT: Self = Self {
        prescale: 32_768,
        first_ticks: 1,
        period_ticks: 60,
    };
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What the countdown does when it reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownPolicy {
    /// Clamp at zero, stop the alarm and return to idle
    #[default]
    StopAtZero,
    /// Never stop; remaining time keeps decrementing below zero
    FreeRunning,
}

/// Complete appliance configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplianceConfig {
    /// Screen geometry used by the coordinate mapper
    pub screen: ScreenGeometry,
    /// Touch input settings
    pub touch: TouchConfig,
    /// Countdown alarm intervals
    pub alarm: AlarmConfig,
    /// Countdown completion rule
    pub countdown: CountdownPolicy,
    /// Cycle presets in ring order (see [`crate::cycle::CycleId`])
    pub presets: [Cycle; CYCLE_COUNT],
}

impl ApplianceConfig {
    /// Factory configuration
    pub const DEFAULT: Self = Self {
        screen: ScreenGeometry::LANDSCAPE_480X320,
        touch: TouchConfig::DEFAULT,
        alarm: AlarmConfig::DEFAULT,
        countdown: CountdownPolicy::StopAtZero,
        presets: DEFAULT_PRESETS,
    };
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_threshold() {
        let touch = TouchConfig::default();
        assert!(touch.is_contact(0));
        assert!(touch.is_contact(59));
        assert!(!touch.is_contact(60));
        assert!(!touch.is_contact(80));
    }

    #[test]
    fn test_default_alarm_is_asymmetric() {
        let alarm = AlarmConfig::default();
        assert_eq!(alarm.first_ticks, 1);
        assert_eq!(alarm.period_ticks, 60);
    }

    #[test]
    fn test_default_config() {
        let config = ApplianceConfig::default();
        assert_eq!(config.screen.width, 480);
        assert_eq!(config.screen.height, 320);
        assert_eq!(config.countdown, CountdownPolicy::StopAtZero);
        assert_eq!(config.presets, DEFAULT_PRESETS);
    }
}
