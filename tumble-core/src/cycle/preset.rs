//! Cycle attributes and their edit rules

/// Highest rinse-repeat count before wrapping to 0
pub const MAX_RINSE_COUNT: u8 = 6;

/// Highest spin duration (minutes) before wrapping to 0
pub const MAX_SPIN_MINUTES: u8 = 12;

/// A wash cycle preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    /// Display name
    pub name: &'static str,
    /// Number of rinse repeats (0..=6)
    pub rinse_count: u8,
    /// Spin duration in minutes (0..=12)
    pub spin_minutes: u8,
    /// Rinse duration in minutes (fixed per preset)
    pub rinse_minutes: u8,
    /// Bubble agitation enabled
    pub bubbles: bool,
    /// Heavy-duty mode enabled
    pub heavy_duty: bool,
}

impl Cycle {
    /// Create a new cycle preset
    pub const fn new(
        name: &'static str,
        rinse_count: u8,
        spin_minutes: u8,
        rinse_minutes: u8,
        bubbles: bool,
        heavy_duty: bool,
    ) -> Self {
        Self {
            name,
            rinse_count,
            spin_minutes,
            rinse_minutes,
            bubbles,
            heavy_duty,
        }
    }

    /// Estimated run time in minutes (rinse + spin)
    pub const fn total_minutes(&self) -> i32 {
        self.rinse_minutes as i32 + self.spin_minutes as i32
    }

    /// Step the rinse-repeat count, wrapping 6 -> 0
    pub fn increment_rinse_count(&mut self) {
        self.rinse_count = if self.rinse_count < MAX_RINSE_COUNT {
            self.rinse_count + 1
        } else {
            0
        };
    }

    /// Step the spin duration, wrapping 12 -> 0
    pub fn increment_spin_minutes(&mut self) {
        self.spin_minutes = if self.spin_minutes < MAX_SPIN_MINUTES {
            self.spin_minutes + 1
        } else {
            0
        };
    }

    /// Flip bubble agitation
    pub fn toggle_bubbles(&mut self) {
        self.bubbles = !self.bubbles;
    }

    /// Flip heavy-duty mode
    pub fn toggle_heavy_duty(&mut self) {
        self.heavy_duty = !self.heavy_duty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> Cycle {
        Cycle::new("Test", 0, 0, 5, false, false)
    }

    #[test]
    fn test_rinse_count_sequence() {
        let mut c = cycle();
        for expected in 1..=MAX_RINSE_COUNT {
            c.increment_rinse_count();
            assert_eq!(c.rinse_count, expected);
        }

        // 6 wraps to 0
        c.increment_rinse_count();
        assert_eq!(c.rinse_count, 0);
    }

    #[test]
    fn test_spin_sequence() {
        let mut c = cycle();
        c.spin_minutes = MAX_SPIN_MINUTES - 1;

        c.increment_spin_minutes();
        assert_eq!(c.spin_minutes, 12);

        // 12 wraps to 0
        c.increment_spin_minutes();
        assert_eq!(c.spin_minutes, 0);
    }

    #[test]
    fn test_out_of_range_values_wrap() {
        let mut c = Cycle::new("Odd", 9, 40, 0, false, false);
        c.increment_rinse_count();
        c.increment_spin_minutes();
        assert_eq!(c.rinse_count, 0);
        assert_eq!(c.spin_minutes, 0);
    }

    #[test]
    fn test_toggles() {
        let mut c = cycle();

        c.toggle_bubbles();
        assert!(c.bubbles);
        c.toggle_bubbles();
        assert!(!c.bubbles);

        c.toggle_heavy_duty();
        assert!(c.heavy_duty);
        assert!(!c.bubbles);
    }

    #[test]
    fn test_total_minutes() {
        let c = Cycle::new("Mix", 2, 10, 5, false, false);
        assert_eq!(c.total_minutes(), 15);
    }
}
