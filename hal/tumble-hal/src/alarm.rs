//! Hardware alarm timer abstractions
//!
//! Models a real-time timer: a free-running tick counter (whose tick length
//! is fixed by a prescaler chosen at construction) plus a single one-shot
//! alarm compare register. When the counter reaches the compare value the
//! alarm interrupt fires once.

/// Clock feeding the prescaler of a real-time timer (32.768 kHz crystal)
pub const SLOW_CLOCK_HZ: u32 = 32_768;

/// One-shot alarm on a free-running tick counter
pub trait AlarmTimer {
    /// Current value of the tick counter
    ///
    /// The counter wraps at `u32::MAX`.
    fn now(&self) -> u32;

    /// Program the alarm to fire when the counter reaches `at_tick`
    ///
    /// Replaces any alarm already pending.
    fn set_alarm(&mut self, at_tick: u32);

    /// Cancel a pending alarm, if any
    fn disarm(&mut self);

    /// Program the alarm to fire `ticks` ticks from now
    fn arm_in(&mut self, ticks: u32) {
        let at = self.now().wrapping_add(ticks);
        self.set_alarm(at);
    }
}

impl<T: AlarmTimer + ?Sized> AlarmTimer for &mut T {
    fn now(&self) -> u32 {
        T::now(self)
    }

    fn set_alarm(&mut self, at_tick: u32) {
        T::set_alarm(self, at_tick)
    }

    fn disarm(&mut self) {
        T::disarm(self)
    }
}

/// Length of one tick in microseconds for a given prescaler value
///
/// A prescale of [`SLOW_CLOCK_HZ`] yields one tick per second.
pub const fn tick_micros(prescale: u16) -> u64 {
    (prescale as u64) * 1_000_000 / (SLOW_CLOCK_HZ as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAlarm {
        now: u32,
        alarm: Option<u32>,
    }

    impl AlarmTimer for MockAlarm {
        fn now(&self) -> u32 {
            self.now
        }

        fn set_alarm(&mut self, at_tick: u32) {
            self.alarm = Some(at_tick);
        }

        fn disarm(&mut self) {
            self.alarm = None;
        }
    }

    #[test]
    fn test_arm_in_is_relative_to_now() {
        let mut alarm = MockAlarm {
            now: 100,
            alarm: None,
        };
        alarm.arm_in(60);
        assert_eq!(alarm.alarm, Some(160));
    }

    #[test]
    fn test_arm_in_wraps_counter() {
        let mut alarm = MockAlarm {
            now: u32::MAX - 1,
            alarm: None,
        };
        alarm.arm_in(3);
        assert_eq!(alarm.alarm, Some(1));

        alarm.disarm();
        assert_eq!(alarm.alarm, None);
    }

    #[test]
    fn test_tick_length() {
        assert_eq!(tick_micros(32_768), 1_000_000);
        assert_eq!(tick_micros(16_384), 500_000);
        assert_eq!(tick_micros(0), 0);
    }
}
