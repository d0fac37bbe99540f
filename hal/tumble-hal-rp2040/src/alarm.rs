//! Countdown alarm on the embassy time driver
//!
//! [`EmbassyAlarm`] emulates a prescaled real-time timer: ticks are derived
//! from `embassy_time::Instant`, and arming the alarm hands a deadline to
//! [`run_alarm`] through a `Signal`. The alarm task is the "interrupt": it
//! sleeps until the deadline and then calls the fire hook once.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use tumble_hal::alarm::tick_micros;
use tumble_hal::AlarmTimer;

/// Command passed from the timer handle to the alarm task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmDeadline {
    /// Fire at this instant
    At(Instant),
    /// Cancel any pending deadline
    Disarmed,
}

/// Channel between [`EmbassyAlarm`] and [`run_alarm`]
pub type AlarmSignal = Signal<CriticalSectionRawMutex, AlarmDeadline>;

/// Prescaled tick counter with a single one-shot alarm
pub struct EmbassyAlarm<'a> {
    signal: &'a AlarmSignal,
    epoch: Instant,
    tick: Duration,
}

impl<'a> EmbassyAlarm<'a> {
    /// Start the counter at zero
    ///
    /// A prescale of 32768 gives one tick per second.
    pub fn new(signal: &'a AlarmSignal, prescale: u16) -> Self {
        Self {
            signal,
            epoch: Instant::now(),
            // Zero-length ticks would make the counter meaningless
            tick: Duration::from_micros(tick_micros(prescale).max(1)),
        }
    }
}

impl AlarmTimer for EmbassyAlarm<'_> {
    fn now(&self) -> u32 {
        let elapsed = Instant::now().duration_since(self.epoch);
        (elapsed.as_ticks() / self.tick.as_ticks()) as u32
    }

    fn set_alarm(&mut self, at_tick: u32) {
        let ahead = at_tick.wrapping_sub(self.now());
        let deadline = Instant::now() + self.tick * ahead;
        self.signal.signal(AlarmDeadline::At(deadline));
    }

    fn disarm(&mut self) {
        self.signal.signal(AlarmDeadline::Disarmed);
    }
}

/// Body of the alarm task: wait for deadlines and fire them
///
/// A new deadline replaces the pending one. `on_fire` must only raise a
/// flag.
pub async fn run_alarm(signal: &AlarmSignal, mut on_fire: impl FnMut()) -> ! {
    let mut pending: Option<Instant> = None;

    loop {
        let next = match pending {
            None => signal.wait().await,
            Some(at) => match select(Timer::at(at), signal.wait()).await {
                Either::First(()) => {
                    on_fire();
                    pending = None;
                    continue;
                }
                Either::Second(command) => command,
            },
        };

        pending = match next {
            AlarmDeadline::At(at) => Some(at),
            AlarmDeadline::Disarmed => None,
        };
    }
}
