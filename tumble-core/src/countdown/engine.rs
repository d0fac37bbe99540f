//! Countdown engine

use super::state::{RunEvent, RunState};
use crate::config::{AlarmConfig, CountdownPolicy};

/// What the caller should do with the alarm timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmCommand {
    /// Arm the alarm this many ticks from now
    Arm(u32),
    /// Stop the alarm
    Disarm,
}

/// Result of one alarm tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownTick {
    /// Minutes left after this tick
    pub remaining: i32,
    /// The run ended on this tick
    pub finished: bool,
}

/// Alarm-driven minute countdown
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    state: RunState,
    remaining: i32,
    alarm: AlarmConfig,
    policy: CountdownPolicy,
}

impl CountdownEngine {
    pub const fn new(alarm: AlarmConfig, policy: CountdownPolicy) -> Self {
        Self {
            state: RunState::Idle,
            remaining: 0,
            alarm,
            policy,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Minutes left in the current (or last) run
    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn policy(&self) -> CountdownPolicy {
        self.policy
    }

    /// Begin a run of `minutes`; restarts if already running
    pub fn start(&mut self, minutes: i32) -> AlarmCommand {
        self.state = self.state.transition(RunEvent::Start);
        self.remaining = minutes;
        AlarmCommand::Arm(self.alarm.first_ticks)
    }

    /// Handle one alarm
    ///
    /// Returns `None` when no run is in progress (a stale alarm).
    pub fn on_alarm(&mut self) -> Option<(CountdownTick, AlarmCommand)> {
        if !self.state.is_running() {
            return None;
        }
        self.state = self.state.transition(RunEvent::Tick);

        match self.policy {
            CountdownPolicy::FreeRunning => {
                self.remaining = self.remaining.saturating_sub(1);
                let tick = CountdownTick {
                    remaining: self.remaining,
                    finished: false,
                };
                Some((tick, AlarmCommand::Arm(self.alarm.period_ticks)))
            }
            CountdownPolicy::StopAtZero => {
                if self.remaining > 0 {
                    self.remaining -= 1;
                }

                if self.remaining > 0 {
                    let tick = CountdownTick {
                        remaining: self.remaining,
                        finished: false,
                    };
                    return Some((tick, AlarmCommand::Arm(self.alarm.period_ticks)));
                }

                self.remaining = 0;
                self.state = self.state.transition(RunEvent::Expired);
                let tick = CountdownTick {
                    remaining: 0,
                    finished: true,
                };
                Some((tick, AlarmCommand::Disarm))
            }
        }
    }
}
