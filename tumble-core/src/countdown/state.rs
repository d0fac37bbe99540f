//! Countdown run state

/// Run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// No run in progress
    #[default]
    Idle,
    /// Counting down
    Running,
}

/// Events that drive the run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunEvent {
    /// Play pressed
    Start,
    /// Alarm fired
    Tick,
    /// Remaining time reached zero under a stopping policy
    Expired,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: RunEvent) -> Self {
        use RunEvent::*;
        use RunState::*;

        match (self, event) {
            (Idle, Start) => Running,
            // Restart
            (Running, Start) => Running,
            (Running, Expired) => Idle,
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_runs() {
        assert_eq!(RunState::Idle.transition(RunEvent::Start), RunState::Running);
        assert_eq!(
            RunState::Running.transition(RunEvent::Start),
            RunState::Running
        );
    }

    #[test]
    fn test_tick_keeps_state() {
        assert_eq!(RunState::Idle.transition(RunEvent::Tick), RunState::Idle);
        assert_eq!(
            RunState::Running.transition(RunEvent::Tick),
            RunState::Running
        );
    }

    #[test]
    fn test_expired_returns_to_idle() {
        assert_eq!(
            RunState::Running.transition(RunEvent::Expired),
            RunState::Idle
        );
        assert_eq!(RunState::Idle.transition(RunEvent::Expired), RunState::Idle);
    }
}
