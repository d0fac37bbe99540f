//! Appliance controller
//!
//! Owns all panel state (cycle ring, button registry, countdown, door) and
//! is the only place it is mutated. Each entry point returns the
//! [`Effects`] of the change: redraws to issue and, for the countdown, the
//! alarm command to apply.

use tumble_hal::TouchSample;

use crate::config::{ApplianceConfig, TouchConfig};
use crate::countdown::{AlarmCommand, CountdownEngine};
use crate::cycle::{Cycle, CycleRing};
use crate::render::{Redraws, RenderRequest};
use crate::touch::{CoordinateMapper, ScreenPoint};
use crate::ui::{Action, Button, ButtonId, ButtonRegistry, BUTTON_COUNT, DEFAULT_LAYOUT};

/// Side effects of one state change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    /// Redraws in draw order
    pub redraws: Redraws,
    /// Alarm timer command, if the countdown changed
    pub alarm: Option<AlarmCommand>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    fn request(&mut self, request: RenderRequest) {
        // Every entry point stays within MAX_REDRAWS
        let pushed = self.redraws.push(request);
        debug_assert!(pushed.is_ok());
    }

    pub fn is_empty(&self) -> bool {
        self.redraws.is_empty() && self.alarm.is_none()
    }
}

/// How a touch sample was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchOutcome {
    /// Status at or above the noise threshold; not dispatched
    Noise,
    /// Real contact outside every active button
    Missed(ScreenPoint),
    /// A button fired
    Pressed { point: ScreenPoint, button: ButtonId },
}

/// Panel state and the rules that change it
#[derive(Debug, Clone)]
pub struct Controller {
    touch: TouchConfig,
    mapper: CoordinateMapper,
    ring: CycleRing,
    buttons: ButtonRegistry,
    countdown: CountdownEngine,
    door_open: bool,
}

impl Controller {
    /// Power-up state: start cycle selected, unlocked, idle, door closed
    pub fn new(config: &ApplianceConfig) -> Self {
        Self::with_layout(config, DEFAULT_LAYOUT)
    }

    /// Like [`Controller::new`] with a custom button table
    ///
    /// The lock button must come first; see [`ButtonRegistry`].
    pub fn with_layout(config: &ApplianceConfig, layout: [Button; BUTTON_COUNT]) -> Self {
        Self {
            touch: config.touch,
            mapper: CoordinateMapper::new(config.screen),
            ring: CycleRing::new(config.presets),
            buttons: ButtonRegistry::new(layout),
            countdown: CountdownEngine::new(config.alarm, config.countdown),
            door_open: false,
        }
    }

    /// Redraws for the first frame
    pub fn initial_screen(&self) -> Effects {
        let mut effects = Effects::none();
        effects.request(RenderRequest::Background);
        effects.request(RenderRequest::Buttons);
        effects.request(RenderRequest::DoorIndicator {
            open: self.door_open,
        });
        effects.request(RenderRequest::CycleInfo(*self.ring.current()));
        effects.request(RenderRequest::CycleBanner(*self.ring.current()));
        effects
    }

    /// Sensor-to-screen mapping used for touches
    pub fn map(&self, sample: &TouchSample) -> ScreenPoint {
        self.mapper.map(sample)
    }

    /// Check whether touch samples should be polled right now
    pub fn accepts_touch(&self) -> bool {
        self.touch.touch_while_door_open || !self.door_open
    }

    /// Resolve a touch sample and apply the matched action
    ///
    /// At most one action fires per sample.
    pub fn handle_touch(&mut self, sample: &TouchSample) -> (TouchOutcome, Effects) {
        if !self.touch.is_contact(sample.status) {
            return (TouchOutcome::Noise, Effects::none());
        }

        let point = self.mapper.map(sample);
        let Some(button) = self.buttons.hit_test(point).map(|b| b.id) else {
            return (TouchOutcome::Missed(point), Effects::none());
        };

        let effects = self.dispatch(button.action());
        (TouchOutcome::Pressed { point, button }, effects)
    }

    /// Apply an action to the panel state
    pub fn dispatch(&mut self, action: Action) -> Effects {
        let mut effects = Effects::none();

        match action {
            Action::PreviousCycle | Action::NextCycle => {
                let cycle = if action == Action::NextCycle {
                    *self.ring.go_next()
                } else {
                    *self.ring.go_previous()
                };
                effects.request(RenderRequest::CycleBanner(cycle));
                effects.request(RenderRequest::CycleInfo(cycle));
            }
            Action::IncrementRinseCount
            | Action::IncrementSpinTime
            | Action::ToggleBubbles
            | Action::ToggleHeavyDuty => {
                let cycle = self.ring.current_mut();
                match action {
                    Action::IncrementRinseCount => cycle.increment_rinse_count(),
                    Action::IncrementSpinTime => cycle.increment_spin_minutes(),
                    Action::ToggleBubbles => cycle.toggle_bubbles(),
                    _ => cycle.toggle_heavy_duty(),
                }
                effects.request(RenderRequest::CycleInfo(*cycle));
            }
            Action::Play => {
                let minutes = self.ring.current().total_minutes();
                effects.alarm = Some(self.countdown.start(minutes));
                effects.request(RenderRequest::ClearEstimate);
            }
            Action::ToggleLock => {
                if let Some(lock) = self.buttons.toggle_lock() {
                    effects.request(RenderRequest::Button(lock));
                }
            }
        }

        effects
    }

    /// The door switch changed level
    pub fn door_toggled(&mut self) -> Effects {
        self.door_open = !self.door_open;
        let mut effects = Effects::none();
        effects.request(RenderRequest::DoorIndicator {
            open: self.door_open,
        });
        effects
    }

    /// The countdown alarm fired
    pub fn alarm_fired(&mut self) -> Effects {
        let mut effects = Effects::none();
        let Some((tick, command)) = self.countdown.on_alarm() else {
            return effects;
        };

        effects.alarm = Some(command);
        effects.request(RenderRequest::Countdown(tick.remaining));
        if tick.finished {
            effects.request(RenderRequest::RunComplete);
        }
        effects
    }

    pub fn current_cycle(&self) -> &Cycle {
        self.ring.current()
    }

    pub fn ring(&self) -> &CycleRing {
        &self.ring
    }

    pub fn buttons(&self) -> &ButtonRegistry {
        &self.buttons
    }

    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }
}
