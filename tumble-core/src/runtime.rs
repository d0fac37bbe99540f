//! Polling main loop
//!
//! [`MainLoop::poll`] is one iteration: drain the door flag, read at most
//! one touch sample, drain the alarm flag. Interrupt-side code only raises
//! flags on the shared [`EventFlags`]; everything else happens here.

use core::fmt::Write;

use heapless::{String, Vec};
use tumble_hal::{AlarmTimer, TouchSample, TouchSensor, UartTx};

use crate::controller::{Controller, Effects, TouchOutcome};
use crate::countdown::AlarmCommand;
use crate::events::{EventFlags, Flag};
use crate::render::RenderSink;
use crate::touch::ScreenPoint;

/// Longest diagnostic line
pub const DIAGNOSTIC_LINE_LEN: usize = 72;

/// First line on the diagnostic sink, written by [`MainLoop::start`]
pub const DIAGNOSTIC_BANNER: &str = "Tumble panel: maXTouch diagnostics\n\r";

/// Most reports a single poll can produce (door, touch, alarm)
pub const MAX_REPORTS: usize = 3;

/// Something that happened during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollReport {
    /// Door flag drained
    DoorToggled { open: bool },
    /// Sample read failed and was dropped
    TouchReadFailed,
    /// A sample was read and resolved
    Touch {
        sample: TouchSample,
        outcome: TouchOutcome,
    },
    /// Alarm flag drained while a run was in progress
    Alarm { remaining: i32, finished: bool },
}

/// Reports from one poll, in the order they happened
pub type PollReports = Vec<PollReport, MAX_REPORTS>;

/// Format the per-sample diagnostic line
pub fn format_diagnostic(
    sample: &TouchSample,
    point: ScreenPoint,
) -> String<DIAGNOSTIC_LINE_LEN> {
    let mut line = String::new();
    // Cannot overflow for u8/u16 fields
    let _ = write!(
        line,
        "Nr: {}, X:{:4}, Y:{:4}, Status:0x{:2x} conv X:{:3} Y:{:3}\n\r",
        sample.id, sample.x, sample.y, sample.status, point.x, point.y
    );
    line
}

/// The application main loop and its collaborators
pub struct MainLoop<'a, T, A, S, R> {
    flags: &'a EventFlags,
    controller: Controller,
    touch: T,
    alarm: A,
    diag: S,
    renderer: R,
}

impl<'a, T, A, S, R> MainLoop<'a, T, A, S, R>
where
    T: TouchSensor,
    A: AlarmTimer,
    S: UartTx,
    R: RenderSink,
{
    pub fn new(
        flags: &'a EventFlags,
        controller: Controller,
        touch: T,
        alarm: A,
        diag: S,
        renderer: R,
    ) -> Self {
        Self {
            flags,
            controller,
            touch,
            alarm,
            diag,
            renderer,
        }
    }

    /// Announce the diagnostic sink and draw the first frame
    pub fn start(&mut self) {
        // Best effort, like the per-sample lines
        let _ = self
            .diag
            .write_blocking(DIAGNOSTIC_BANNER.as_bytes())
            .and_then(|_| self.diag.flush());

        let effects = self.controller.initial_screen();
        self.apply(&effects);
    }

    /// Run one main-loop iteration
    pub fn poll(&mut self) -> PollReports {
        let mut reports = PollReports::new();

        if self.flags.take(Flag::DoorToggled) {
            let effects = self.controller.door_toggled();
            self.apply(&effects);
            let _ = reports.push(PollReport::DoorToggled {
                open: self.controller.is_door_open(),
            });
        }

        if self.controller.accepts_touch() && self.touch.is_sample_pending() {
            let report = match self.touch.read_sample() {
                Ok(sample) => {
                    let point = self.controller.map(&sample);
                    let line = format_diagnostic(&sample, point);
                    // Diagnostics are best effort
                    let _ = self.diag.write_blocking(line.as_bytes());

                    let (outcome, effects) = self.controller.handle_touch(&sample);
                    self.apply(&effects);
                    if matches!(effects.alarm, Some(AlarmCommand::Arm(_))) {
                        // A run (re)started; a pending alarm belongs to the old one
                        self.flags.take(Flag::AlarmFired);
                    }
                    PollReport::Touch { sample, outcome }
                }
                Err(_) => PollReport::TouchReadFailed,
            };
            let _ = reports.push(report);
        }

        if self.flags.take(Flag::AlarmFired) {
            let effects = self.controller.alarm_fired();
            if !effects.is_empty() {
                self.apply(&effects);
                let countdown = self.controller.countdown();
                let _ = reports.push(PollReport::Alarm {
                    remaining: countdown.remaining(),
                    finished: !countdown.is_running(),
                });
            }
        }

        reports
    }

    fn apply(&mut self, effects: &Effects) {
        self.renderer.render_all(&effects.redraws);

        match effects.alarm {
            Some(AlarmCommand::Arm(ticks)) => self.alarm.arm_in(ticks),
            Some(AlarmCommand::Disarm) => self.alarm.disarm(),
            None => {}
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
