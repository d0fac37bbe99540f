//! Countdown alarm task

use defmt::*;
use tumble_core::events::Flag;
use tumble_hal_rp2040::alarm::run_alarm;

use crate::channels::{ALARM_SIGNAL, EVENT_FLAGS};

/// Wait for armed deadlines and raise `AlarmFired` when one passes
#[embassy_executor::task]
pub async fn alarm_task() {
    info!("Alarm task started");

    run_alarm(&ALARM_SIGNAL, || EVENT_FLAGS.raise(Flag::AlarmFired)).await
}
