//! Door switch task

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};
use tumble_core::events::Flag;

use crate::channels::EVENT_FLAGS;

/// Switch bounce settle time
const DEBOUNCE: Duration = Duration::from_millis(20);

/// Raise `DoorToggled` on every falling edge of the door switch
#[embassy_executor::task]
pub async fn door_task(mut switch: Input<'static>) {
    info!("Door task started");

    loop {
        switch.wait_for_falling_edge().await;
        EVENT_FLAGS.raise(Flag::DoorToggled);
        Timer::after(DEBOUNCE).await;
    }
}
