//! Tumble - Touch Appliance Panel Firmware
//!
//! Main firmware binary for RP2040-based washing-machine style front
//! panels: a maXTouch sensor over I2C, an ILI9488 TFT over SPI, a door
//! switch and a wash countdown driven by an alarm.
//!
//! The door and alarm tasks only raise flags. Everything else runs in the
//! polling main loop at the bottom of `main`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart;
use embassy_time::{Delay, Duration, Timer};
use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9488Rgb666;
use mipidsi::options::{Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tumble_core::controller::{Controller, TouchOutcome};
use tumble_core::runtime::{MainLoop, PollReport};
use tumble_core::ui::DEFAULT_LAYOUT;
use tumble_display::{GraphicsCanvas, Renderer};
use tumble_drivers::touch::{Mxt, MXT_DEFAULT_ADDRESS};
use tumble_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use tumble_hal_rp2040::alarm::EmbassyAlarm;
use tumble_hal_rp2040::uart::BlockingUart;

use crate::channels::{ALARM_SIGNAL, EVENT_FLAGS};
use crate::config::APPLIANCE;
use crate::icons::PanelIcons;

mod channels;
mod config;
mod icons;
mod tasks;

/// Main loop period
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// I2C clock for the touch controller
const TOUCH_I2C_HZ: u32 = 400_000;

/// SPI clock for the panel
const DISPLAY_SPI_HZ: u32 = 32_000_000;

/// SPI staging buffer for mipidsi pixel writes
static DISPLAY_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tumble firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Diagnostic console (UART0 TX on GPIO0)
    let diag = BlockingUart::new(uart::UartTx::new_blocking(
        p.UART0,
        p.PIN_0,
        uart_config(&UartConfig::DIAGNOSTIC),
    ));

    // Touch controller: I2C0 (SDA GPIO4, SCL GPIO5), CHG on GPIO6
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = TOUCH_I2C_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let chg = Input::new(p.PIN_6, Pull::Up);

    let mut touch = Mxt::new(i2c, chg, MXT_DEFAULT_ADDRESS);
    match touch.init() {
        Ok(info) => info!("Touch controller ready: {}, objects: {}", info, touch.objects()),
        Err(e) => defmt::panic!("Touch controller init failed: {}", e),
    }

    // Panel: SPI0 (SCK GPIO18, MOSI GPIO19), CS GPIO17, DC GPIO20, RST GPIO21
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);
    let _backlight = Output::new(p.PIN_22, Level::High);

    let spi_device = match ExclusiveDevice::new(spi, cs, Delay) {
        Ok(device) => device,
        Err(_) => defmt::panic!("Display chip select setup failed"),
    };
    let interface = SpiInterface::new(spi_device, dc, DISPLAY_BUF.init([0; 512]));

    // ILI9488 over SPI only takes 18-bit pixels; native portrait, rotated to landscape
    let mut panel = match Builder::new(ILI9488Rgb666, interface)
        .display_size(320, 480)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .reset_pin(rst)
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => defmt::panic!("Display init failed"),
    };
    info!("Display initialized");

    let canvas = GraphicsCanvas::new(panel.color_converted::<Rgb565>());
    let renderer = Renderer::new(canvas, PanelIcons, DEFAULT_LAYOUT);

    // Flag-raising tasks
    let door = Input::new(p.PIN_15, Pull::Up);
    spawner.spawn(tasks::door_task(door)).unwrap();
    spawner.spawn(tasks::alarm_task()).unwrap();

    let alarm = EmbassyAlarm::new(&ALARM_SIGNAL, APPLIANCE.alarm.prescale);
    let controller = Controller::new(&APPLIANCE);

    let mut main_loop = MainLoop::new(&EVENT_FLAGS, controller, touch, alarm, diag, renderer);
    main_loop.start();
    info!(
        "Main loop running, cycle: {}",
        main_loop.controller().current_cycle().name
    );

    loop {
        for report in main_loop.poll() {
            log_report(&report);
        }

        if let Some(e) = main_loop.renderer_mut().take_error() {
            warn!("Draw failed: {}", e);
        }

        Timer::after(POLL_INTERVAL).await;
    }
}

/// Map the board-agnostic UART settings onto embassy-rp's
fn uart_config(settings: &UartConfig) -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = settings.baudrate;
    config.data_bits = match settings.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    config.parity = match settings.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    config.stop_bits = match settings.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    config
}

fn log_report(report: &PollReport) {
    match report {
        PollReport::DoorToggled { open } => {
            info!("Door {}", if *open { "opened" } else { "closed" })
        }
        PollReport::TouchReadFailed => warn!("Touch read failed, sample dropped"),
        PollReport::Touch { sample, outcome } => match outcome {
            TouchOutcome::Noise => trace!("Noise sample: {}", sample),
            TouchOutcome::Missed(point) => trace!("Touch at {} hit no button", point),
            TouchOutcome::Pressed { point, button } => {
                debug!("{} pressed at {}", button, point)
            }
        },
        PollReport::Alarm {
            remaining,
            finished,
        } => {
            if *finished {
                info!("Run complete");
            } else {
                debug!("Countdown: {} min left", remaining);
            }
        }
    }
}
