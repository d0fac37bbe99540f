//! Tumble Hardware Abstraction Layer
//!
//! This crate defines the collaborator contracts the control logic consumes.
//! Chip-specific crates (RP2040, host mocks) implement them, which keeps the
//! menu, dispatch and countdown logic free of any board knowledge.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tumble-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tumble-core  (main loop, controller)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tumble-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tumble-hal-   │       │ tumble-       │
//! │    rp2040     │       │   drivers     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`touch::TouchSensor`] - Pending-sample queue of a touch controller
//! - [`alarm::AlarmTimer`] - Free-running tick counter with a one-shot alarm
//! - [`uart::UartTx`] - Serial transmitter used as the diagnostic sink

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod touch;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use alarm::AlarmTimer;
pub use touch::{TouchSample, TouchSensor, SENSOR_RANGE};
pub use uart::UartTx;
