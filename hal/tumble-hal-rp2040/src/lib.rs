//! RP2040-specific HAL for the Tumble panel firmware
//!
//! This crate provides RP2040 implementations of the tumble-hal traits:
//! - Countdown alarm on the embassy time driver
//! - Blocking UART transmitter for diagnostics

#![no_std]

pub mod alarm;
pub mod uart;
