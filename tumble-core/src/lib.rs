//! Board-agnostic control logic for the Tumble appliance panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Interrupt-to-main-loop event flags
//! - Sensor-to-screen coordinate mapping
//! - Button table, hit testing and action dispatch
//! - The five-cycle menu ring and per-cycle attribute editing
//! - The alarm-driven wash countdown
//! - Render requests and the polling main loop
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod countdown;
pub mod cycle;
pub mod events;
pub mod render;
pub mod runtime;
pub mod touch;
pub mod ui;
