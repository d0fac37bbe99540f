//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tumble-hal for the panel's peripherals:
//!
//! - Touch controllers (Microchip maXTouch over I2C)

#![no_std]
#![deny(unsafe_code)]

pub mod touch;
