//! Appliance configuration baked in at build time
//!
//! `build.rs` validates `appliance.toml` and writes it out as a `const`, so
//! nothing is parsed on the device.

use tumble_core::config::{
    AlarmConfig, ApplianceConfig, CountdownPolicy, ScreenGeometry, TouchConfig,
};
use tumble_core::cycle::Cycle;

include!(concat!(env!("OUT_DIR"), "/appliance_config.rs"));
