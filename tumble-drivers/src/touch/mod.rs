//! Touch controller drivers

pub mod mxt;

pub use mxt::{InfoBlock, Mxt, MxtError, ObjectMap, MXT_DEFAULT_ADDRESS};
