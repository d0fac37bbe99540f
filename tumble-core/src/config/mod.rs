//! Configuration types
//!
//! Board-agnostic configuration structures. Everything here is `const`
//! constructible so a board crate can bake its configuration into flash.

pub mod presets;
pub mod types;

pub use presets::DEFAULT_PRESETS;
pub use types::*;
