//! Button registry and hit dispatcher
//!
//! The registry is a fixed, ordered table of on-screen buttons. When the
//! panel is locked only the first entry (the lock toggle) is active. Hit
//! testing resolves a screen point to at most one button; the bound
//! [`Action`] is applied by [`crate::controller::Controller`].

pub mod action;
pub mod button;
pub mod dispatch;

pub use action::Action;
pub use button::{
    Button, ButtonId, ButtonRegistry, IconId, Rect, BUTTON_COUNT, DEFAULT_LAYOUT,
    LOCKED_BUTTON_COUNT,
};
pub use dispatch::hit_test;
