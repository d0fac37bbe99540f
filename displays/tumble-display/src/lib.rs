//! Canvas abstraction and screen renderer for Tumble
//!
//! This crate provides:
//! - `Canvas` trait: the handful of drawing primitives the panel needs
//! - `IconSet` trait: pixel data for the button icons
//! - `Renderer`: turns core `RenderRequest`s into canvas calls using the
//!   fixed 480x320 screen layout
//!
//! # Architecture
//!
//! The control logic never draws. It emits render requests, and the
//! `Renderer` (a `RenderSink`) translates each one into primitives on
//! whatever `Canvas` the board provides.
//!
//! With the `embedded-graphics` feature, `GraphicsCanvas` implements
//! `Canvas` for any RGB565 `DrawTarget` (e.g. a `mipidsi` panel).

#![no_std]

pub mod backend;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod icons;
pub mod layout;
pub mod renderer;

// Re-export key types
pub use backend::{Canvas, Color, DisplayError};
#[cfg(feature = "embedded-graphics")]
pub use graphics::GraphicsCanvas;
pub use icons::{IconSet, Pixmap};
pub use renderer::Renderer;
