//! `Canvas` over an embedded-graphics draw target
//!
//! Works with any RGB565 `DrawTarget`, such as a `mipidsi` display.

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::{raw::BigEndian, Rgb565},
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::backend::{Canvas, Color, DisplayError};

/// Adapter from [`Canvas`] calls to embedded-graphics primitives
pub struct GraphicsCanvas<D> {
    target: D,
    foreground: Rgb565,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            foreground: Rgb565::BLACK,
        }
    }
}

fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::new(color.r() >> 3, color.g() >> 2, color.b() >> 3)
}

fn point(x: u16, y: u16) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn set_foreground(&mut self, color: Color) -> Result<(), DisplayError> {
        self.foreground = to_rgb565(color);
        Ok(())
    }

    fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        if x1 < x0 || y1 < y0 {
            return Err(DisplayError::InvalidCoordinates);
        }
        Rectangle::with_corners(point(x0, y0), point(x1, y1))
            .into_styled(PrimitiveStyle::with_fill(self.foreground))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_circle(&mut self, cx: u16, cy: u16, r: u16) -> Result<(), DisplayError> {
        let diameter = u32::from(r) * 2 + 1;
        Circle::with_center(point(cx, cy), diameter)
            .into_styled(PrimitiveStyle::with_fill(self.foreground))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_pixmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[u8],
    ) -> Result<(), DisplayError> {
        if pixels.len() != usize::from(width) * usize::from(height) * 2 {
            return Err(DisplayError::InvalidCoordinates);
        }
        let raw: ImageRaw<Rgb565, BigEndian> = ImageRaw::new(pixels, u32::from(width));
        Image::new(&raw, point(x, y))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_10X20, self.foreground);
        Text::with_baseline(text, point(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}
