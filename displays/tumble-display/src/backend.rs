//! Canvas trait
//!
//! Defines the drawing primitives the renderer relies on.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xFF_FF_FF);
    pub const BLACK: Self = Self(0x00_00_00);
    pub const RED: Self = Self(0xFF_00_00);
    pub const GREEN: Self = Self(0x00_FF_00);
    pub const BLUE: Self = Self(0x00_00_FF);
    pub const NAVY: Self = Self(0x00_00_80);

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Pack into 16-bit 5-6-5
    pub const fn to_rgb565(self) -> u16 {
        ((self.r() as u16 >> 3) << 11) | ((self.g() as u16 >> 2) << 5) | (self.b() as u16 >> 3)
    }
}

/// Drawing surface
///
/// Coordinates are screen pixels. Rectangle corners are inclusive.
/// Shapes and text use the current foreground color.
pub trait Canvas {
    /// Set the color used by subsequent fills and text
    fn set_foreground(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Fill the rectangle spanning `(x0, y0)` to `(x1, y1)` inclusive
    fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError>;

    /// Fill a circle of radius `r` centred at `(cx, cy)`
    fn fill_circle(&mut self, cx: u16, cy: u16, r: u16) -> Result<(), DisplayError>;

    /// Blit raw big-endian RGB565 pixels with the top-left at `(x, y)`
    ///
    /// `pixels` must hold `width * height * 2` bytes.
    fn draw_pixmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[u8],
    ) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError>;
}

impl<T: Canvas + ?Sized> Canvas for &mut T {
    fn set_foreground(&mut self, color: Color) -> Result<(), DisplayError> {
        T::set_foreground(self, color)
    }

    fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        T::fill_rect(self, x0, y0, x1, y1)
    }

    fn fill_circle(&mut self, cx: u16, cy: u16, r: u16) -> Result<(), DisplayError> {
        T::fill_circle(self, cx, cy, r)
    }

    fn draw_pixmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[u8],
    ) -> Result<(), DisplayError> {
        T::draw_pixmap(self, x, y, width, height, pixels)
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        T::draw_text(self, x, y, text)
    }
}
