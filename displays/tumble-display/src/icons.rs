//! Button icon pixel data

use tumble_core::ui::IconId;

/// A raw RGB565 (big-endian) image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixmap {
    pub width: u16,
    pub height: u16,
    pub data: &'static [u8],
}

impl Pixmap {
    pub const fn new(width: u16, height: u16, data: &'static [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Check that `data` holds exactly `width * height` pixels
    pub const fn is_well_formed(&self) -> bool {
        self.data.len() == self.width as usize * self.height as usize * 2
    }
}

/// Source of icon images, owned by the board
pub trait IconSet {
    fn icon(&self, id: IconId) -> Pixmap;
}

impl<T: IconSet + ?Sized> IconSet for &T {
    fn icon(&self, id: IconId) -> Pixmap {
        T::icon(self, id)
    }
}
