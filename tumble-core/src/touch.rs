//! Sensor-to-screen coordinate mapping
//!
//! The touch panel is mounted rotated relative to the TFT: the sensor's
//! Y axis runs along the screen's X axis and both axes are mirrored.
//! Sensor coordinates span `0..SENSOR_RANGE` on each axis.

use tumble_hal::{TouchSample, SENSOR_RANGE};

use crate::config::ScreenGeometry;

/// A point in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPoint {
    pub x: u16,
    pub y: u16,
}

impl ScreenPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Converts raw sensor samples to screen pixels
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    screen: ScreenGeometry,
}

impl CoordinateMapper {
    pub const fn new(screen: ScreenGeometry) -> Self {
        Self { screen }
    }

    /// Map a sample to screen coordinates
    ///
    /// `screen_x = W - W * raw_y / 4096`, `screen_y = H - H * raw_x / 4096`,
    /// with integer division. Results fall within `1..=W` and `1..=H` for
    /// in-range input; out-of-range raw values saturate at 0.
    pub fn map(&self, sample: &TouchSample) -> ScreenPoint {
        ScreenPoint {
            x: Self::mirror(sample.y, self.screen.width),
            y: Self::mirror(sample.x, self.screen.height),
        }
    }

    fn mirror(raw: u16, extent: u16) -> u16 {
        let extent = u32::from(extent);
        let scaled = extent * u32::from(raw) / u32::from(SENSOR_RANGE);
        // extent fits in u16 and the result never exceeds it
        extent.saturating_sub(scaled) as u16
    }
}
